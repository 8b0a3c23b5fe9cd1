use super::Collection;
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use protocol::QueryParams;
use serde::Serialize;
use std::fmt::Display;

/// Navigation menu entries shown per role (`menuOptions`)
#[derive(Debug, Clone, Copy)]
pub struct MenuOptions<'a> {
    collection: Collection<'a>,
}

impl<'a> MenuOptions<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            collection: Collection::new(client, "menuOptions"),
        }
    }

    pub async fn get_all(&self) -> Result<ApiResponse> {
        self.collection.list(QueryParams::new()).await
    }

    pub async fn get<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, menu_option: &B) -> Result<ApiResponse> {
        self.collection.create(menu_option).await
    }

    pub async fn update<I: Display, B: Serialize + ?Sized>(
        &self,
        id: I,
        menu_option: &B,
    ) -> Result<ApiResponse> {
        self.collection.update(id, menu_option).await
    }

    pub async fn delete<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.delete(id).await
    }
}

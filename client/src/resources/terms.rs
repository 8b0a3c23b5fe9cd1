use super::Collection;
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use protocol::QueryParams;
use serde::Serialize;
use std::fmt::Display;

/// Academic terms (`terms`)
#[derive(Debug, Clone, Copy)]
pub struct Terms<'a> {
    collection: Collection<'a>,
}

impl<'a> Terms<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            collection: Collection::new(client, "terms"),
        }
    }

    pub async fn get_all(&self) -> Result<ApiResponse> {
        self.collection.list(QueryParams::new()).await
    }

    pub async fn get<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, term: &B) -> Result<ApiResponse> {
        self.collection.create(term).await
    }

    pub async fn update<I: Display, B: Serialize + ?Sized>(
        &self,
        id: I,
        term: &B,
    ) -> Result<ApiResponse> {
        self.collection.update(id, term).await
    }

    pub async fn delete<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.delete(id).await
    }
}

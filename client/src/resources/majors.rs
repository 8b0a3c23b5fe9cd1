use super::Collection;
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use protocol::QueryParams;
use serde::Serialize;
use std::fmt::Display;

/// Degree majors (`majors`)
#[derive(Debug, Clone, Copy)]
pub struct Majors<'a> {
    collection: Collection<'a>,
}

impl<'a> Majors<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            collection: Collection::new(client, "majors"),
        }
    }

    pub async fn get_all(&self) -> Result<ApiResponse> {
        self.collection.list(QueryParams::new()).await
    }

    pub async fn get<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, major: &B) -> Result<ApiResponse> {
        self.collection.create(major).await
    }

    pub async fn update<I: Display, B: Serialize + ?Sized>(
        &self,
        id: I,
        major: &B,
    ) -> Result<ApiResponse> {
        self.collection.update(id, major).await
    }

    pub async fn delete<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.delete(id).await
    }
}

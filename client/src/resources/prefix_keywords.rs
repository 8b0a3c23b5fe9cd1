use super::Collection;
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use protocol::QueryParams;
use serde::Serialize;
use std::fmt::Display;

/// Course prefix keywords (`prefixKeywords`)
#[derive(Debug, Clone, Copy)]
pub struct PrefixKeywords<'a> {
    collection: Collection<'a>,
}

impl<'a> PrefixKeywords<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            collection: Collection::new(client, "prefixKeywords"),
        }
    }

    pub async fn get_all(&self) -> Result<ApiResponse> {
        self.collection.list(QueryParams::new()).await
    }

    pub async fn get<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, prefix_keyword: &B) -> Result<ApiResponse> {
        self.collection.create(prefix_keyword).await
    }

    pub async fn update<I: Display, B: Serialize + ?Sized>(
        &self,
        id: I,
        prefix_keyword: &B,
    ) -> Result<ApiResponse> {
        self.collection.update(id, prefix_keyword).await
    }

    pub async fn delete<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.delete(id).await
    }
}

use super::Collection;
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::upload::UploadFile;
use protocol::QueryParams;
use serde::Serialize;
use std::fmt::Display;

/// Users are created by sign-in or CSV import only, so there is no
/// `create` or `delete` here.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    collection: Collection<'a>,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            collection: Collection::new(client, "users"),
        }
    }

    pub async fn get_all(&self) -> Result<ApiResponse> {
        self.collection.list(QueryParams::new()).await
    }

    pub async fn get<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.get(id).await
    }

    pub async fn update<I: Display, B: Serialize + ?Sized>(
        &self,
        id: I,
        user: &B,
    ) -> Result<ApiResponse> {
        self.collection.update(id, user).await
    }

    pub async fn import_csv(&self, file: UploadFile) -> Result<ApiResponse> {
        self.collection.import(file.into_form()).await
    }
}

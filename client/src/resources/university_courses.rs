use super::Collection;
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::upload::UploadFile;
use protocol::QueryParams;
use serde::Serialize;
use std::fmt::Display;

/// Transfer-equivalent courses of partner universities (`universityCourses`)
#[derive(Debug, Clone, Copy)]
pub struct UniversityCourses<'a> {
    collection: Collection<'a>,
}

impl<'a> UniversityCourses<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            collection: Collection::new(client, "universityCourses"),
        }
    }

    pub async fn get_all(&self) -> Result<ApiResponse> {
        self.collection.list(QueryParams::new()).await
    }

    pub async fn get_by_university_id<I: Display>(&self, university_id: I) -> Result<ApiResponse> {
        self.collection
            .get_path(self.collection.by("university", university_id), QueryParams::new())
            .await
    }

    pub async fn get<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<ApiResponse> {
        self.collection.create(data).await
    }

    pub async fn update<I: Display, B: Serialize + ?Sized>(
        &self,
        id: I,
        data: &B,
    ) -> Result<ApiResponse> {
        self.collection.update(id, data).await
    }

    pub async fn delete<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.delete(id).await
    }

    pub async fn import_csv(&self, file: UploadFile) -> Result<ApiResponse> {
        self.collection.import(file.into_form()).await
    }
}

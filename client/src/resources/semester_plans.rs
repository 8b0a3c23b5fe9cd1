use super::Collection;
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::upload::UploadFile;
use protocol::QueryParams;
use serde::Serialize;
use std::fmt::Display;

/// Recommended per-semester course plans (`semesterPlans`)
#[derive(Debug, Clone, Copy)]
pub struct SemesterPlans<'a> {
    collection: Collection<'a>,
}

impl<'a> SemesterPlans<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            collection: Collection::new(client, "semesterPlans"),
        }
    }

    pub async fn get_all(&self, params: QueryParams) -> Result<ApiResponse> {
        self.collection.list(params).await
    }

    pub async fn get<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, semester_plan: &B) -> Result<ApiResponse> {
        self.collection.create(semester_plan).await
    }

    pub async fn update<I: Display, B: Serialize + ?Sized>(
        &self,
        id: I,
        semester_plan: &B,
    ) -> Result<ApiResponse> {
        self.collection.update(id, semester_plan).await
    }

    pub async fn delete<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.delete(id).await
    }

    pub async fn import_csv(&self, file: UploadFile) -> Result<ApiResponse> {
        self.collection.import(file.into_form()).await
    }
}

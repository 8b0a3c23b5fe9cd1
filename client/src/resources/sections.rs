use super::Collection;
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::upload::UploadFile;
use protocol::QueryParams;
use serde::Serialize;
use std::fmt::Display;

/// Course sections offered in a semester (`sections`)
#[derive(Debug, Clone, Copy)]
pub struct Sections<'a> {
    collection: Collection<'a>,
}

impl<'a> Sections<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            collection: Collection::new(client, "sections"),
        }
    }

    pub async fn get_all(&self, params: QueryParams) -> Result<ApiResponse> {
        self.collection.list(params).await
    }

    pub async fn get_with_count(&self, params: QueryParams) -> Result<ApiResponse> {
        self.collection
            .get_path(self.collection.path().segment("withCount"), params)
            .await
    }

    /// Sections the faculty member with this e-mail is assigned to
    pub async fn get_by_user_email(&self, email: &str, params: QueryParams) -> Result<ApiResponse> {
        self.collection
            .get_path(self.collection.by("user", email), params)
            .await
    }

    pub async fn get<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, section: &B) -> Result<ApiResponse> {
        self.collection.create(section).await
    }

    pub async fn update<I: Display, B: Serialize + ?Sized>(
        &self,
        id: I,
        section: &B,
    ) -> Result<ApiResponse> {
        self.collection.update(id, section).await
    }

    pub async fn delete<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.delete(id).await
    }

    /// Bulk import of a semester's sections; the form carries `file` and `semesterId`.
    pub async fn import_csv<I: Display>(
        &self,
        file: UploadFile,
        semester_id: I,
    ) -> Result<ApiResponse> {
        let form = file.into_form().text("semesterId", semester_id);
        self.collection.import(form).await
    }
}

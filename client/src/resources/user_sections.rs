use super::Collection;
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::upload::UploadFile;
use protocol::QueryParams;
use serde::Serialize;
use std::fmt::Display;

/// Assignments of users (instructors) to sections (`userSections`)
#[derive(Debug, Clone, Copy)]
pub struct UserSections<'a> {
    collection: Collection<'a>,
}

impl<'a> UserSections<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            collection: Collection::new(client, "userSections"),
        }
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<ApiResponse> {
        self.collection.create(data).await
    }

    pub async fn get_all(&self) -> Result<ApiResponse> {
        self.collection.list(QueryParams::new()).await
    }

    /// Sections assigned to one user
    pub async fn get_sections_by_user<I: Display>(&self, user_id: I) -> Result<ApiResponse> {
        self.collection
            .get_path(self.collection.by("user", user_id), QueryParams::new())
            .await
    }

    /// Users assigned to one section
    pub async fn get_users_by_section<I: Display>(&self, section_id: I) -> Result<ApiResponse> {
        self.collection
            .get_path(self.collection.by("section", section_id), QueryParams::new())
            .await
    }

    /// Delete one assignment by its own id
    pub async fn delete<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.delete(id).await
    }

    pub async fn delete_by_user_and_section<U: Display, S: Display>(
        &self,
        user_id: U,
        section_id: S,
    ) -> Result<ApiResponse> {
        let path = self
            .collection
            .by("user", user_id)
            .segment("section")
            .segment(section_id);
        self.collection.delete_path(path).await
    }

    pub async fn import_csv(&self, file: UploadFile) -> Result<ApiResponse> {
        self.collection.import(file.into_form()).await
    }
}

use super::Collection;
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use protocol::QueryParams;
use serde::Serialize;
use std::fmt::Display;

/// Catalogue courses (`courses`)
#[derive(Debug, Clone, Copy)]
pub struct Courses<'a> {
    collection: Collection<'a>,
}

impl<'a> Courses<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            collection: Collection::new(client, "courses"),
        }
    }

    pub async fn get_all(&self, params: QueryParams) -> Result<ApiResponse> {
        self.collection.list(params).await
    }

    /// Courses together with their section counts
    pub async fn get_with_count(&self, params: QueryParams) -> Result<ApiResponse> {
        self.collection
            .get_path(self.collection.path().segment("withCount"), params)
            .await
    }

    /// Courses taught by the faculty member with this e-mail
    pub async fn get_by_user_email(&self, email: &str, params: QueryParams) -> Result<ApiResponse> {
        self.collection
            .get_path(self.collection.by("user", email), params)
            .await
    }

    pub async fn get<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, course: &B) -> Result<ApiResponse> {
        self.collection.create(course).await
    }

    pub async fn update<I: Display, B: Serialize + ?Sized>(
        &self,
        id: I,
        course: &B,
    ) -> Result<ApiResponse> {
        self.collection.update(id, course).await
    }

    pub async fn delete<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.delete(id).await
    }
}

use super::Collection;
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use protocol::QueryParams;
use serde::Serialize;
use std::fmt::Display;

/// Courses assigned to a semester plan slot (`assignedCourses`)
#[derive(Debug, Clone, Copy)]
pub struct AssignedCourses<'a> {
    collection: Collection<'a>,
}

impl<'a> AssignedCourses<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            collection: Collection::new(client, "assignedCourses"),
        }
    }

    pub async fn get_all(&self, params: QueryParams) -> Result<ApiResponse> {
        self.collection.list(params).await
    }

    pub async fn get_by_course_id<I: Display>(&self, course_id: I) -> Result<ApiResponse> {
        self.collection
            .get_path(self.collection.by("course", course_id), QueryParams::new())
            .await
    }

    pub async fn get<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, assigned_course: &B) -> Result<ApiResponse> {
        self.collection.create(assigned_course).await
    }

    pub async fn update<I: Display, B: Serialize + ?Sized>(
        &self,
        id: I,
        assigned_course: &B,
    ) -> Result<ApiResponse> {
        self.collection.update(id, assigned_course).await
    }

    pub async fn delete<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.delete(id).await
    }

    /// Remove every assignment of one course
    pub async fn delete_by_course_id<I: Display>(&self, course_id: I) -> Result<ApiResponse> {
        self.collection
            .delete_path(self.collection.by("course", course_id))
            .await
    }
}

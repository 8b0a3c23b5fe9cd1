use super::Collection;
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::upload::UploadFile;
use protocol::QueryParams;
use serde::Serialize;
use std::fmt::Display;

/// Meeting days and times of course sections (`meetingTimes`)
#[derive(Debug, Clone, Copy)]
pub struct MeetingTimes<'a> {
    collection: Collection<'a>,
}

impl<'a> MeetingTimes<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            collection: Collection::new(client, "meetingTimes"),
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

    pub async fn get_by_section_id<I: Display>(&self, section_id: I) -> Result<ApiResponse> {
        self.collection
            .get_path(self.collection.by("section", section_id), QueryParams::new())
            .await
    }

    pub async fn get<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, meeting_time: &B) -> Result<ApiResponse> {
        self.collection.create(meeting_time).await
    }

    pub async fn update<I: Display, B: Serialize + ?Sized>(
        &self,
        id: I,
        meeting_time: &B,
    ) -> Result<ApiResponse> {
        self.collection.update(id, meeting_time).await
    }

    pub async fn delete<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.collection.delete(id).await
    }

    pub async fn delete_by_course_id<I: Display>(&self, course_id: I) -> Result<ApiResponse> {
        self.collection
            .delete_path(self.collection.by("course", course_id))
            .await
    }

    pub async fn delete_by_section_id<I: Display>(&self, section_id: I) -> Result<ApiResponse> {
        self.collection
            .delete_path(self.collection.by("section", section_id))
            .await
    }

    pub async fn import_csv(&self, file: UploadFile) -> Result<ApiResponse> {
        self.collection.import(file.into_form()).await
    }
}

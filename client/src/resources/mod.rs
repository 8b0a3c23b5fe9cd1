//! One module per backend noun, each method a single request

pub mod assigned_courses;
pub mod courses;
pub mod majors;
pub mod meeting_times;
pub mod menu_options;
pub mod prefix_keywords;
pub mod roles;
pub mod sections;
pub mod semester_plans;
pub mod terms;
pub mod university_courses;
pub mod user_sections;
pub mod users;

pub use assigned_courses::AssignedCourses;
pub use courses::Courses;
pub use majors::Majors;
pub use meeting_times::MeetingTimes;
pub use menu_options::MenuOptions;
pub use prefix_keywords::PrefixKeywords;
pub use roles::Roles;
pub use sections::Sections;
pub use semester_plans::SemesterPlans;
pub use terms::Terms;
pub use university_courses::UniversityCourses;
pub use user_sections::UserSections;
pub use users::Users;

use crate::api_client::ApiClient;
use crate::error::Result;
use crate::response::ApiResponse;
use protocol::{ApiPath, MultipartForm, QueryParams};
use serde::Serialize;
use std::fmt::Display;

/// The list/get/create/update/delete/import shape shared by every resource,
/// rooted at one collection path such as `terms`.
#[derive(Debug, Clone, Copy)]
pub struct Collection<'a> {
    client: &'a ApiClient,
    root: &'a str,
}

impl<'a> Collection<'a> {
    pub fn new(client: &'a ApiClient, root: &'a str) -> Self {
        Self { client, root }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn root(&self) -> &str {
        self.root
    }

    pub fn path(&self) -> ApiPath {
        ApiPath::new(self.root)
    }

    pub fn item<I: Display>(&self, id: I) -> ApiPath {
        self.path().segment(id)
    }

    /// `<root>/<sub>/<id>`, e.g. `meetingTimes/course/3`
    pub fn by<I: Display>(&self, sub: &str, id: I) -> ApiPath {
        self.path().segment(sub).segment(id)
    }

    pub async fn list(&self, params: QueryParams) -> Result<ApiResponse> {
        self.client.get(self.path(), params).await
    }

    pub async fn get<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.client.get(self.item(id), QueryParams::new()).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, body: &B) -> Result<ApiResponse> {
        self.client.post(self.path(), body).await
    }

    pub async fn update<I: Display, B: Serialize + ?Sized>(
        &self,
        id: I,
        body: &B,
    ) -> Result<ApiResponse> {
        self.client.put(self.item(id), body).await
    }

    pub async fn delete<I: Display>(&self, id: I) -> Result<ApiResponse> {
        self.client.delete(self.item(id)).await
    }

    /// GET a sub-path such as one built with [`Collection::by`]
    pub async fn get_path(&self, path: ApiPath, params: QueryParams) -> Result<ApiResponse> {
        self.client.get(path, params).await
    }

    pub async fn delete_path(&self, path: ApiPath) -> Result<ApiResponse> {
        self.client.delete(path).await
    }

    /// `POST <root>/import` with a multipart form
    pub async fn import(&self, form: MultipartForm) -> Result<ApiResponse> {
        self.client.upload(self.path().segment("import"), form).await
    }
}

impl ApiClient {
    pub fn collection<'a>(&'a self, root: &'a str) -> Collection<'a> {
        Collection::new(self, root)
    }

    pub fn assigned_courses(&self) -> AssignedCourses<'_> {
        AssignedCourses::new(self)
    }

    pub fn courses(&self) -> Courses<'_> {
        Courses::new(self)
    }

    pub fn majors(&self) -> Majors<'_> {
        Majors::new(self)
    }

    pub fn meeting_times(&self) -> MeetingTimes<'_> {
        MeetingTimes::new(self)
    }

    pub fn menu_options(&self) -> MenuOptions<'_> {
        MenuOptions::new(self)
    }

    pub fn prefix_keywords(&self) -> PrefixKeywords<'_> {
        PrefixKeywords::new(self)
    }

    pub fn roles(&self) -> Roles<'_> {
        Roles::new(self)
    }

    pub fn sections(&self) -> Sections<'_> {
        Sections::new(self)
    }

    pub fn semester_plans(&self) -> SemesterPlans<'_> {
        SemesterPlans::new(self)
    }

    pub fn terms(&self) -> Terms<'_> {
        Terms::new(self)
    }

    pub fn university_courses(&self) -> UniversityCourses<'_> {
        UniversityCourses::new(self)
    }

    pub fn user_sections(&self) -> UserSections<'_> {
        UserSections::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn auth(&self) -> crate::auth::Auth<'_> {
        crate::auth::Auth::new(self)
    }
}

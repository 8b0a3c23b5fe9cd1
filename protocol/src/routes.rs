//! Client-side navigation targets of the scheduling front-end

use crate::error::ProtocolError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    FacultyCourses,
    AdminDashboard,
    AdminImport,
    AdminTerms,
    AdminUsers,
    AdminCourses,
    AdminRoles,
    AdminMenuOptions,
    Schedule,
    SemesterPlan,
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Login,
        Route::FacultyCourses,
        Route::AdminDashboard,
        Route::AdminImport,
        Route::AdminTerms,
        Route::AdminUsers,
        Route::AdminCourses,
        Route::AdminRoles,
        Route::AdminMenuOptions,
        Route::Schedule,
        Route::SemesterPlan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::FacultyCourses => "facultyCourses",
            Route::AdminDashboard => "adminDashboard",
            Route::AdminImport => "adminImport",
            Route::AdminTerms => "adminTerms",
            Route::AdminUsers => "adminUsers",
            Route::AdminCourses => "adminCourses",
            Route::AdminRoles => "adminRoles",
            Route::AdminMenuOptions => "adminMenuOptions",
            Route::Schedule => "schedule",
            Route::SemesterPlan => "semesterPlan",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::FacultyCourses => "/faculty/courses",
            Route::AdminDashboard => "/admin",
            Route::AdminImport => "/admin/import",
            Route::AdminTerms => "/admin/terms",
            Route::AdminUsers => "/admin/users",
            Route::AdminCourses => "/admin/courses",
            Route::AdminRoles => "/admin/roles",
            Route::AdminMenuOptions => "/admin/menu-options",
            Route::Schedule => "/schedule",
            Route::SemesterPlan => "/semester-plan",
        }
    }

    pub fn alias(self) -> Option<&'static str> {
        match self {
            Route::Login => Some("/login"),
            _ => None,
        }
    }

    /// Route served at `path`, aliases included. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Route::ALL
            .into_iter()
            .find(|route| route.path() == trimmed || route.alias() == Some(trimmed))
    }
}

impl FromStr for Route {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.name() == s)
            .ok_or_else(|| ProtocolError::UnknownRoute(s.to_string()))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

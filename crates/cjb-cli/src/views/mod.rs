//! Role-conditioned views and the router that picks one.
//!
//! Views read the identity only through [`Capabilities`] handed to them by
//! the caller and talk to the API client for their own resources. Their
//! role checks are advisory; the backend enforces every rule again.

pub mod admin;
pub mod company;
pub mod jobs;
pub mod student;

pub use admin::{AdminDashboard, AdminTab};
pub use company::{CompanyDashboard, CompanyTab};
pub use jobs::JobsListView;
pub use student::StudentDashboard;

use std::fmt;

use cjb_models::{Capabilities, Role};

/// Kind of a transient message banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Transient feedback shown after a view action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Screen selected for the current identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    PublicJobs,
    StudentDashboard,
    CompanyDashboard,
    AdminDashboard,
}

impl Route {
    /// Anonymous visitors land on the public job list, everyone else on
    /// their role's dashboard.
    pub fn for_identity(caps: &Capabilities) -> Self {
        match caps.role() {
            None => Route::PublicJobs,
            Some(Role::Student) => Route::StudentDashboard,
            Some(Role::Company) => Route::CompanyDashboard,
            Some(Role::Admin) => Route::AdminDashboard,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::PublicJobs => "Available Jobs",
            Route::StudentDashboard => "Student Dashboard",
            Route::CompanyDashboard => "Company Dashboard",
            Route::AdminDashboard => "Admin Dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cjb_models::{User, UserId};

    fn caps(role: Role) -> Capabilities {
        Capabilities::for_user(&User {
            id: UserId(1),
            email: "x@campus.edu".into(),
            role,
            created_at: None,
            name: None,
            college: None,
            graduation_year: None,
            company_name: None,
            company_description: None,
            verified: false,
        })
    }

    #[test]
    fn test_route_per_role() {
        assert_eq!(Route::for_identity(&Capabilities::anonymous()), Route::PublicJobs);
        assert_eq!(Route::for_identity(&caps(Role::Student)), Route::StudentDashboard);
        assert_eq!(Route::for_identity(&caps(Role::Company)), Route::CompanyDashboard);
        assert_eq!(Route::for_identity(&caps(Role::Admin)), Route::AdminDashboard);
    }

    #[test]
    fn test_banner_kinds() {
        assert!(Banner::error("Failed to load jobs").is_error());
        assert!(!Banner::success("ok").is_error());
        assert_eq!(Banner::success("Saved").to_string(), "Saved");
    }
}

//! Student application models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::job::{Job, JobId};
use crate::status::Status;
use crate::user::UserId;
use crate::utils::null_as_default;

/// Backend-assigned application identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub u64);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ApplicationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Application linking a student to a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub student_id: UserId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub student_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cover_letter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<String>,
    /// Job details, embedded by the listing endpoints. `null` when the job
    /// no longer exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
}

impl Application {
    /// Title of the embedded job, if the backend attached one.
    pub fn job_title(&self) -> Option<&str> {
        self.job.as_ref().map(|job| job.title.as_str())
    }

    /// Only pending applications can still be decided by the company.
    pub fn is_actionable(&self) -> bool {
        self.status.is_pending()
    }
}

/// Body of `POST /applications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub job_id: JobId,
    #[serde(default)]
    pub cover_letter: String,
}

impl NewApplication {
    pub fn new(job_id: JobId, cover_letter: impl Into<String>) -> Self {
        Self {
            job_id,
            cover_letter: cover_letter.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_with_embedded_job() {
        let json = r#"{
            "id": 1,
            "job_id": 7,
            "student_id": 3,
            "student_name": "John Doe",
            "status": "pending",
            "cover_letter": "Hire me",
            "applied_at": "2024-02-01T09:00:00",
            "job": {"id": 7, "company_id": 2, "company_name": "Tech Corp",
                    "title": "Backend Intern", "type": "internship",
                    "description": "", "location": "Remote", "status": "approved"}
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.id, ApplicationId(1));
        assert_eq!(app.job_title(), Some("Backend Intern"));
        assert!(app.is_actionable());
    }

    #[test]
    fn test_application_with_missing_job() {
        let json = r#"{"id": 2, "job_id": 9, "student_id": 3, "status": "approved", "job": null}"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert!(app.job.is_none());
        assert_eq!(app.student_name, "");
        assert!(!app.is_actionable());
    }

    #[test]
    fn test_new_application_wire_format() {
        let body = NewApplication::new(JobId(7), "Hire me");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"job_id": 7, "cover_letter": "Hire me"})
        );
    }
}

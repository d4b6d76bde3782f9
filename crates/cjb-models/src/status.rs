//! Moderation status shared by jobs and applications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Lifecycle status of a job posting or an application.
///
/// Values outside the known set are preserved verbatim so they can still be
/// displayed; they render with the pending presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Pending,
    Approved,
    Rejected,
    Unknown(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Pending => "pending",
            Status::Approved => "approved",
            Status::Rejected => "rejected",
            Status::Unknown(raw) => raw,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Status::Pending)
    }

    /// Badge presentation for this status.
    pub fn badge(&self) -> BadgeStyle {
        match self {
            Status::Approved => BadgeStyle::Approved,
            Status::Rejected => BadgeStyle::Rejected,
            Status::Pending | Status::Unknown(_) => BadgeStyle::Pending,
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Status::Pending,
            "approved" => Status::Approved,
            "rejected" => Status::Rejected,
            _ => Status::Unknown(raw),
        }
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        Status::from(raw.to_string())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of exactly three visual states for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeStyle {
    Pending,
    Approved,
    Rejected,
}

impl BadgeStyle {
    /// ANSI color code used by terminal renderers.
    pub fn ansi_color(&self) -> &'static str {
        match self {
            BadgeStyle::Pending => "33",
            BadgeStyle::Approved => "32",
            BadgeStyle::Rejected => "31",
        }
    }
}

/// Body of `PUT /applications/{id}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: Status,
}

/// Admin moderation action on a pending job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobAction {
    Approve,
    Reject,
}

impl JobAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobAction::Approve => "approve",
            JobAction::Reject => "reject",
        }
    }
}

impl fmt::Display for JobAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobAction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approve" => Ok(JobAction::Approve),
            "reject" => Ok(JobAction::Reject),
            other => Err(ModelError::UnknownAction(other.to_string())),
        }
    }
}

/// Body of `POST /admin/jobs/{id}/approve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDecision {
    pub action: JobAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_for_known_statuses() {
        assert_eq!(Status::from("approved").badge(), BadgeStyle::Approved);
        assert_eq!(Status::from("rejected").badge(), BadgeStyle::Rejected);
        assert_eq!(Status::from("pending").badge(), BadgeStyle::Pending);
    }

    #[test]
    fn test_unknown_status_falls_back_to_pending_badge() {
        let status = Status::from("withdrawn");
        assert_eq!(status, Status::Unknown("withdrawn".to_string()));
        assert_eq!(status.badge(), BadgeStyle::Pending);
        assert_eq!(status.badge().ansi_color(), "33");
        // Raw text is kept for display
        assert_eq!(status.to_string(), "withdrawn");
    }

    #[test]
    fn test_status_serde_preserves_raw_value() {
        let status: Status = serde_json::from_str("\"withdrawn\"").unwrap();
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"withdrawn\"");

        let update = StatusUpdate {
            status: Status::Approved,
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"status": "approved"})
        );
    }

    #[test]
    fn test_job_decision_wire_format() {
        let decision = JobDecision {
            action: JobAction::Reject,
        };
        assert_eq!(
            serde_json::to_value(decision).unwrap(),
            serde_json::json!({"action": "reject"})
        );
        assert_eq!("approve".parse::<JobAction>().unwrap(), JobAction::Approve);
        assert!("archive".parse::<JobAction>().is_err());
    }
}

//! Job posting models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};
use crate::status::Status;
use crate::user::UserId;
use crate::utils::null_as_default;

/// Backend-assigned job identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for JobId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Kind of position offered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    FullTime,
    PartTime,
    #[default]
    Internship,
    Contract,
    /// Any other value the backend stored.
    Other(String),
}

impl JobType {
    pub fn as_str(&self) -> &str {
        match self {
            JobType::FullTime => "full_time",
            JobType::PartTime => "part_time",
            JobType::Internship => "internship",
            JobType::Contract => "contract",
            JobType::Other(raw) => raw,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            JobType::FullTime => "Full Time",
            JobType::PartTime => "Part Time",
            JobType::Internship => "Internship",
            JobType::Contract => "Contract",
            JobType::Other(raw) => raw,
        }
    }
}

impl From<String> for JobType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "full_time" | "fulltime" => JobType::FullTime,
            "part_time" | "parttime" => JobType::PartTime,
            "internship" => JobType::Internship,
            "contract" => JobType::Contract,
            _ => JobType::Other(raw),
        }
    }
}

impl From<JobType> for String {
    fn from(job_type: JobType) -> Self {
        match job_type {
            JobType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for JobType {
    type Err = ModelError;

    /// Strict parse for user input; only the four known kinds are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match JobType::from(s.trim().to_lowercase().replace(['-', ' '], "_")) {
            JobType::Other(raw) => Err(ModelError::invalid(
                "job type",
                format!("{raw} (expected full_time, part_time, internship or contract)"),
            )),
            known => Ok(known),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Job posting as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub company_id: UserId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub job_type: JobType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Job {
    /// Publicly listed jobs are the approved ones.
    pub fn is_public(&self) -> bool {
        self.status == Status::Approved
    }
}

/// Body of `POST /jobs`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl NewJob {
    pub fn new(
        title: impl Into<String>,
        job_type: JobType,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            job_type,
            description: description.into(),
            requirements: String::new(),
            location: location.into(),
            deadline: None,
        }
    }

    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = requirements.into();
        self
    }

    pub fn with_deadline(mut self, deadline: Option<String>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Validate the posting form before it is sent.
    pub fn validate(&self) -> ModelResult<()> {
        if self.title.trim().is_empty() {
            return Err(ModelError::MissingField("Job title"));
        }
        if self.description.trim().is_empty() {
            return Err(ModelError::MissingField("Description"));
        }
        if self.location.trim().is_empty() {
            return Err(ModelError::MissingField("Location"));
        }
        if let Some(deadline) = &self.deadline {
            if chrono::NaiveDate::parse_from_str(deadline, "%Y-%m-%d").is_err() {
                return Err(ModelError::invalid("deadline", "expected YYYY-MM-DD"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_deserialize() {
        let json = r#"{
            "id": 7,
            "company_id": 2,
            "company_name": "Tech Corp",
            "title": "Backend Intern",
            "type": "internship",
            "description": "Build APIs",
            "requirements": "Rust",
            "location": "Remote",
            "deadline": "2024-06-30",
            "status": "approved",
            "created_at": "2024-01-15T10:30:00"
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, JobId(7));
        assert_eq!(job.job_type, JobType::Internship);
        assert!(job.is_public());
    }

    #[test]
    fn test_job_type_keeps_unknown_values() {
        let job_type: JobType = serde_json::from_str("\"apprenticeship\"").unwrap();
        assert_eq!(job_type, JobType::Other("apprenticeship".into()));
        assert_eq!(serde_json::to_string(&job_type).unwrap(), "\"apprenticeship\"");
    }

    #[test]
    fn test_job_type_strict_parse() {
        assert_eq!("full-time".parse::<JobType>().unwrap(), JobType::FullTime);
        assert_eq!("Part Time".parse::<JobType>().unwrap(), JobType::PartTime);
        assert!("gig".parse::<JobType>().is_err());
    }

    #[test]
    fn test_job_type_accepts_unseparated_spellings() {
        let json = r#"{"id": 1, "company_id": 2, "type": "fulltime", "status": "approved"}"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_type, JobType::FullTime);
        assert_eq!(job.job_type.label(), "Full Time");

        assert_eq!("fulltime".parse::<JobType>().unwrap(), JobType::FullTime);
        assert_eq!("PartTime".parse::<JobType>().unwrap(), JobType::PartTime);
    }

    #[test]
    fn test_new_job_wire_format() {
        let job = NewJob::new("Intern", JobType::Internship, "Build things", "Remote")
            .with_requirements("Rust");
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["type"], "internship");
        assert_eq!(value["requirements"], "Rust");
        assert!(value.get("deadline").is_none());
    }

    #[test]
    fn test_new_job_validation() {
        let job = NewJob::new("", JobType::Contract, "desc", "NYC");
        assert_eq!(job.validate(), Err(ModelError::MissingField("Job title")));

        let job = NewJob::new("Dev", JobType::Contract, "desc", "NYC")
            .with_deadline(Some("soon".into()));
        assert!(matches!(job.validate(), Err(ModelError::InvalidField { .. })));

        let job = NewJob::new("Dev", JobType::Contract, "desc", "NYC")
            .with_deadline(Some("2024-12-31".into()));
        assert!(job.validate().is_ok());
    }
}

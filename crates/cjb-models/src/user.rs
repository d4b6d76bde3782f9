//! User identity models.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Backend-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Role discriminant of a user. Immutable after registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Company,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Company => "company",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "company" => Ok(Role::Company),
            "admin" => Ok(Role::Admin),
            other => Err(ModelError::UnknownRole(other.to_string())),
        }
    }
}

/// User record as returned by the backend (password never included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    // Student fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub graduation_year: Option<String>,

    // Company fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    /// Admin-granted flag gating job posting. Absent for non-company users.
    #[serde(default)]
    pub verified: bool,
}

impl User {
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }

    pub fn is_company(&self) -> bool {
        self.role == Role::Company
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name shown in greetings: person name, then company name, then email.
    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.company_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or(self.email.as_str())
    }
}

/// Accept `"2024"` as well as `2024` for year-like fields.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!(" Company ".parse::<Role>().unwrap(), Role::Company);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!(matches!(
            "recruiter".parse::<Role>(),
            Err(ModelError::UnknownRole(_))
        ));
    }

    #[test]
    fn test_company_user_deserialize() {
        let json = r#"{
            "id": 2,
            "email": "techcorp@example.com",
            "role": "company",
            "company_name": "Tech Corp",
            "company_description": "Leading technology company",
            "verified": true,
            "created_at": "2024-01-15T10:30:00.123456"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId(2));
        assert!(user.is_company());
        assert!(user.verified);
        assert_eq!(user.display_name(), "Tech Corp");
        assert_eq!(user.created_at.as_deref(), Some("2024-01-15T10:30:00.123456"));
    }

    #[test]
    fn test_student_user_defaults() {
        let json = r#"{"id": 3, "email": "student@campus.edu", "role": "student",
                       "name": "John Doe", "college": "Campus University", "graduation_year": 2024}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_student());
        assert!(!user.verified);
        assert_eq!(user.graduation_year.as_deref(), Some("2024"));
        assert_eq!(user.display_name(), "John Doe");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let json = r#"{"id": 1, "email": "admin@campus.edu", "role": "admin", "name": ""}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "admin@campus.edu");
    }
}

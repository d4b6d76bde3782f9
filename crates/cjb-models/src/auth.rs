//! Authentication payloads.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::error::{ModelError, ModelResult};
use crate::user::{Role, User};

/// Body of `POST /login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response of `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub user: User,
    pub session_id: String,
}

/// Role-specific registration fields, merged into the request by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterProfile {
    Student {
        name: String,
        college: String,
        graduation_year: String,
    },
    Company {
        company_name: String,
        company_description: String,
    },
    /// Admins carry no extra fields.
    Admin,
}

impl RegisterProfile {
    pub fn role(&self) -> Role {
        match self {
            RegisterProfile::Student { .. } => Role::Student,
            RegisterProfile::Company { .. } => Role::Company,
            RegisterProfile::Admin => Role::Admin,
        }
    }
}

/// Body of `POST /register`.
///
/// Serializes flat: `email`, `password`, `role` plus the profile's fields.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub profile: RegisterProfile,
}

impl RegisterRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        profile: RegisterProfile,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            profile,
        }
    }

    pub fn role(&self) -> Role {
        self.profile.role()
    }

    /// Validate the registration form before it is sent.
    pub fn validate(&self) -> ModelResult<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ModelError::MissingField("Email"));
        }
        if !email.contains('@') {
            return Err(ModelError::invalid("email", "must contain '@'"));
        }
        if self.password.is_empty() {
            return Err(ModelError::MissingField("Password"));
        }

        let required: Vec<(&'static str, &str)> = match &self.profile {
            RegisterProfile::Student {
                name,
                college,
                graduation_year,
            } => vec![
                ("Full name", name.as_str()),
                ("College", college.as_str()),
                ("Graduation year", graduation_year.as_str()),
            ],
            RegisterProfile::Company {
                company_name,
                company_description,
            } => vec![
                ("Company name", company_name.as_str()),
                ("Company description", company_description.as_str()),
            ],
            RegisterProfile::Admin => Vec::new(),
        };

        match required.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ModelError::MissingField(field)),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("profile", &self.profile)
            .finish()
    }
}

impl Serialize for RegisterRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("email", &self.email)?;
        map.serialize_entry("password", &self.password)?;
        map.serialize_entry("role", &self.role())?;

        match &self.profile {
            RegisterProfile::Student {
                name,
                college,
                graduation_year,
            } => {
                map.serialize_entry("name", name)?;
                map.serialize_entry("college", college)?;
                map.serialize_entry("graduation_year", graduation_year)?;
            }
            RegisterProfile::Company {
                company_name,
                company_description,
            } => {
                map.serialize_entry("company_name", company_name)?;
                map.serialize_entry("company_description", company_description)?;
            }
            RegisterProfile::Admin => {}
        }

        map.end()
    }
}

/// Response of `POST /register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    pub user: User,
}

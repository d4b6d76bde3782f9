//! Envelopes returned by mutating endpoints.

use serde::{Deserialize, Serialize};

use crate::application::Application;
use crate::job::Job;
use crate::user::User;

/// Plain `{ "message": ... }` response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Response of `POST /jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosted {
    #[serde(default)]
    pub message: String,
    pub job: Job,
}

/// Response of `POST /applications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSubmitted {
    #[serde(default)]
    pub message: String,
    pub application: Application,
}

/// Response of `PUT /applications/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationUpdated {
    #[serde(default)]
    pub message: String,
    pub application: Application,
}

/// Response of `POST /admin/companies/{id}/verify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyVerified {
    #[serde(default)]
    pub message: String,
    pub company: User,
}

/// Response of `POST /admin/jobs/{id}/approve`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDecided {
    #[serde(default)]
    pub message: String,
    pub job: Job,
}

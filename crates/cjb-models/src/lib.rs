//! Shared data models for the campus job board client.
//!
//! This crate provides Serde-serializable types for:
//! - Users, roles and role-derived capabilities
//! - Job postings and student applications
//! - Moderation status and its badge presentation
//! - Request/response payloads of the job board HTTP API

pub mod application;
pub mod auth;
pub mod capability;
pub mod error;
pub mod job;
pub mod responses;
pub mod status;
pub mod timestamp;
pub mod user;
mod utils;

// Re-export common types
pub use application::{Application, ApplicationId, NewApplication};
pub use auth::{LoginRequest, LoginResponse, RegisterProfile, RegisterRequest, RegisterResponse};
pub use capability::Capabilities;
pub use error::{ModelError, ModelResult};
pub use job::{Job, JobId, JobType, NewJob};
pub use responses::{
    ApplicationSubmitted, ApplicationUpdated, CompanyVerified, JobDecided, JobPosted,
    MessageResponse,
};
pub use status::{BadgeStyle, JobAction, JobDecision, Status, StatusUpdate};
pub use user::{Role, User, UserId};

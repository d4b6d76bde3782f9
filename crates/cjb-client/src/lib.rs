//! Client for the campus job board HTTP API.
//!
//! This crate provides:
//! - A typed API client with one method per backend operation
//! - Session token persistence behind the [`SessionStore`] trait
//! - The [`AuthController`] session lifecycle (restore, login, logout)
//! - Request tracing spans and metrics

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod metrics;
pub mod session;

pub use api::ApiClient;
pub use auth::{AuthController, AuthFailure, AuthState};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, Rejection};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, SessionToken};

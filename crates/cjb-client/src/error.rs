//! Client error types.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Result type for API client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// A non-success HTTP response from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// The `error` field of the JSON payload, when the backend sent one.
    pub message: Option<String>,
    /// Raw response body.
    pub body: String,
}

impl Rejection {
    /// Parse a response body, extracting the backend's `error` message.
    pub fn from_body(body: impl Into<String>) -> Self {
        let body = body.into();
        let message = serde_json::from_str::<ErrorPayload>(&body)
            .ok()
            .and_then(|payload| payload.error)
            .filter(|msg| !msg.trim().is_empty());
        Self { message, body }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, self.body.trim()) {
            (Some(message), _) => write!(f, "{}", message),
            (None, "") => write!(f, "(empty body)"),
            (None, body) => write!(f, "{}", truncate(body, 200)),
        }
    }
}

#[derive(Deserialize)]
struct ErrorPayload {
    error: Option<String>,
}

/// Errors that can occur while talking to the job board API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(Rejection),

    #[error("Forbidden: {0}")]
    Forbidden(Rejection),

    #[error("Not found: {0}")]
    NotFound(Rejection),

    #[error("Bad request: {0}")]
    BadRequest(Rejection),

    #[error("Server error ({0}): {1}")]
    ServerError(u16, Rejection),

    #[error("Request failed ({0}): {1}")]
    RequestFailed(u16, Rejection),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Session store error: {0}")]
    Session(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Classify a non-success response.
    pub fn from_http_status(status: u16, body: impl Into<String>) -> Self {
        let rejection = Rejection::from_body(body);
        match status {
            400 | 422 => Self::BadRequest(rejection),
            401 => Self::Unauthorized(rejection),
            403 => Self::Forbidden(rejection),
            404 => Self::NotFound(rejection),
            500..=599 => Self::ServerError(status, rejection),
            _ => Self::RequestFailed(status, rejection),
        }
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Unauthorized(r)
            | Self::Forbidden(r)
            | Self::NotFound(r)
            | Self::BadRequest(r)
            | Self::ServerError(_, r)
            | Self::RequestFailed(_, r) => Some(r),
            _ => None,
        }
    }

    /// Message the backend put in its error payload, if any.
    pub fn backend_message(&self) -> Option<&str> {
        self.rejection().and_then(|r| r.message.as_deref())
    }

    /// Text for a message banner: the backend's message or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }

    /// HTTP status associated with this error, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError(status, _) | Self::RequestFailed(status, _) => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for transport failures (no response was received).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// True when the backend rejected the session credential.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_http_status_401() {
        let err = ClientError::from_http_status(401, r#"{"error": "Not authenticated"}"#);
        assert!(err.is_auth_failure());
        assert_eq!(err.backend_message(), Some("Not authenticated"));
        assert_eq!(err.http_status(), Some(401));
    }

    #[test]
    fn test_error_from_http_status_403() {
        let err = ClientError::from_http_status(403, r#"{"error": "Access denied"}"#);
        assert!(matches!(err, ClientError::Forbidden(_)));
        assert_eq!(err.to_string(), "Forbidden: Access denied");
    }

    #[test]
    fn test_error_from_http_status_400_and_404() {
        let err = ClientError::from_http_status(400, r#"{"error": "Missing required fields"}"#);
        assert!(matches!(err, ClientError::BadRequest(_)));

        let err = ClientError::from_http_status(404, r#"{"error": "Job not found"}"#);
        assert!(matches!(err, ClientError::NotFound(_)));
        assert_eq!(err.http_status(), Some(404));
    }

    #[test]
    fn test_error_from_http_status_5xx() {
        let err = ClientError::from_http_status(502, "<html>Bad Gateway</html>");
        assert!(matches!(err, ClientError::ServerError(502, _)));
        assert_eq!(err.backend_message(), None);
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn test_error_from_other_status() {
        let err = ClientError::from_http_status(409, "");
        assert!(matches!(err, ClientError::RequestFailed(409, _)));
        assert!(err.to_string().contains("(empty body)"));
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ClientError::from_http_status(500, r#"{"detail": "boom"}"#);
        assert_eq!(err.user_message("Failed to load jobs"), "Failed to load jobs");

        let err = ClientError::from_http_status(400, r#"{"error": "You have already applied for this job"}"#);
        assert_eq!(
            err.user_message("Failed to submit application"),
            "You have already applied for this job"
        );

        let err = ClientError::invalid_response("expected array");
        assert_eq!(err.user_message("Failed to load data"), "Failed to load data");
    }

    #[test]
    fn test_blank_backend_message_is_ignored() {
        let rejection = Rejection::from_body(r#"{"error": "  "}"#);
        assert_eq!(rejection.message, None);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé...");
        assert_eq!(truncate("short", 10), "short");
    }
}

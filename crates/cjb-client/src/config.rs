//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Default API base URL (local development backend).
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Directory holding the persisted session token
    pub session_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
            session_dir: default_session_dir(),
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        let base_url =
            std::env::var("CJB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs: u64 = std::env::var("CJB_API_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let connect_timeout_secs: u64 = std::env::var("CJB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let session_dir = std::env::var("CJB_SESSION_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_session_dir);

        Self {
            base_url: String::new(),
            timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            session_dir,
        }
        .with_base_url(base_url)
    }

    /// Replace the base URL, validating it.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> ClientResult<Self> {
        self.base_url = normalize_base_url(base_url.as_ref())?;
        Ok(self)
    }

    pub fn with_session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = dir.into();
        self
    }
}

/// Validate an http(s) URL and strip trailing slashes.
fn normalize_base_url(raw: &str) -> ClientResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|e| ClientError::config(format!("Invalid API URL '{}': {}", raw, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(ClientError::config(format!(
            "Unsupported API URL scheme '{}' (expected http or https)",
            scheme
        ))),
    }
}

/// Per-user configuration directory, falling back to `./.cjb`.
pub fn default_session_dir() -> PathBuf {
    ProjectDirs::from("edu", "campus-job-board", "cjb")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".cjb"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_base_url_normalization() {
        let config = ClientConfig::default()
            .with_base_url("https://jobs.example.edu/api/")
            .unwrap();
        assert_eq!(config.base_url, "https://jobs.example.edu/api");
    }

    #[test]
    fn test_base_url_rejects_bad_values() {
        assert!(matches!(
            ClientConfig::default().with_base_url("not a url"),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::default().with_base_url("ftp://jobs.example.edu"),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        std::env::set_var("CJB_API_URL", "http://127.0.0.1:9000/api/");
        std::env::set_var("CJB_API_TIMEOUT", "7");
        std::env::set_var("CJB_SESSION_DIR", "/tmp/cjb-test-session");
        std::env::remove_var("CJB_CONNECT_TIMEOUT");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.session_dir, PathBuf::from("/tmp/cjb-test-session"));

        std::env::remove_var("CJB_API_URL");
        std::env::remove_var("CJB_API_TIMEOUT");
        std::env::remove_var("CJB_SESSION_DIR");
    }

    #[test]
    #[serial]
    fn test_config_from_env_rejects_invalid_url() {
        std::env::set_var("CJB_API_URL", "localhost:5000");
        // "localhost:5000" parses with scheme "localhost"
        assert!(ClientConfig::from_env().is_err());
        std::env::remove_var("CJB_API_URL");
    }
}

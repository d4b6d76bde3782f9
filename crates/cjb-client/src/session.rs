//! Session token persistence.
//!
//! The client holds at most one session token. It is written only by the
//! [`AuthController`](crate::auth::AuthController); the API client reads it to
//! attach credentials. No expiry is tracked locally.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// File name of the persisted session token.
pub const SESSION_FILE_NAME: &str = "session_id";

/// Opaque session credential issued by the backend at login.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Storage for the single active session token.
pub trait SessionStore: Send + Sync {
    /// Persist `token`, replacing any previous one.
    fn save(&self, token: &SessionToken) -> ClientResult<()>;

    /// Current token, if any.
    fn read(&self) -> ClientResult<Option<SessionToken>>;

    /// Remove the stored token. Clearing an empty store is a no-op.
    fn clear(&self) -> ClientResult<()>;
}

/// In-process store, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<SessionToken>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(SessionToken::new(token))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &SessionToken) -> ClientResult<()> {
        let mut slot = self
            .token
            .write()
            .map_err(|_| ClientError::session("session lock poisoned"))?;
        *slot = Some(token.clone());
        Ok(())
    }

    fn read(&self) -> ClientResult<Option<SessionToken>> {
        let slot = self
            .token
            .read()
            .map_err(|_| ClientError::session("session lock poisoned"))?;
        Ok(slot.clone())
    }

    fn clear(&self) -> ClientResult<()> {
        let mut slot = self
            .token
            .write()
            .map_err(|_| ClientError::session("session lock poisoned"))?;
        *slot = None;
        Ok(())
    }
}

/// Store that persists the token in a file, surviving process restarts.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store backed by `<dir>/session_id`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &SessionToken) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::session(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let write_err = |e: std::io::Error| {
            ClientError::session(format!("Failed to write {}: {}", self.path.display(), e))
        };

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path).map_err(write_err)?;

        // `mode` only applies on creation; tighten a file left by an older run.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .map_err(|e| {
                    ClientError::session(format!(
                        "Failed to restrict permissions on {}: {}",
                        self.path.display(),
                        e
                    ))
                })?;
        }

        file.write_all(token.as_str().as_bytes()).map_err(write_err)?;

        debug!("Saved session token to {}", self.path.display());
        Ok(())
    }

    fn read(&self) -> ClientResult<Option<SessionToken>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(SessionToken::new(token)))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::session(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn clear(&self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed session token {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::session(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemorySessionStore::new();
        assert_eq!(store.read().unwrap(), None);

        store.save(&SessionToken::new("session_1_123")).unwrap();
        assert_eq!(store.read().unwrap(), Some(SessionToken::new("session_1_123")));

        store.save(&SessionToken::new("session_1_456")).unwrap();
        assert_eq!(store.read().unwrap().unwrap().as_str(), "session_1_456");

        store.clear().unwrap();
        assert_eq!(store.read().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_survives_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::in_dir(dir.path().join("nested"));
        assert_eq!(store.read().unwrap(), None);

        store.save(&SessionToken::new("session_3_99.5")).unwrap();

        // A fresh instance over the same directory sees the token
        let reopened = FileSessionStore::in_dir(dir.path().join("nested"));
        assert_eq!(reopened.read().unwrap().unwrap().as_str(), "session_3_99.5");

        reopened.clear().unwrap();
        assert_eq!(store.read().unwrap(), None);
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_ignores_blank_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE_NAME), "\n").unwrap();
        let store = FileSessionStore::in_dir(dir.path());
        assert_eq!(store.read().unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::in_dir(dir.path());
        store.save(&SessionToken::new("tok")).unwrap();
        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_tightens_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE_NAME);
        std::fs::write(&path, "session_1_old_token_value").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileSessionStore::in_dir(dir.path());
        store.save(&SessionToken::new("tok")).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.read().unwrap(), Some(SessionToken::new("tok")));
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = SessionToken::new("session_1_secret");
        assert!(!format!("{:?}", token).contains("secret"));
    }
}

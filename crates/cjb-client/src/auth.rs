//! Session lifecycle: restore, login, register, logout.
//!
//! The controller is the only writer of the [`SessionStore`]. Its state
//! machine is `Unresolved -> Resolving -> {Authenticated, Anonymous}`; a
//! stored token that the backend rejects is cleared rather than reported.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use cjb_models::{Capabilities, LoginRequest, RegisterRequest, RegisterResponse, User};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::{SessionStore, SessionToken};

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

/// Authentication state of the client.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Session store not inspected yet
    #[default]
    Unresolved,
    /// Stored token is being checked against the backend
    Resolving,
    /// Identity resolved
    Authenticated(User),
    /// No valid session
    Anonymous,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthState::Unresolved => "unresolved",
            AuthState::Resolving => "resolving",
            AuthState::Authenticated(_) => "authenticated",
            AuthState::Anonymous => "anonymous",
        }
    }
}

/// User-facing failure of a login or registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthFailure {
    pub message: String,
}

impl AuthFailure {
    fn from_client_error(err: &ClientError, fallback: &str) -> Self {
        Self {
            message: err.user_message(fallback),
        }
    }
}

/// Orchestrates the session against the API client and the session store.
pub struct AuthController {
    api: Arc<ApiClient>,
    session: Arc<dyn SessionStore>,
    state: AuthState,
}

impl AuthController {
    /// `api` must read its credentials from the same `session` store.
    pub fn new(api: Arc<ApiClient>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            api,
            session,
            state: AuthState::Unresolved,
        }
    }

    /// Build the API client and controller over one shared store.
    pub fn connect(config: &ClientConfig, session: Arc<dyn SessionStore>) -> ClientResult<Self> {
        let api = ApiClient::new(config, Arc::clone(&session))?;
        Ok(Self::new(Arc::new(api), session))
    }

    /// API client for view-level calls.
    pub fn api(&self) -> Arc<ApiClient> {
        Arc::clone(&self.api)
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Present only when authenticated.
    pub fn current_user(&self) -> Option<&User> {
        self.state.user()
    }

    /// True only while the stored token is being checked.
    pub fn is_resolving(&self) -> bool {
        matches!(self.state, AuthState::Resolving)
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::from_optional(self.current_user())
    }

    /// Restore the session from the store.
    ///
    /// Any failure of the identity check clears the store and leaves the
    /// controller anonymous. Running it again with the same rejected token
    /// ends in the same state.
    pub async fn initialize(&mut self) -> &AuthState {
        let token = match self.session.read() {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to read session store, continuing anonymously: {}", e);
                None
            }
        };

        if token.is_none() {
            debug!("No stored session");
            self.state = AuthState::Anonymous;
            return &self.state;
        }

        self.state = AuthState::Resolving;

        match self.api.current_user().await {
            Ok(user) => {
                debug!(user_id = %user.id, role = %user.role, "Restored session");
                self.state = AuthState::Authenticated(user);
            }
            Err(e) => {
                info!("Stored session rejected, signing out locally: {}", e);
                self.clear_session();
                self.state = AuthState::Anonymous;
            }
        }

        &self.state
    }

    /// Log in and persist the returned session token.
    ///
    /// On failure the store and the state are left untouched.
    pub async fn login(
        &mut self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<User, AuthFailure> {
        let request = LoginRequest::new(email, password);

        let response = self.api.login(&request).await.map_err(|e| {
            debug!("Login rejected: {}", e);
            AuthFailure::from_client_error(&e, LOGIN_FAILED)
        })?;

        self.session
            .save(&SessionToken::new(response.session_id))
            .map_err(|e| {
                warn!("Failed to persist session token: {}", e);
                AuthFailure {
                    message: format!("{}: {}", LOGIN_FAILED, e),
                }
            })?;

        info!(user_id = %response.user.id, role = %response.user.role, "Logged in");
        self.state = AuthState::Authenticated(response.user.clone());
        Ok(response.user)
    }

    /// Register a new user. Does not log in or touch the session.
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResponse, AuthFailure> {
        if let Err(e) = request.validate() {
            return Err(AuthFailure {
                message: e.to_string(),
            });
        }

        self.api.register(request).await.map_err(|e| {
            debug!("Registration rejected: {}", e);
            AuthFailure::from_client_error(&e, REGISTRATION_FAILED)
        })
    }

    /// Log out. Always ends anonymous with an empty store, even when the
    /// backend call fails.
    pub async fn logout(&mut self) {
        if let Err(e) = self.api.logout().await {
            warn!("Logout request failed, clearing local session anyway: {}", e);
        }

        self.clear_session();
        self.state = AuthState::Anonymous;
        info!("Logged out");
    }

    fn clear_session(&self) {
        if let Err(e) = self.session.clear() {
            warn!("Failed to clear session store: {}", e);
        }
    }
}

//! Per-invocation context: configuration, resolved session and output.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use cjb_client::{ApiClient, AuthController, ClientConfig, FileSessionStore, SessionStore};
use cjb_models::{Capabilities, User};

use crate::cli::Cli;
use crate::output::{OutputFormat, OutputWriter};

/// Everything a command needs. The session is resolved before any command
/// runs, so role-gated commands see the restored identity.
pub struct CliContext {
    pub auth: AuthController,
    pub output: OutputWriter,
}

impl CliContext {
    /// Build the context from parsed arguments. Flags override the
    /// environment.
    pub async fn new(cli: &Cli) -> Result<Self> {
        let mut config = ClientConfig::from_env().context("Failed to load client configuration")?;

        if let Some(url) = &cli.api_url {
            config = config
                .with_base_url(url)
                .context("Invalid --api-url")?;
        }
        if let Some(dir) = &cli.session_dir {
            config = config.with_session_dir(dir.clone());
        }

        Self::connect(&config, cli.format).await
    }

    /// Connect with an explicit configuration and resolve the stored session.
    pub async fn connect(config: &ClientConfig, format: OutputFormat) -> Result<Self> {
        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::in_dir(&config.session_dir));
        let mut auth = AuthController::connect(config, store)
            .context("Failed to build the API client")?;

        let state = auth.initialize().await;
        debug!(base_url = %config.base_url, state = state.as_str(), "Session resolved");

        Ok(Self {
            auth,
            output: OutputWriter::new(format),
        })
    }

    pub fn api(&self) -> Arc<ApiClient> {
        self.auth.api()
    }

    pub fn user(&self) -> Option<&User> {
        self.auth.current_user()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.auth.capabilities()
    }
}

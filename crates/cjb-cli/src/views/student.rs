//! Student dashboard: the caller's own applications.

use std::sync::Arc;

use tracing::debug;

use cjb_client::ApiClient;
use cjb_models::{Application, Status};

use super::Banner;

const LOAD_FAILED: &str = "Failed to load applications";

pub struct StudentDashboard {
    api: Arc<ApiClient>,
    applications: Vec<Application>,
    banner: Option<Banner>,
}

impl StudentDashboard {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            applications: Vec::new(),
            banner: None,
        }
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Count of applications still waiting for a company decision.
    pub fn pending_count(&self) -> usize {
        self.applications
            .iter()
            .filter(|a| a.status == Status::Pending)
            .count()
    }

    pub async fn load(&mut self) {
        match self.api.list_my_applications().await {
            Ok(applications) => {
                debug!(count = applications.len(), "Loaded student applications");
                self.applications = applications;
                self.banner = None;
            }
            Err(e) => {
                debug!("Loading applications failed: {}", e);
                self.banner = Some(Banner::error(e.user_message(LOAD_FAILED)));
            }
        }
    }
}

//! Admin dashboard: company verification, job moderation and the full
//! application list.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info};

use cjb_client::ApiClient;
use cjb_models::{Application, Capabilities, Job, JobAction, JobId, User, UserId};

use super::Banner;

const LOAD_FAILED: &str = "Failed to load data";
const VERIFY_FAILED: &str = "Failed to verify company";
const DECIDE_FAILED: &str = "Failed to update job status";
const VERIFIED: &str = "Company verified successfully";
const ADMIN_ONLY: &str = "Admin access required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Companies,
    Jobs,
    Applications,
}

impl AdminTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminTab::Companies => "companies",
            AdminTab::Jobs => "jobs",
            AdminTab::Applications => "applications",
        }
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "companies" => Ok(AdminTab::Companies),
            "jobs" => Ok(AdminTab::Jobs),
            "applications" => Ok(AdminTab::Applications),
            other => Err(format!("unknown tab: {}", other)),
        }
    }
}

fn decided_message(action: JobAction) -> &'static str {
    match action {
        JobAction::Approve => "Job approved successfully",
        JobAction::Reject => "Job rejected successfully",
    }
}

pub struct AdminDashboard {
    api: Arc<ApiClient>,
    caps: Capabilities,
    tab: AdminTab,
    companies: Vec<User>,
    pending_jobs: Vec<Job>,
    applications: Vec<Application>,
    banner: Option<Banner>,
}

impl AdminDashboard {
    pub fn new(api: Arc<ApiClient>, caps: Capabilities) -> Self {
        Self {
            api,
            caps,
            tab: AdminTab::default(),
            companies: Vec::new(),
            pending_jobs: Vec::new(),
            applications: Vec::new(),
            banner: None,
        }
    }

    /// Start on `tab` without loading it.
    pub fn with_tab(mut self, tab: AdminTab) -> Self {
        self.tab = tab;
        self
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    /// Companies awaiting verification.
    pub fn companies(&self) -> &[User] {
        &self.companies
    }

    pub fn pending_jobs(&self) -> &[Job] {
        &self.pending_jobs
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub async fn select_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
        self.load().await;
    }

    /// Load the active tab's resource.
    pub async fn load(&mut self) {
        let result = match self.tab {
            AdminTab::Companies => self
                .api
                .list_unverified_companies()
                .await
                .map(|companies| self.companies = companies),
            AdminTab::Jobs => self
                .api
                .list_pending_jobs()
                .await
                .map(|jobs| self.pending_jobs = jobs),
            AdminTab::Applications => self
                .api
                .list_all_applications()
                .await
                .map(|applications| self.applications = applications),
        };

        if let Err(e) = result {
            debug!(tab = %self.tab, "Loading admin data failed: {}", e);
            self.banner = Some(Banner::error(LOAD_FAILED));
        }
    }

    /// Mark a company verified, then reload the active tab.
    pub async fn verify_company(&mut self, company_id: UserId) -> Option<User> {
        if !self.caps.can_moderate() {
            self.banner = Some(Banner::error(ADMIN_ONLY));
            return None;
        }

        match self.api.verify_company(company_id).await {
            Ok(verified) => {
                info!(company_id = %company_id, "Company verified");
                self.banner = Some(Banner::success(VERIFIED));
                self.load().await;
                Some(verified.company)
            }
            Err(e) => {
                debug!(company_id = %company_id, "Verifying company failed: {}", e);
                self.banner = Some(Banner::error(e.user_message(VERIFY_FAILED)));
                None
            }
        }
    }

    /// Approve or reject a pending job, then reload the active tab.
    pub async fn decide_job(&mut self, job_id: JobId, action: JobAction) -> Option<Job> {
        if !self.caps.can_moderate() {
            self.banner = Some(Banner::error(ADMIN_ONLY));
            return None;
        }

        match self.api.decide_job(job_id, action).await {
            Ok(decided) => {
                info!(job_id = %job_id, status = %decided.job.status, "Job decided");
                self.banner = Some(Banner::success(decided_message(action)));
                self.load().await;
                Some(decided.job)
            }
            Err(e) => {
                debug!(job_id = %job_id, "Deciding job failed: {}", e);
                self.banner = Some(Banner::error(e.user_message(DECIDE_FAILED)));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_parsing() {
        assert_eq!("companies".parse::<AdminTab>().unwrap(), AdminTab::Companies);
        assert_eq!("jobs".parse::<AdminTab>().unwrap(), AdminTab::Jobs);
        assert!("users".parse::<AdminTab>().is_err());
    }

    #[test]
    fn test_decision_messages() {
        assert_eq!(decided_message(JobAction::Approve), "Job approved successfully");
        assert_eq!(decided_message(JobAction::Reject), "Job rejected successfully");
    }
}

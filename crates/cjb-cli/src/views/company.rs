//! Company dashboard: own postings and the applications they received.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info};

use cjb_client::ApiClient;
use cjb_models::{Application, ApplicationId, Capabilities, Job, NewJob, Status};

use super::Banner;

const JOBS_LOAD_FAILED: &str = "Failed to load jobs";
const APPLICATIONS_LOAD_FAILED: &str = "Failed to load applications";
const POST_FAILED: &str = "Failed to post job";
const UPDATE_FAILED: &str = "Failed to update status";
const POSTED: &str = "Job posted successfully! Waiting for admin approval.";
const UPDATED: &str = "Application status updated";
const COMPANIES_ONLY: &str = "Company access required";
const NOT_PENDING: &str = "Only pending applications can be updated";
pub const VERIFICATION_REQUIRED: &str =
    "Your company account needs to be verified by admin before posting jobs!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanyTab {
    #[default]
    Jobs,
    Applications,
}

impl CompanyTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyTab::Jobs => "jobs",
            CompanyTab::Applications => "applications",
        }
    }
}

impl fmt::Display for CompanyTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jobs" => Ok(CompanyTab::Jobs),
            "applications" => Ok(CompanyTab::Applications),
            other => Err(format!("unknown tab: {}", other)),
        }
    }
}

pub struct CompanyDashboard {
    api: Arc<ApiClient>,
    caps: Capabilities,
    tab: CompanyTab,
    jobs: Vec<Job>,
    applications: Vec<Application>,
    banner: Option<Banner>,
}

impl CompanyDashboard {
    pub fn new(api: Arc<ApiClient>, caps: Capabilities) -> Self {
        Self {
            api,
            caps,
            tab: CompanyTab::default(),
            jobs: Vec::new(),
            applications: Vec::new(),
            banner: None,
        }
    }

    pub fn tab(&self) -> CompanyTab {
        self.tab
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Unverified companies see the verification notice instead of the
    /// posting controls.
    pub fn needs_verification(&self) -> bool {
        self.caps.needs_verification()
    }

    /// Switch tabs and load the newly active one.
    pub async fn select_tab(&mut self, tab: CompanyTab) {
        self.tab = tab;
        self.load().await;
    }

    /// Load the active tab's resource.
    pub async fn load(&mut self) {
        match self.tab {
            CompanyTab::Jobs => self.load_jobs().await,
            CompanyTab::Applications => self.load_applications().await,
        }
    }

    async fn load_jobs(&mut self) {
        match self.api.list_my_jobs().await {
            Ok(jobs) => {
                debug!(count = jobs.len(), "Loaded company jobs");
                self.jobs = jobs;
            }
            Err(e) => {
                debug!("Loading company jobs failed: {}", e);
                self.banner = Some(Banner::error(JOBS_LOAD_FAILED));
            }
        }
    }

    async fn load_applications(&mut self) {
        match self.api.list_my_applications().await {
            Ok(applications) => {
                debug!(count = applications.len(), "Loaded company applications");
                self.applications = applications;
            }
            Err(e) => {
                debug!("Loading company applications failed: {}", e);
                self.banner = Some(Banner::error(APPLICATIONS_LOAD_FAILED));
            }
        }
    }

    /// Post a job, then reload the job list once the backend answered.
    ///
    /// Unverified companies are stopped before any request is made.
    pub async fn post_job(&mut self, job: &NewJob) -> Option<Job> {
        self.banner = None;

        if !self.caps.can_post_jobs() {
            self.banner = Some(Banner::error(VERIFICATION_REQUIRED));
            return None;
        }

        if let Err(e) = job.validate() {
            self.banner = Some(Banner::error(e.to_string()));
            return None;
        }

        match self.api.create_job(job).await {
            Ok(posted) => {
                info!(job_id = %posted.job.id, "Job posted");
                self.banner = Some(Banner::success(POSTED));
                self.load_jobs().await;
                Some(posted.job)
            }
            Err(e) => {
                debug!("Posting job failed: {}", e);
                self.banner = Some(Banner::error(e.user_message(POST_FAILED)));
                None
            }
        }
    }

    /// Approve or reject an application, then reload the applications.
    ///
    /// A loaded application that has already been decided is refused
    /// locally.
    pub async fn update_application_status(
        &mut self,
        application_id: ApplicationId,
        status: Status,
    ) -> Option<Application> {
        if !self.caps.can_review_applications() {
            self.banner = Some(Banner::error(COMPANIES_ONLY));
            return None;
        }

        let decided = self
            .applications
            .iter()
            .any(|a| a.id == application_id && !a.is_actionable());
        if decided {
            self.banner = Some(Banner::error(NOT_PENDING));
            return None;
        }

        match self
            .api
            .update_application_status(application_id, status)
            .await
        {
            Ok(updated) => {
                info!(application_id = %application_id, status = %updated.application.status, "Application status updated");
                self.banner = Some(Banner::success(UPDATED));
                self.load_applications().await;
                Some(updated.application)
            }
            Err(e) => {
                debug!(application_id = %application_id, "Updating application failed: {}", e);
                self.banner = Some(Banner::error(e.user_message(UPDATE_FAILED)));
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
        assert_eq!("jobs".parse::<CompanyTab>().unwrap(), CompanyTab::Jobs);
        assert_eq!(
            "applications".parse::<CompanyTab>().unwrap(),
            CompanyTab::Applications
        );
        assert!("companies".parse::<CompanyTab>().is_err());
        assert_eq!(CompanyTab::default(), CompanyTab::Jobs);
    }
}

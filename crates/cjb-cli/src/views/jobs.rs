//! Public job list with the student apply action.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

use cjb_client::ApiClient;
use cjb_models::{Application, Capabilities, Job, JobId, NewApplication};

use super::Banner;

const LOAD_FAILED: &str = "Failed to load jobs";
const APPLY_FAILED: &str = "Failed to submit application";
const STUDENTS_ONLY: &str = "Only students can apply for jobs";
const ALREADY_SUBMITTING: &str = "An application for this job is already being submitted";
const APPLIED: &str = "Application submitted successfully!";

/// Approved jobs, with per-job tracking of in-flight applications.
pub struct JobsListView {
    api: Arc<ApiClient>,
    caps: Capabilities,
    jobs: Vec<Job>,
    loaded: bool,
    banner: Mutex<Option<Banner>>,
    applying: Mutex<HashSet<JobId>>,
}

impl JobsListView {
    pub fn new(api: Arc<ApiClient>, caps: Capabilities) -> Self {
        Self {
            api,
            caps,
            jobs: Vec::new(),
            loaded: false,
            banner: Mutex::new(None),
            applying: Mutex::new(HashSet::new()),
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_banner(&self, banner: Option<Banner>) {
        *self.banner.lock().unwrap_or_else(PoisonError::into_inner) = banner;
    }

    /// Whether the apply control is offered at all.
    pub fn shows_apply(&self) -> bool {
        self.caps.can_apply()
    }

    /// Whether the apply control for `job_id` is disabled by a pending
    /// submission for that same job.
    pub fn is_applying(&self, job_id: JobId) -> bool {
        self.applying
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&job_id)
    }

    /// Fetch the approved job list.
    pub async fn load(&mut self) {
        match self.api.list_jobs().await {
            Ok(jobs) => {
                debug!(count = jobs.len(), "Loaded jobs");
                self.jobs = jobs;
            }
            Err(e) => {
                debug!("Loading jobs failed: {}", e);
                self.set_banner(Some(Banner::error(LOAD_FAILED)));
            }
        }
        self.loaded = true;
    }

    /// Submit an application for `job_id`.
    ///
    /// Refused without a request for non-students and while an earlier
    /// submission for the same job is still in flight. Submissions for other
    /// jobs are unaffected.
    pub async fn apply(&self, job_id: JobId, cover_letter: &str) -> Option<Application> {
        if !self.caps.can_apply() {
            self.set_banner(Some(Banner::error(STUDENTS_ONLY)));
            return None;
        }

        let Some(_in_flight) = InFlight::begin(&self.applying, job_id) else {
            self.set_banner(Some(Banner::error(ALREADY_SUBMITTING)));
            return None;
        };

        self.set_banner(None);

        let request = NewApplication::new(job_id, cover_letter);
        match self.api.create_application(&request).await {
            Ok(submitted) => {
                info!(job_id = %job_id, application_id = %submitted.application.id, "Application submitted");
                self.set_banner(Some(Banner::success(APPLIED)));
                Some(submitted.application)
            }
            Err(e) => {
                debug!(job_id = %job_id, "Application failed: {}", e);
                self.set_banner(Some(Banner::error(e.user_message(APPLY_FAILED))));
                None
            }
        }
    }
}

/// Marks one job as having a submission in flight until dropped.
struct InFlight<'a> {
    ids: &'a Mutex<HashSet<JobId>>,
    job_id: JobId,
}

impl<'a> InFlight<'a> {
    fn begin(ids: &'a Mutex<HashSet<JobId>>, job_id: JobId) -> Option<Self> {
        let inserted = ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(job_id);
        inserted.then_some(Self { ids, job_id })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.job_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_is_keyed_per_job() {
        let ids = Mutex::new(HashSet::new());

        let first = InFlight::begin(&ids, JobId(1)).unwrap();
        assert!(InFlight::begin(&ids, JobId(1)).is_none());

        // A different job is independent
        let second = InFlight::begin(&ids, JobId(2)).unwrap();
        drop(second);

        drop(first);
        assert!(InFlight::begin(&ids, JobId(1)).is_some());
        assert!(ids.lock().unwrap().is_empty());
    }
}

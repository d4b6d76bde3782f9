//! Job board REST API client.
//!
//! One method per backend operation. Each call is a single request/response
//! exchange with no automatic retry; the stored session token is attached to
//! every call except login and registration.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info_span, warn, Instrument};

use cjb_models::{
    Application, ApplicationId, ApplicationSubmitted, ApplicationUpdated, CompanyVerified, Job,
    JobAction, JobDecided, JobDecision, JobId, JobPosted, LoginRequest, LoginResponse,
    MessageResponse, NewApplication, NewJob, RegisterRequest, RegisterResponse, Status,
    StatusUpdate, User, UserId,
};

use crate::config::ClientConfig;
use crate::error::{truncate, ClientError, ClientResult};
use crate::metrics::record_request;
use crate::session::{SessionStore, SessionToken};

/// Whether a request carries the session credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Credential {
    Session,
    Omit,
}

/// Client for the job board HTTP API.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a new API client reading credentials from `session`.
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!("cjb-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange credentials for a session token and the user record.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let builder = self.http.post(self.url("/login")).json(request);
        self.send("login", builder, Credential::Omit).await
    }

    /// Create a user of the request's role. Does not log in.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<RegisterResponse> {
        let builder = self.http.post(self.url("/register")).json(request);
        self.send("register", builder, Credential::Omit).await
    }

    /// Invalidate the current session on the backend.
    pub async fn logout(&self) -> ClientResult<MessageResponse> {
        let builder = self.http.post(self.url("/logout"));
        self.send("logout", builder, Credential::Session).await
    }

    /// Resolve the identity behind the stored token.
    pub async fn current_user(&self) -> ClientResult<User> {
        let builder = self.http.get(self.url("/me"));
        self.send("current_user", builder, Credential::Session).await
    }

    // =========================================================================
    // Jobs
    // =========================================================================

    /// List approved jobs.
    pub async fn list_jobs(&self) -> ClientResult<Vec<Job>> {
        let builder = self.http.get(self.url("/jobs"));
        self.send("list_jobs", builder, Credential::Session).await
    }

    pub async fn get_job(&self, job_id: JobId) -> ClientResult<Job> {
        let builder = self.http.get(self.url(&format!("/jobs/{}", job_id)));
        self.send("get_job", builder, Credential::Session).await
    }

    /// Post a job (verified companies only; enforced by the backend).
    pub async fn create_job(&self, job: &NewJob) -> ClientResult<JobPosted> {
        let builder = self.http.post(self.url("/jobs")).json(job);
        self.send("create_job", builder, Credential::Session).await
    }

    /// Jobs owned by the caller's company.
    pub async fn list_my_jobs(&self) -> ClientResult<Vec<Job>> {
        let builder = self.http.get(self.url("/jobs/my"));
        self.send("list_my_jobs", builder, Credential::Session).await
    }

    // =========================================================================
    // Applications
    // =========================================================================

    pub async fn create_application(
        &self,
        application: &NewApplication,
    ) -> ClientResult<ApplicationSubmitted> {
        let builder = self.http.post(self.url("/applications")).json(application);
        self.send("create_application", builder, Credential::Session)
            .await
    }

    /// Students get their own applications, companies those to their jobs.
    pub async fn list_my_applications(&self) -> ClientResult<Vec<Application>> {
        let builder = self.http.get(self.url("/applications/my"));
        self.send("list_my_applications", builder, Credential::Session)
            .await
    }

    pub async fn update_application_status(
        &self,
        application_id: ApplicationId,
        status: Status,
    ) -> ClientResult<ApplicationUpdated> {
        let builder = self
            .http
            .put(self.url(&format!("/applications/{}/status", application_id)))
            .json(&StatusUpdate { status });
        self.send("update_application_status", builder, Credential::Session)
            .await
    }

    // =========================================================================
    // Admin
    // =========================================================================

    pub async fn list_unverified_companies(&self) -> ClientResult<Vec<User>> {
        let builder = self.http.get(self.url("/admin/companies"));
        self.send("list_unverified_companies", builder, Credential::Session)
            .await
    }

    pub async fn verify_company(&self, company_id: UserId) -> ClientResult<CompanyVerified> {
        let builder = self
            .http
            .post(self.url(&format!("/admin/companies/{}/verify", company_id)));
        self.send("verify_company", builder, Credential::Session)
            .await
    }

    pub async fn list_pending_jobs(&self) -> ClientResult<Vec<Job>> {
        let builder = self.http.get(self.url("/admin/jobs"));
        self.send("list_pending_jobs", builder, Credential::Session)
            .await
    }

    /// Approve or reject a pending job.
    pub async fn decide_job(&self, job_id: JobId, action: JobAction) -> ClientResult<JobDecided> {
        let builder = self
            .http
            .post(self.url(&format!("/admin/jobs/{}/approve", job_id)))
            .json(&JobDecision { action });
        self.send("decide_job", builder, Credential::Session).await
    }

    pub async fn list_all_applications(&self) -> ClientResult<Vec<Application>> {
        let builder = self.http.get(self.url("/admin/applications"));
        self.send("list_all_applications", builder, Credential::Session)
            .await
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn session_token(&self) -> Option<SessionToken> {
        match self.session.read() {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not read session token, sending without credentials: {}", e);
                None
            }
        }
    }

    /// Send a request with tracing and metrics, decoding a JSON body.
    async fn send<T>(
        &self,
        operation: &'static str,
        mut builder: RequestBuilder,
        credential: Credential,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let mut authenticated = false;
        if credential == Credential::Session {
            if let Some(token) = self.session_token() {
                builder = builder.header(AUTHORIZATION, token.as_str());
                authenticated = true;
            }
        }

        let span = info_span!("api_request", operation = %operation, authenticated);
        let start = Instant::now();

        let (status, result) = Self::execute(builder).instrument(span).await;

        let latency_ms = start.elapsed().as_millis() as f64;
        record_request(operation, status, latency_ms);

        match &result {
            Ok(_) => debug!(operation, latency_ms, "API request succeeded"),
            Err(e) => debug!(operation, latency_ms, "API request failed: {}", e),
        }

        result
    }

    /// Send and decode, returning the HTTP status alongside the result
    /// (`0` when no response arrived).
    async fn execute<T>(builder: RequestBuilder) -> (u16, ClientResult<T>)
    where
        T: DeserializeOwned,
    {
        match builder.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                (status, Self::decode(response).await)
            }
            Err(e) => {
                let error = ClientError::Network(e);
                (error.http_status().unwrap_or(0), Err(error))
            }
        }
    }

    async fn decode<T>(response: Response) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::from_http_status(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| {
            ClientError::invalid_response(format!(
                "{} (body prefix: {})",
                e,
                truncate(&body, 200)
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_url_joins_paths() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:5000/api/")
            .unwrap();
        let client = ApiClient::new(&config, Arc::new(MemorySessionStore::new())).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/jobs/my"), "http://localhost:5000/api/jobs/my");
    }

    #[tokio::test]
    async fn test_execute_reports_actual_status() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/jobs"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/jobs/9"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "Job not found"})))
            .mount(&server)
            .await;

        let http = Client::new();

        let (status, result) =
            ApiClient::execute::<serde_json::Value>(http.post(format!("{}/api/jobs", server.uri())))
                .await;
        assert_eq!(status, 201);
        assert!(result.is_ok());

        let (status, result) =
            ApiClient::execute::<serde_json::Value>(http.get(format!("{}/api/jobs/9", server.uri())))
                .await;
        assert_eq!(status, 404);
        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }
}

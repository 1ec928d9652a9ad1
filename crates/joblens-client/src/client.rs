//! Jobs service HTTP client.
//!
//! Thin authorized wrapper over the remote endpoints:
//! - `POST /login`
//! - `GET /profile`
//! - `GET /jobs` parameterized by a [`QuerySpec`]
//! - `GET /jobs/{id}`
//!
//! Every non-success outcome is mapped into [`ClientError`] here; nothing
//! above this layer sees a raw HTTP status.

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::{debug, warn};

use joblens_models::{JobDetail, JobSummary, ProfileSummary, QuerySpec};

use crate::credentials::{CredentialStore, SESSION_TTL_DAYS};
use crate::error::{ClientError, ClientResult};
use crate::types::{
    ApiErrorBody, JobDetailResponse, JobsResponse, LoginRequest, LoginResponse, ProfileResponse,
};

/// Jobs service client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the jobs service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://apis.ccbp.in".to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("JOBS_API_URL")
                .unwrap_or_else(|_| "https://apis.ccbp.in".to_string()),
            timeout: Duration::from_secs(
                std::env::var("JOBS_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            connect_timeout: Duration::from_secs(
                std::env::var("JOBS_API_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}

/// Authorized client for the jobs service.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    credentials: CredentialStore,
}

impl ApiClient {
    /// Create a new client sharing the given credential store.
    pub fn new(config: ApiConfig, credentials: CredentialStore) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("joblens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self {
            http,
            config,
            credentials,
        })
    }

    /// Create from environment variables.
    pub fn from_env(credentials: CredentialStore) -> ClientResult<Self> {
        Self::new(ApiConfig::from_env(), credentials)
    }

    /// The credential store this client reads from.
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Authenticate and store the session token on success.
    ///
    /// On rejection the server's message is surfaced verbatim and the
    /// credential store is left untouched.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<()> {
        let url = format!("{}/login", self.config.base_url);
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        debug!(%username, "logging in");
        let response = self.http.post(&url).json(&body).send().await?;

        if response.status().is_success() {
            let parsed: LoginResponse = response.json().await?;
            self.credentials.set(parsed.jwt_token, SESSION_TTL_DAYS);
            Ok(())
        } else {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(err_body) => {
                    warn!(%username, "login rejected");
                    Err(ClientError::rejected(err_body.error_msg))
                }
                Err(_) => Err(ClientError::from_http_status(status, "login")),
            }
        }
    }

    /// Fetch the signed-in user's profile.
    pub async fn fetch_profile(&self) -> ClientResult<ProfileSummary> {
        let url = format!("{}/profile", self.config.base_url);
        let response = self.authorized_get(&url, &[]).await?;
        let response = Self::expect_success(response, "profile").await?;
        let parsed: ProfileResponse = response.json().await?;
        Ok(parsed.profile_details)
    }

    /// Fetch the jobs listing for a query.
    ///
    /// All four parameters are always present; empty means unfiltered.
    pub async fn fetch_jobs(&self, spec: &QuerySpec) -> ClientResult<Vec<JobSummary>> {
        let url = format!("{}/jobs", self.config.base_url);
        debug!(
            employment_type = %spec.employment_type,
            location = %spec.location,
            minimum_package = %spec.minimum_package,
            search = %spec.search,
            "fetching jobs"
        );
        let response = self.authorized_get(&url, &spec.query_pairs()).await?;
        let response = Self::expect_success(response, "jobs").await?;
        let parsed: JobsResponse = response.json().await?;
        Ok(parsed.jobs)
    }

    /// Fetch one job by id, along with its similar jobs.
    pub async fn fetch_job_detail(
        &self,
        id: &str,
    ) -> ClientResult<(JobDetail, Vec<JobSummary>)> {
        let url = format!("{}/jobs/{}", self.config.base_url, urlencoding::encode(id));
        let response = self.authorized_get(&url, &[]).await?;
        let response = Self::expect_success(response, &format!("job {}", id)).await?;
        let parsed: JobDetailResponse = response.json().await?;
        Ok((parsed.job_details, parsed.similar_jobs))
    }

    /// Issue an authorized GET.
    ///
    /// The token is read once and used for the whole request; a concurrent
    /// logout does not tear a request in half.
    async fn authorized_get(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<Response> {
        let token = self.credentials.get().ok_or(ClientError::Unauthorized)?;

        let mut request = self.http.get(url).bearer_auth(token);
        if !query.is_empty() {
            request = request.query(query);
        }
        Ok(request.send().await?)
    }

    /// Map a non-success response into the error taxonomy.
    async fn expect_success(response: Response, context: &str) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), context, "request failed");
            let detail = if body.is_empty() { context } else { body.as_str() };
            Err(ClientError::from_http_status(status.as_u16(), detail))
        }
    }
}

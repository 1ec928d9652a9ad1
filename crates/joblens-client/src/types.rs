//! Wire request/response envelopes for the jobs service.

use serde::{Deserialize, Serialize};

use joblens_models::{JobDetail, JobSummary, ProfileSummary};

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Success body of `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub jwt_token: String,
}

/// Failure body the service returns for rejected logins.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error_msg: String,
}

/// Success body of `GET /profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub profile_details: ProfileSummary,
}

/// Success body of `GET /jobs`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobSummary>,
}

/// Success body of `GET /jobs/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobDetailResponse {
    pub job_details: JobDetail,
    pub similar_jobs: Vec<JobSummary>,
}

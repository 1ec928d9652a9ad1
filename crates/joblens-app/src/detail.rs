//! Job detail controller.
//!
//! Fetches a single job by id plus its similar jobs in one call, reusing
//! the fetch target lifecycle. No filter dependency; refetches only when
//! the id changes or on explicit retry.

use joblens_client::ApiClient;
use joblens_models::{FetchState, JobDetail, JobSummary};

use crate::fetch::FetchTarget;

/// Payload of a successful detail fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailView {
    pub detail: JobDetail,
    pub similar_jobs: Vec<JobSummary>,
}

/// Controller for the job detail view.
pub struct DetailController {
    client: ApiClient,
    job_id: Option<String>,
    target: FetchTarget<JobDetailView>,
}

impl DetailController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            job_id: None,
            target: FetchTarget::new(),
        }
    }

    /// The id currently bound to this view.
    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn state(&self) -> &FetchState<JobDetailView> {
        self.target.state()
    }

    /// Bind the view to an id and fetch it.
    ///
    /// Navigating to the id that is already loaded (or loading) is a no-op;
    /// a different id supersedes whatever was in flight.
    pub async fn load(&mut self, id: &str) {
        if self.job_id.as_deref() == Some(id) && !self.target.state().is_idle() {
            return;
        }
        self.job_id = Some(id.to_string());
        self.fetch_current().await;
    }

    /// Re-issue the fetch for the bound id.
    pub async fn retry(&mut self) {
        if self.job_id.is_some() {
            self.fetch_current().await;
        }
    }

    async fn fetch_current(&mut self) {
        let id = self
            .job_id
            .clone()
            .expect("fetch_current requires a bound id");
        let ticket = self.target.begin();
        let result = self
            .client
            .fetch_job_detail(&id)
            .await
            .map(|(detail, similar_jobs)| JobDetailView {
                detail,
                similar_jobs,
            });
        self.target.complete(ticket, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joblens_client::{ApiConfig, CredentialStore};

    fn offline_controller() -> DetailController {
        let credentials = CredentialStore::new();
        credentials.set("tok", 30);
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..ApiConfig::default()
        };
        DetailController::new(ApiClient::new(config, credentials).unwrap())
    }

    #[test]
    fn test_starts_unbound_and_idle() {
        let controller = offline_controller();
        assert_eq!(controller.job_id(), None);
        assert!(controller.state().is_idle());
    }

    #[tokio::test]
    async fn test_retry_without_id_is_a_no_op() {
        let mut controller = offline_controller();
        controller.retry().await;
        assert!(controller.state().is_idle());
    }

    #[tokio::test]
    async fn test_load_against_unreachable_host_fails_cleanly() {
        let mut controller = offline_controller();
        controller.load("job-1").await;
        assert_eq!(controller.job_id(), Some("job-1"));
        assert!(controller.state().is_failure());
    }

    #[tokio::test]
    async fn test_same_id_does_not_refetch() {
        let mut controller = offline_controller();
        controller.load("job-1").await;
        let failure = controller.state().clone();

        // Same id again: state is left alone, no new request is started.
        controller.load("job-1").await;
        assert_eq!(controller.state(), &failure);
    }
}

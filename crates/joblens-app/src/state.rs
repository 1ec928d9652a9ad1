//! Application state.

use joblens_client::{ApiClient, ApiConfig, ClientResult, CredentialStore};

use crate::detail::DetailController;
use crate::gate::{authorize, Decision};
use crate::listing::ListingController;
use crate::routes::View;

/// Shared application state: the credential store and the client built on
/// top of it. Controllers are spawned from here so every piece observes the
/// same session.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub credentials: CredentialStore,
    pub client: ApiClient,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig) -> ClientResult<Self> {
        let credentials = CredentialStore::new();
        let client = ApiClient::new(config.clone(), credentials.clone())?;
        Ok(Self {
            config,
            credentials,
            client,
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ApiConfig::from_env())
    }

    /// Gate a navigation request.
    pub fn navigate(&self, path: &str) -> (View, Decision) {
        let view = View::parse_path(path);
        let decision = authorize(&view, &self.credentials);
        (view, decision)
    }

    /// Controller for the jobs listing view.
    pub fn listing(&self) -> ListingController {
        ListingController::new(self.client.clone())
    }

    /// Controller for the job detail view.
    pub fn detail(&self) -> DetailController {
        DetailController::new(self.client.clone())
    }

    /// Drop the session token.
    pub fn logout(&self) {
        self.credentials.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_navigate_without_token_redirects() {
        let state = test_state();
        let (view, decision) = state.navigate("/jobs/123");
        assert_eq!(view, View::JobDetail("123".into()));
        assert_eq!(decision, Decision::Redirect(View::Login));
    }

    #[test]
    fn test_navigate_with_token_allows() {
        let state = test_state();
        state.credentials.set("tok", 30);
        let (_, decision) = state.navigate("/jobs");
        assert_eq!(decision, Decision::Allowed);
    }

    #[test]
    fn test_logout_clears_shared_store() {
        let state = test_state();
        state.credentials.set("tok", 30);
        assert!(state.client.credentials().is_present());
        state.logout();
        assert!(!state.client.credentials().is_present());
    }
}

//! Fetch lifecycle value.
//!
//! Every remote retrieval (profile, jobs listing, job detail) owns exactly
//! one [`FetchState`] at a time. Transitions are driven by the fetch targets
//! in the app crate; nothing outside that path mutates the state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a fetch ended in [`FetchState::Failure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchFailure {
    /// Credentials were rejected by the service; message is shown verbatim.
    AuthenticationRejected(String),
    /// The session token was absent, expired, or refused (HTTP 401).
    Unauthorized,
    /// The requested resource does not exist (HTTP 404).
    NotFound(String),
    /// Network failure, non-success status, or malformed body.
    Transport(String),
}

impl FetchFailure {
    /// Whether a user-initiated retry is worth offering.
    ///
    /// Every failure is retryable from the view's perspective; a rejected
    /// login is the one case where retrying the identical request is
    /// pointless without new input.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, FetchFailure::AuthenticationRejected(_))
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::AuthenticationRejected(msg) => write!(f, "{}", msg),
            FetchFailure::Unauthorized => write!(f, "session expired or missing"),
            FetchFailure::NotFound(what) => write!(f, "not found: {}", what),
            FetchFailure::Transport(msg) => write!(f, "request failed: {}", msg),
        }
    }
}

/// Lifecycle of one asynchronous retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState<T> {
    /// No request has been issued yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The most recent request completed with a payload.
    Success(T),
    /// The most recent request did not complete.
    Failure(FetchFailure),
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchState::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FetchState::Failure(_))
    }

    /// Payload of a successful fetch, if any.
    pub fn as_success(&self) -> Option<&T> {
        match self {
            FetchState::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// Failure reason, if any.
    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            FetchState::Failure(reason) => Some(reason),
            _ => None,
        }
    }
}

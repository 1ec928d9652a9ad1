//! Client error types.

use thiserror::Error;

use joblens_models::FetchFailure;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur talking to the jobs service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The login endpoint rejected the credentials. The message comes from
    /// the server and is shown to the user verbatim. The credential store
    /// is left untouched.
    #[error("{0}")]
    AuthenticationRejected(String),

    #[error("Unauthorized: session token absent, expired, or refused")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error ({0}): {1}")]
    ServerError(u16, String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::AuthenticationRejected(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }

    /// Map a non-success HTTP status to an error.
    pub fn from_http_status(status: u16, context: &str) -> Self {
        match status {
            401 | 403 => ClientError::Unauthorized,
            404 => ClientError::NotFound(context.to_string()),
            500..=599 => ClientError::ServerError(status, context.to_string()),
            _ => ClientError::RequestFailed(format!("HTTP {}: {}", status, context)),
        }
    }

    /// Whether a user-initiated retry of the same request can succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ClientError::AuthenticationRejected(_))
    }
}

/// Fold a client error into the fetch lifecycle's failure reason.
///
/// Nothing past the fetch targets ever sees a transport-level error type.
impl From<ClientError> for FetchFailure {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::AuthenticationRejected(msg) => FetchFailure::AuthenticationRejected(msg),
            ClientError::Unauthorized => FetchFailure::Unauthorized,
            ClientError::NotFound(what) => FetchFailure::NotFound(what),
            other => FetchFailure::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_status_401() {
        let err = ClientError::from_http_status(401, "profile");
        assert!(matches!(err, ClientError::Unauthorized));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_from_http_status_404() {
        let err = ClientError::from_http_status(404, "job 123");
        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[test]
    fn test_from_http_status_500() {
        let err = ClientError::from_http_status(500, "jobs");
        assert!(matches!(err, ClientError::ServerError(500, _)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_rejected_login_not_retryable() {
        let err = ClientError::rejected("invalid username");
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "invalid username");
    }
}

//! Navigable views and path parsing.

use std::fmt;

/// One navigable view.
///
/// Every view except [`View::Login`] requires a session token; an
/// unrecognized path resolves to [`View::NotFound`], which is a view of its
/// own, not a fetch failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Home,
    Jobs,
    JobDetail(String),
    NotFound,
}

impl View {
    /// Resolve a request path to a view.
    pub fn parse_path(path: &str) -> View {
        let trimmed = match path {
            "/" => "/",
            other => other.trim_end_matches('/'),
        };

        match trimmed {
            "/" => View::Home,
            "/login" => View::Login,
            "/jobs" => View::Jobs,
            other => match other.strip_prefix("/jobs/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    View::JobDetail(id.to_string())
                }
                _ => View::NotFound,
            },
        }
    }

    /// Whether the view is reachable only with a session token.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, View::Login)
    }

    /// Canonical path for the view.
    pub fn path(&self) -> String {
        match self {
            View::Login => "/login".to_string(),
            View::Home => "/".to_string(),
            View::Jobs => "/jobs".to_string(),
            View::JobDetail(id) => format!("/jobs/{}", id),
            View::NotFound => "/not-found".to_string(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

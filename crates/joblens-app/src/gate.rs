//! Access gate in front of the navigable views.
//!
//! A pure function of credential presence: no memory of prior navigations,
//! no state beyond the single present/absent check. Re-evaluated on every
//! navigation, never mid-view.

use joblens_client::CredentialStore;
use tracing::debug;

use crate::routes::View;

/// Outcome of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested view.
    Allowed,
    /// Navigate to this view instead.
    Redirect(View),
}

/// Decide whether the requested view may render.
///
/// Every view except login requires a token; login with a token present
/// redirects to home, so an authenticated user never sees the login form.
pub fn authorize(requested: &View, credentials: &CredentialStore) -> Decision {
    let authenticated = credentials.is_present();

    let decision = match requested {
        View::Login if authenticated => Decision::Redirect(View::Home),
        View::Login => Decision::Allowed,
        _ if authenticated => Decision::Allowed,
        _ => Decision::Redirect(View::Login),
    };

    if let Decision::Redirect(to) = &decision {
        debug!(requested = %requested, to = %to, "redirecting");
    }
    decision
}

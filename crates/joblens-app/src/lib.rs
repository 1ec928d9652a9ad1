//! View gating and fetch orchestration for the JobLens client.
//!
//! This crate provides:
//! - Path parsing into navigable views and the access gate in front of them
//! - Fetch targets with last-request-wins supersession
//! - The listing controller (filters, profile, jobs) and detail controller
//! - Application state wiring the credential store and API client together

pub mod detail;
pub mod fetch;
pub mod gate;
pub mod listing;
pub mod logging;
pub mod routes;
pub mod state;

pub use detail::{DetailController, JobDetailView};
pub use fetch::{FetchTarget, RequestTicket};
pub use gate::{authorize, Decision};
pub use listing::{ListingController, ListingOutcome};
pub use routes::View;
pub use state::AppState;

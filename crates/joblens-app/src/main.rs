//! JobLens CLI binary.
//!
//! Logs in with credentials from the environment, walks the gated
//! navigation to the jobs listing, and prints the outcome. Mostly a smoke
//! harness for the controller stack.

use anyhow::{bail, Context};
use tracing::{info, warn};

use joblens_app::{logging, AppState, Decision, ListingOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    logging::init();

    info!("Starting joblens");

    let state = AppState::from_env().context("failed to build application state")?;

    // Unauthenticated navigation must bounce to the login view.
    let (_, decision) = state.navigate("/jobs");
    if decision != Decision::Redirect(joblens_app::View::Login) {
        bail!("expected redirect to login before authentication");
    }

    let username = std::env::var("JOBS_USERNAME").context("JOBS_USERNAME not set")?;
    let password = std::env::var("JOBS_PASSWORD").context("JOBS_PASSWORD not set")?;

    if let Err(err) = state.client.login(&username, &password).await {
        bail!("login failed: {err}");
    }
    info!("logged in");

    let (_, decision) = state.navigate("/jobs");
    if decision != Decision::Allowed {
        bail!("listing view still gated after login");
    }

    let mut listing = state.listing();
    listing.mount().await;

    if let Some(profile) = listing.profile_state().as_success() {
        info!(name = %profile.name, "profile loaded");
    } else {
        warn!("profile fetch did not succeed");
    }

    match listing.outcome() {
        ListingOutcome::Jobs(jobs) => {
            info!(count = jobs.len(), "jobs loaded");
            for job in jobs {
                println!("{}  {}  {}", job.id, job.title, job.package_per_annum);
            }
        }
        ListingOutcome::Empty => println!("No jobs found for the current filters."),
        ListingOutcome::Failure(reason) => warn!(%reason, "jobs fetch failed"),
        ListingOutcome::Idle | ListingOutcome::Loading => unreachable!("mount completed"),
    }

    Ok(())
}

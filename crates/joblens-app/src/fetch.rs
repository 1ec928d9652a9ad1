//! Fetch targets with last-request-wins supersession.
//!
//! Each remote retrieval (profile, jobs listing, job detail) owns one
//! [`FetchTarget`]. Starting a request bumps a generation counter and hands
//! back a ticket; a completion whose ticket is stale is discarded, so an
//! earlier request's late response can never overwrite a newer one's. The
//! superseded response is dropped, not aborted.

use joblens_client::ClientError;
use joblens_models::{FetchFailure, FetchState};
use tracing::debug;

/// Proof of which request a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// One fetch target: lifecycle state plus the generation of the request
/// that put it into `Loading`.
#[derive(Debug)]
pub struct FetchTarget<T> {
    state: FetchState<T>,
    generation: u64,
}

impl<T> Default for FetchTarget<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Idle,
            generation: 0,
        }
    }
}

impl<T> FetchTarget<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Start a request: transition to `Loading` and supersede any request
    /// still in flight.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.state = FetchState::Loading;
        RequestTicket(self.generation)
    }

    /// Land a completion.
    ///
    /// Returns false (and leaves the state untouched) when the ticket does
    /// not belong to the most recently started request.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<T, ClientError>,
    ) -> bool {
        if ticket.0 != self.generation {
            debug!(
                stale = ticket.0,
                current = self.generation,
                "discarding superseded response"
            );
            return false;
        }

        self.state = match result {
            Ok(payload) => FetchState::Success(payload),
            Err(err) => FetchState::Failure(FetchFailure::from(err)),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_enters_loading() {
        let mut target: FetchTarget<u32> = FetchTarget::new();
        assert!(target.state().is_idle());

        target.begin();
        assert!(target.state().is_loading());
    }

    #[test]
    fn test_completion_lands_success() {
        let mut target = FetchTarget::new();
        let ticket = target.begin();
        assert!(target.complete(ticket, Ok(7)));
        assert_eq!(target.state().as_success(), Some(&7));
    }

    #[test]
    fn test_completion_lands_failure() {
        let mut target: FetchTarget<u32> = FetchTarget::new();
        let ticket = target.begin();
        assert!(target.complete(ticket, Err(ClientError::Unauthorized)));
        assert_eq!(
            target.state().failure(),
            Some(&FetchFailure::Unauthorized)
        );
    }

    #[test]
    fn test_last_request_wins() {
        let mut target = FetchTarget::new();

        let first = target.begin();
        let second = target.begin();

        // Newer request resolves first.
        assert!(target.complete(second, Ok("new")));
        assert_eq!(target.state().as_success(), Some(&"new"));

        // Older response arrives late and is discarded.
        assert!(!target.complete(first, Ok("old")));
        assert_eq!(target.state().as_success(), Some(&"new"));
    }

    #[test]
    fn test_stale_failure_cannot_clobber_newer_success() {
        let mut target = FetchTarget::new();

        let first = target.begin();
        let second = target.begin();

        assert!(target.complete(second, Ok(2)));
        assert!(!target.complete(first, Err(ClientError::Unauthorized)));
        assert!(target.state().is_success());
    }

    #[test]
    fn test_retry_supersedes_failure() {
        let mut target: FetchTarget<u32> = FetchTarget::new();
        let ticket = target.begin();
        target.complete(ticket, Err(ClientError::request_failed("boom")));
        assert!(target.state().is_failure());

        let retry = target.begin();
        assert!(target.state().is_loading());
        assert!(target.complete(retry, Ok(1)));
        assert!(target.state().is_success());
    }
}

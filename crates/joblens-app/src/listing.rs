//! Jobs listing controller.
//!
//! Owns the filter state and the two fetch targets the listing view binds
//! to (profile card and jobs list). Filter mutations re-run the fetch path
//! according to the per-dimension policy; there is no debounce, each
//! discrete mutation issues exactly one request.

use joblens_client::ApiClient;
use joblens_models::{
    EmploymentType, FetchFailure, FetchPolicy, FetchState, FilterState, JobSummary, Location,
    ProfileSummary, QuerySpec, SalaryFloor,
};

use crate::fetch::{FetchTarget, RequestTicket};

/// What the listing area should render.
///
/// `Empty` is a completed request with zero matches; `Failure` is a request
/// that did not complete. The two are semantically distinct and only the
/// latter requires a retry affordance.
#[derive(Debug, PartialEq)]
pub enum ListingOutcome<'a> {
    Idle,
    Loading,
    Failure(&'a FetchFailure),
    Empty,
    Jobs(&'a [JobSummary]),
}

/// Controller for the jobs listing view.
pub struct ListingController {
    client: ApiClient,
    policy: FetchPolicy,
    filters: FilterState,
    profile: FetchTarget<ProfileSummary>,
    jobs: FetchTarget<Vec<JobSummary>>,
    last_query: Option<QuerySpec>,
}

impl ListingController {
    /// Create a controller with the default fetch policy (toggles fetch
    /// immediately, free text waits for submit).
    pub fn new(client: ApiClient) -> Self {
        Self::with_policy(client, FetchPolicy::default())
    }

    pub fn with_policy(client: ApiClient, policy: FetchPolicy) -> Self {
        Self {
            client,
            policy,
            filters: FilterState::new(),
            profile: FetchTarget::new(),
            jobs: FetchTarget::new(),
            last_query: None,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }

    pub fn profile_state(&self) -> &FetchState<ProfileSummary> {
        self.profile.state()
    }

    pub fn jobs_state(&self) -> &FetchState<Vec<JobSummary>> {
        self.jobs.state()
    }

    /// The query of the most recently started jobs request.
    pub fn last_query(&self) -> Option<&QuerySpec> {
        self.last_query.as_ref()
    }

    /// How the listing area should render right now.
    pub fn outcome(&self) -> ListingOutcome<'_> {
        match self.jobs.state() {
            FetchState::Idle => ListingOutcome::Idle,
            FetchState::Loading => ListingOutcome::Loading,
            FetchState::Failure(reason) => ListingOutcome::Failure(reason),
            FetchState::Success(jobs) if jobs.is_empty() => ListingOutcome::Empty,
            FetchState::Success(jobs) => ListingOutcome::Jobs(jobs),
        }
    }

    /// Initial load: profile and jobs, concurrently and independently.
    pub async fn mount(&mut self) {
        let profile_ticket = self.profile.begin();
        let (jobs_ticket, spec) = self.start_jobs();

        let (profile_result, jobs_result) =
            tokio::join!(self.client.fetch_profile(), self.client.fetch_jobs(&spec));

        self.profile.complete(profile_ticket, profile_result);
        self.complete_jobs(jobs_ticket, jobs_result);
    }

    /// Toggle an employment type; fetches immediately with the post-toggle
    /// state when the policy says so.
    pub async fn toggle_employment_type(&mut self, ty: EmploymentType) {
        self.filters.toggle_employment_type(ty);
        if self.policy.employment_types {
            self.refresh_jobs().await;
        }
    }

    /// Toggle a location; same fetch rule as employment types.
    pub async fn toggle_location(&mut self, loc: Location) {
        self.filters.toggle_location(loc);
        if self.policy.locations {
            self.refresh_jobs().await;
        }
    }

    /// Select or clear the salary floor; fetches immediately when the
    /// policy says so.
    pub async fn set_salary_floor(&mut self, floor: Option<SalaryFloor>) {
        self.filters.set_salary_floor(floor);
        if self.policy.salary_floor {
            self.refresh_jobs().await;
        }
    }

    /// Buffer new search text. Fetches only if the policy opts this
    /// dimension into fetch-on-change (it does not by default).
    pub async fn set_search_text(&mut self, text: impl Into<String>) {
        self.filters.set_search_text(text);
        if self.policy.search_text {
            self.refresh_jobs().await;
        }
    }

    /// Fetch with the currently buffered search text.
    pub async fn submit_search(&mut self) {
        self.refresh_jobs().await;
    }

    /// Re-issue the jobs request built from the unchanged filter state.
    pub async fn retry_jobs(&mut self) {
        self.refresh_jobs().await;
    }

    /// Re-issue the profile request.
    pub async fn retry_profile(&mut self) {
        let ticket = self.profile.begin();
        let result = self.client.fetch_profile().await;
        self.profile.complete(ticket, result);
    }

    /// Start a jobs request for the current filters without awaiting it.
    ///
    /// Exposed for drivers that overlap requests; [`complete_jobs`] discards
    /// completions that were superseded in the meantime.
    ///
    /// [`complete_jobs`]: Self::complete_jobs
    pub fn begin_jobs(&mut self) -> RequestTicket {
        self.start_jobs().0
    }

    /// Land a jobs completion; false means it was superseded and dropped.
    pub fn complete_jobs(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<JobSummary>, joblens_client::ClientError>,
    ) -> bool {
        self.jobs.complete(ticket, result)
    }

    fn start_jobs(&mut self) -> (RequestTicket, QuerySpec) {
        let spec = QuerySpec::from_filters(&self.filters);
        self.last_query = Some(spec.clone());
        (self.jobs.begin(), spec)
    }

    async fn refresh_jobs(&mut self) {
        let (ticket, spec) = self.start_jobs();
        let result = self.client.fetch_jobs(&spec).await;
        self.complete_jobs(ticket, result);
    }
}

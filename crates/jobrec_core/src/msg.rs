use crate::Job;

/// Messages applied to the store state.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// UI asked for a fresh list of recommended jobs.
    FetchRequested,
    /// The recommendation request settled, successfully or not.
    FetchSettled {
        outcome: Result<FetchedJobs, FetchFailure>,
    },
}

/// Parsed recommendation payload together with the HTTP verdict.
///
/// A failed status still carries whatever payload the body contained; the
/// two are applied to the state independently.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedJobs {
    pub jobs: Vec<Job>,
    pub status_ok: bool,
}

/// Terminal failure from the client, reduced to user-presentable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
}

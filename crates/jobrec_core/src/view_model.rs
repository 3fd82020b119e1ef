use crate::Job;

/// Snapshot of the store for presentation code.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreViewModel {
    /// Recommendations in server response order; empty when idle.
    pub jobs: Vec<Job>,
    /// True only while a fetch is in flight.
    pub loading: bool,
    /// Status or error text; empty when there is nothing to report.
    pub message: String,
}

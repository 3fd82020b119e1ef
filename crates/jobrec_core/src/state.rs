use crate::view_model::StoreViewModel;
use crate::{FetchFailure, FetchedJobs, Job};

/// Shown when the server refuses the recommendation request.
pub const SKILLS_HINT: &str = "Add some skills to your profile";

/// Shown when the fetch settles with nothing to recommend.
pub const NO_JOBS_FOUND: &str = "No recommended jobs found.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreState {
    jobs: Vec<Job>,
    loading: bool,
    message: String,
    dirty: bool,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional reset at the start of every fetch. Previous results are
    /// discarded even when they were still valid.
    pub(crate) fn begin_fetch(&mut self) {
        self.loading = true;
        self.message.clear();
        self.jobs.clear();
        self.dirty = true;
    }

    pub(crate) fn apply_fetch_outcome(&mut self, outcome: Result<FetchedJobs, FetchFailure>) {
        match outcome {
            Ok(fetched) => {
                if !fetched.status_ok {
                    self.message = SKILLS_HINT.to_string();
                }
                self.jobs = fetched.jobs;
                if self.jobs.is_empty() {
                    // Overwrites the refusal hint: an empty list reads the
                    // same to the user whether the request succeeded or not.
                    self.message = NO_JOBS_FOUND.to_string();
                }
            }
            Err(failure) => {
                self.message = failure.message;
            }
        }
        self.loading = false;
        self.dirty = true;
    }

    pub fn view(&self) -> StoreViewModel {
        StoreViewModel {
            jobs: self.jobs.clone(),
            loading: self.loading,
            message: self.message.clone(),
        }
    }

    /// Returns whether the state changed since the last call and clears the
    /// flag. The runtime uses this to coalesce change notifications.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

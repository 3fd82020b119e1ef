/// Side effects requested by `update` and executed by the app runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Issue the authenticated recommendations request.
    FetchRecommendedJobs,
}

//! Jobrec client: authenticated HTTP access to the recommendation service.
mod client;
mod session;
mod types;

pub use client::{ClientSettings, JobsApi, ReqwestJobsClient};
pub use session::{StaticTokenProvider, TokenProvider};
pub use types::{ApiError, RecommendedJobs, RecommendedJobsResponse};

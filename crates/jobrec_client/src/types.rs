use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Wire schema of `GET /jobs/recommended`.
///
/// The server may omit `jobs` or send it as `null`; both read as an empty
/// list. The elements themselves stay opaque.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecommendedJobsResponse {
    #[serde(default)]
    jobs: Option<Vec<Value>>,
}

impl RecommendedJobsResponse {
    /// Consumes the response, yielding the recommendation list.
    pub fn into_jobs(self) -> Vec<Value> {
        self.jobs.unwrap_or_default()
    }
}

/// Result of a completed request: the parsed payload plus the HTTP verdict.
///
/// A non-2xx status does not discard the payload; the server sends a body
/// either way and the store decides how to present it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedJobs {
    pub jobs: Vec<Value>,
    pub status: u16,
}

impl RecommendedJobs {
    /// True when the response status was in the 2xx range.
    pub fn status_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures that prevent a recommendation payload from being produced.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

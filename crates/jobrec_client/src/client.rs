use std::time::Duration;

use reqwest::header::AUTHORIZATION;

use crate::{ApiError, RecommendedJobs, RecommendedJobsResponse};

/// Connection settings for the recommendation service.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait JobsApi: Send + Sync {
    /// Fetches the recommendations for the user identified by `token`.
    async fn recommended_jobs(&self, token: Option<&str>) -> Result<RecommendedJobs, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobsClient {
    settings: ClientSettings,
}

impl ReqwestJobsClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))
    }

    fn endpoint(&self) -> Result<reqwest::Url, ApiError> {
        let base = reqwest::Url::parse(&self.settings.base_url)
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        base.join("/jobs/recommended")
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))
    }
}

#[async_trait::async_trait]
impl JobsApi for ReqwestJobsClient {
    async fn recommended_jobs(&self, token: Option<&str>) -> Result<RecommendedJobs, ApiError> {
        let client = self.build_client()?;
        let url = self.endpoint()?;

        // An absent token is still sent, as an empty bearer credential; the
        // server decides what an anonymous request deserves.
        let bearer = format!("Bearer {}", token.unwrap_or_default());

        let response = client
            .get(url)
            .header(AUTHORIZATION, bearer)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();

        // The body is read regardless of the status code; a refused request
        // can still carry a payload worth handing to the store.
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: RecommendedJobsResponse = serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::MalformedResponse(err.to_string()))?;

        Ok(RecommendedJobs {
            jobs: parsed.into_jobs(),
            status,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout(err.to_string());
    }
    ApiError::Network(err.to_string())
}

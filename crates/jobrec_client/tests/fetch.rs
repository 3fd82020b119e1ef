use std::time::Duration;

use jobrec_client::{ApiError, ClientSettings, JobsApi, ReqwestJobsClient};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestJobsClient {
    ReqwestJobsClient::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
}

#[tokio::test]
async fn sends_bearer_token_and_parses_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/recommended"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"jobs": [{"id": 1}, {"id": 2}]})),
        )
        .mount(&server)
        .await;

    let result = client_for(&server)
        .recommended_jobs(Some("test-token"))
        .await
        .expect("fetch ok");

    assert_eq!(result.jobs, vec![json!({"id": 1}), json!({"id": 2})]);
    assert_eq!(result.status, 200);
    assert!(result.status_ok());
}

#[tokio::test]
async fn missing_token_becomes_an_empty_bearer_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/recommended"))
        .and(header("Authorization", "Bearer "))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jobs": []})))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .recommended_jobs(None)
        .await
        .expect("fetch ok");

    assert!(result.jobs.is_empty());
}

#[tokio::test]
async fn missing_jobs_field_reads_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/recommended"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .recommended_jobs(Some("t"))
        .await
        .expect("fetch ok");

    assert!(result.jobs.is_empty());
    assert!(result.status_ok());
}

#[tokio::test]
async fn null_jobs_field_reads_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/recommended"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jobs": null})))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .recommended_jobs(Some("t"))
        .await
        .expect("fetch ok");

    assert!(result.jobs.is_empty());
}

#[tokio::test]
async fn refused_request_still_delivers_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/recommended"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"jobs": [{"id": 9}]})))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .recommended_jobs(Some("t"))
        .await
        .expect("body should parse despite the status");

    assert_eq!(result.status, 403);
    assert!(!result.status_ok());
    assert_eq!(result.jobs, vec![json!({"id": 9})]);
}

#[tokio::test]
async fn malformed_body_is_a_distinct_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/recommended"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .recommended_jobs(Some("t"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/recommended"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"jobs": []})),
        )
        .mount(&server)
        .await;

    let client = ReqwestJobsClient::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    });

    let err = client.recommended_jobs(Some("t")).await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout(_)));
}

#[tokio::test]
async fn unparseable_base_url_is_rejected() {
    let client = ReqwestJobsClient::new(ClientSettings {
        base_url: "not a url".to_string(),
        ..ClientSettings::default()
    });

    let err = client.recommended_jobs(Some("t")).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidUrl(_)));
}

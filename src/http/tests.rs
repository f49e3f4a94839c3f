//! Tests for the HTTP module

use super::*;
use crate::api_error::{ErrorCode, UNAUTHORIZED_MESSAGE};
use crate::error::Error;
use crate::types::Method;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> HttpClient {
    HttpClient::with_config(HttpClientConfig::default()).unwrap()
}

fn api_error(err: Error) -> crate::api_error::ClashDetectionError {
    match err {
        Error::Api(e) => e,
        other => panic!("Expected API error, got {other:?}"),
    }
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.rate_limit.is_none());
    assert!(config.user_agent.starts_with("clash-detection-client/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .rate_limit(RateLimiterConfig::new(5, 5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(5, 5)));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_rest_request_builder() {
    let request = RestRequest::new(Method::POST, "https://example.com/tests")
        .header("Authorization", "Bearer abc")
        .json(json!({"displayName": "t"}));

    assert_eq!(request.method, Method::POST);
    assert_eq!(request.headers.get("Authorization"), Some(&"Bearer abc".to_string()));
    assert_eq!(request.body, Some(json!({"displayName": "t"})));
}

#[tokio::test]
async fn test_send_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tests/t-1"))
        .and(header("Authorization", "Bearer token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "test": {"id": "t-1"}
        })))
        .mount(&mock_server)
        .await;

    let request = RestRequest::new(Method::GET, format!("{}/tests/t-1", mock_server.uri()))
        .header("Authorization", "Bearer token");
    let body = client().send(request).await.unwrap();

    assert_eq!(body["test"]["id"], "t-1");
}

#[tokio::test]
async fn test_send_post_body_and_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/runs"))
        .and(header("X-Custom", "value"))
        .and(body_json(json!({"testId": "t-1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"run": {"id": "r-1"}})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().header("X-Custom", "value").build();
    let client = HttpClient::with_config(config).unwrap();
    let request = RestRequest::new(Method::POST, format!("{}/runs", mock_server.uri()))
        .json(json!({"testId": "t-1"}));

    let body = client.send(request).await.unwrap();
    assert_eq!(body["run"]["id"], "r-1");
}

#[tokio::test]
async fn test_send_empty_body_is_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/runs/r-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let request = RestRequest::new(Method::DELETE, format!("{}/runs/r-1", mock_server.uri()));
    let body = client().send(request).await.unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_send_parses_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tests/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "ClashDetectionTestNotFound",
                "message": "Requested test is not available."
            }
        })))
        .mount(&mock_server)
        .await;

    let request = RestRequest::new(Method::GET, format!("{}/tests/missing", mock_server.uri()));
    let err = api_error(client().send(request).await.unwrap_err());

    assert_eq!(err.code, ErrorCode::ClashDetectionTestNotFound);
    assert_eq!(err.message, "Requested test is not available.");
}

#[tokio::test]
async fn test_send_unauthorized_ignores_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("<html>denied</html>"))
        .mount(&mock_server)
        .await;

    let request = RestRequest::new(Method::GET, format!("{}/tests", mock_server.uri()));
    let err = api_error(client().send(request).await.unwrap_err());

    assert_eq!(err.code, ErrorCode::Unauthorized);
    assert_eq!(err.message, UNAUTHORIZED_MESSAGE);
}

#[tokio::test]
async fn test_send_non_json_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let request = RestRequest::new(Method::GET, format!("{}/tests", mock_server.uri()));
    let err = api_error(client().send(request).await.unwrap_err());

    assert_eq!(err.code, ErrorCode::Unrecognized);
    assert_eq!(err.message, "Unknown error occurred");
}

#[tokio::test]
async fn test_send_does_not_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = RestRequest::new(Method::GET, format!("{}/tests", mock_server.uri()));
    assert!(client().send(request).await.is_err());
}

#[tokio::test]
async fn test_send_connection_failure_is_unknown() {
    // Nothing listens on port 1
    let request = RestRequest::new(Method::GET, "http://127.0.0.1:1/tests");
    let err = api_error(client().send(request).await.unwrap_err());

    assert_eq!(err.code, ErrorCode::Unknown);
    assert_eq!(err.message, "Unknown error occurred");
}

#[tokio::test]
async fn test_send_invalid_json_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let request = RestRequest::new(Method::GET, format!("{}/tests", mock_server.uri()));
    let err = client().send(request).await.unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_http_client_with_rate_limiter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .rate_limit(RateLimiterConfig::new(100, 10))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    assert!(client.has_rate_limiter());

    for _ in 0..3 {
        let request = RestRequest::new(Method::GET, format!("{}/tests", mock_server.uri()));
        assert!(client.send(request).await.is_ok());
    }
}

#[test]
fn test_http_client_debug() {
    let debug = format!("{:?}", client());
    assert!(debug.contains("HttpClient"));
    assert!(debug.contains("has_rate_limiter"));
}

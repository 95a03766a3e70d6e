//! Provider client integration tests
//!
//! These run the real reqwest clients against a wiremock server to verify
//! the request shape each provider expects and the error mapping for
//! non-success responses.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prompt_submitter::services::{GeminiClient, XaiClient, GEMINI_DEFAULT_MODEL};
use prompt_submitter::traits::SubmissionClient;
use prompt_submitter::types::{ApiFailure, ProviderId};

#[tokio::test]
async fn test_xai_request_shape_and_extraction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "grok-3-beta",
            "messages": [{"role": "user", "content": "Explain recursion in one sentence."}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Recursion explained."}}
            ],
            "usage": {"total_tokens": 12}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = XaiClient::with_base_url(Some("test-key".to_string()), server.uri());
    assert_eq!(client.provider(), ProviderId::Xai);

    let response = client
        .submit("Explain recursion in one sentence.")
        .await
        .unwrap();
    assert_eq!(response.content, "Recursion explained.");
    assert_eq!(response.model_used, "grok-3-beta");
}

#[tokio::test]
async fn test_gemini_request_shape_and_extraction() {
    let server = MockServer::start().await;

    let endpoint = format!("/v1beta/models/{GEMINI_DEFAULT_MODEL}:generateContent");
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "Explain recursion in one sentence."}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "Recursion explained."}]}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(Some("test-key".to_string()), server.uri());
    assert_eq!(client.provider(), ProviderId::Gemini);

    let response = client
        .submit("Explain recursion in one sentence.")
        .await
        .unwrap();
    assert_eq!(response.content, "Recursion explained.");
    assert_eq!(response.model_used, GEMINI_DEFAULT_MODEL);
}

#[tokio::test]
async fn test_gemini_model_override_changes_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "ok"}]}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(Some("test-key".to_string()), server.uri())
        .with_model("gemini-pro".to_string());

    let response = client.submit("hello").await.unwrap();
    assert_eq!(response.model_used, "gemini-pro");
}

#[tokio::test]
async fn test_missing_key_fails_without_a_request() {
    // No mock mounted: any request to the server would 404, but none is sent
    let server = MockServer::start().await;

    let client = XaiClient::with_base_url(None, server.uri());
    let err = client.submit("hello").await.unwrap_err();
    assert_eq!(err, ApiFailure::AuthenticationFailed);

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_key_maps_to_authentication_failed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = XaiClient::with_base_url(Some("bad-key".to_string()), server.uri());
    let err = client.submit("hello").await.unwrap_err();
    assert_eq!(err, ApiFailure::AuthenticationFailed);
}

#[tokio::test]
async fn test_server_error_maps_to_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(Some("test-key".to_string()), server.uri());
    let err = client.submit("hello").await.unwrap_err();
    assert!(matches!(err, ApiFailure::ServerError(_)));
}

#[tokio::test]
async fn test_rate_limit_and_unavailable_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = XaiClient::with_base_url(Some("test-key".to_string()), server.uri());
    assert_eq!(
        client.submit("hello").await.unwrap_err(),
        ApiFailure::RateLimitExceeded
    );

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = XaiClient::with_base_url(Some("test-key".to_string()), server.uri());
    assert_eq!(
        client.submit("hello").await.unwrap_err(),
        ApiFailure::ServiceUnavailable
    );
}

#[tokio::test]
async fn test_malformed_body_maps_to_invalid_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = XaiClient::with_base_url(Some("test-key".to_string()), server.uri());
    let err = client.submit("hello").await.unwrap_err();
    assert!(matches!(err, ApiFailure::InvalidRequest(_)));
}

//! Google Gemini submission client
//!
//! Talks to the `generateContent` endpoint of the Generative Language API.
//! The API key travels as a query parameter rather than a header.

use std::time::Instant;

use async_trait::async_trait;

use crate::traits::SubmissionClient;
use crate::types::{ApiFailure, ProviderId, ProviderResponse};

/// Default Gemini API base URL
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini model
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";

/// Gemini generateContent client
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create new client against the production endpoint with the default model
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, GEMINI_BASE_URL.to_string())
    }

    /// Create with custom base URL (used by test harnesses)
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            api_key,
            model: GEMINI_DEFAULT_MODEL.to_string(),
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Override the model sent with each request
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }
}

#[async_trait]
impl SubmissionClient for GeminiClient {
    fn provider(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn submit(&self, prompt: &str) -> Result<ProviderResponse, ApiFailure> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ApiFailure::AuthenticationFailed)?;

        let request_start = Instant::now();

        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ]
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ApiFailure::NetworkError(e.to_string()))?;

        let response_time = request_start.elapsed();

        if !response.status().is_success() {
            return match response.status().as_u16() {
                401 | 403 => Err(ApiFailure::AuthenticationFailed),
                429 => Err(ApiFailure::RateLimitExceeded),
                503 => Err(ApiFailure::ServiceUnavailable),
                _ => Err(ApiFailure::ServerError(response.status().to_string())),
            };
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiFailure::InvalidRequest(format!("Failed to parse response: {e}")))?;

        let content = response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .ok_or_else(|| ApiFailure::InvalidRequest("No content in response".to_string()))?;

        Ok(ProviderResponse {
            content: content.to_string(),
            model_used: self.model.clone(),
            response_time,
        })
    }
}

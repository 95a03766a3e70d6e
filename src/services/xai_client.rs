//! xAI submission client
//!
//! Talks to the OpenAI-compatible chat completions endpoint at
//! `https://api.x.ai/v1`. One request per submission, no retry, no streaming.

use std::time::Instant;

use async_trait::async_trait;

use crate::traits::SubmissionClient;
use crate::types::{ApiFailure, ProviderId, ProviderResponse};

/// Default xAI API base URL
pub const XAI_BASE_URL: &str = "https://api.x.ai/v1";

/// Default xAI model
pub const XAI_DEFAULT_MODEL: &str = "grok-3-beta";

/// xAI chat completions client
pub struct XaiClient {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl XaiClient {
    /// Create new client against the production endpoint
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, XAI_BASE_URL.to_string())
    }

    /// Create with custom base URL (used by test harnesses)
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            api_key,
            model: XAI_DEFAULT_MODEL.to_string(),
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SubmissionClient for XaiClient {
    fn provider(&self) -> ProviderId {
        ProviderId::Xai
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
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {api_key}"))
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
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| ApiFailure::InvalidRequest("No content in response".to_string()))?;

        Ok(ProviderResponse {
            content: content.to_string(),
            model_used: self.model.clone(),
            response_time,
        })
    }
}

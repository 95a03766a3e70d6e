//! Core data types shared across the submission pipeline

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Identifier for downstream LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    Xai,
    Gemini,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ProviderId {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "xai" => Some(ProviderId::Xai),
            "gemini" => Some(ProviderId::Gemini),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Xai => "xai",
            ProviderId::Gemini => "gemini",
        }
    }
}

/// API failure reasons for LLM provider requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiFailure {
    /// Authentication failed (missing or invalid API key)
    AuthenticationFailed,
    /// Rate limit exceeded
    RateLimitExceeded,
    /// Invalid request format or unparseable response
    InvalidRequest(String),
    /// Network/connection error
    NetworkError(String),
    /// Server error from provider
    ServerError(String),
    /// Service temporarily unavailable
    ServiceUnavailable,
}

/// A named prompt loaded from the prompts directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// File stem of the prompt file, without the `.txt` extension
    pub name: String,
    /// Verbatim UTF-8 content of the prompt file
    pub content: String,
}

/// Provider response data
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub content: String,
    pub model_used: String,
    pub response_time: Duration,
}

/// A completed submission ready to be written as a report
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub provider: ProviderId,
    pub prompt_name: String,
    pub submitted_at: DateTime<Local>,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id_roundtrip() {
        assert_eq!(ProviderId::from_str("xai"), Some(ProviderId::Xai));
        assert_eq!(ProviderId::from_str("GEMINI"), Some(ProviderId::Gemini));
        assert_eq!(ProviderId::from_str("openai"), None);
        assert_eq!(ProviderId::Xai.to_string(), "xai");
        assert_eq!(ProviderId::Gemini.as_str(), "gemini");
    }
}

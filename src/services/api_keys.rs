//! API key resolution from the environment
//!
//! Keys are loaded from a `.env` file (current directory or parents, if
//! present) and from process environment variables; environment variables
//! take precedence over `.env` values.
//!
//! Key names per provider:
//! - xAI: `XAI_API_KEY`
//! - Gemini: `GEMINI_API_KEY`, falling back to `GOOGLE_API_KEY`
//!
//! A missing key is not an error here. The submission clients carry the key
//! as an `Option` and fail with an authentication error at submission time.

use tracing::warn;

use crate::types::ProviderId;

/// Environment variable names checked for each provider, in order
fn key_names(provider: ProviderId) -> &'static [&'static str] {
    match provider {
        ProviderId::Xai => &["XAI_API_KEY"],
        ProviderId::Gemini => &["GEMINI_API_KEY", "GOOGLE_API_KEY"],
    }
}

/// Resolve the API key for a provider from `.env` and the environment
///
/// Safe to call multiple times: dotenvy never overrides variables that are
/// already set.
pub fn load_api_key(provider: ProviderId) -> Option<String> {
    // Silently ignored when no .env file exists
    let _ = dotenvy::dotenv();

    for name in key_names(provider) {
        if let Ok(value) = std::env::var(name) {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }

    warn!(
        "No API key found for {} (checked: {})",
        provider,
        key_names(provider).join(", ")
    );
    None
}

//! Submitter error types

use std::path::PathBuf;
use thiserror::Error;

use crate::types::{ApiFailure, ProviderId};

/// Result type for submitter operations
pub type SubmitterResult<T> = Result<T, SubmitterError>;

/// Submitter error types
#[derive(Error, Debug)]
pub enum SubmitterError {
    #[error("Prompt file not found: {name} (looked for {path})")]
    PromptNotFound { name: String, path: PathBuf },

    #[error("No prompt files available in {dir}")]
    NoPromptsAvailable { dir: PathBuf },

    #[error("Invalid prompt selection: {input}")]
    InvalidSelection { input: String },

    #[error("Authentication with {provider} failed: missing or rejected API key")]
    Authentication { provider: ProviderId },

    #[error("Provider request failed: {provider} - {reason:?}")]
    Request { provider: ProviderId, reason: ApiFailure },

    #[error("Failed to write report to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Trait definitions for dependency injection
//!
//! Each stage of the submission pipeline sits behind a trait so tests can
//! supply mocks: prompt lookup, interactive selection, the provider request,
//! and the report write.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::SubmitterResult;
use crate::types::{ApiFailure, Prompt, ProviderId, ProviderResponse, SubmissionRecord};

/// Prompt file lookup and enumeration
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Load a prompt by name (file stem, without extension)
    async fn load(&self, name: &str) -> SubmitterResult<Prompt>;

    /// List the names of all available prompts, sorted
    async fn list(&self) -> SubmitterResult<Vec<String>>;

    /// Directory the prompts are read from
    fn prompts_dir(&self) -> &Path;
}

/// Selection of one prompt name from the available collection
///
/// The console implementation blocks on stdin; tests inject a mock and never
/// touch the interactive path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PromptPicker: Send + Sync {
    /// Pick one name from a non-empty list of prompt names
    async fn pick(&self, names: &[String]) -> SubmitterResult<String>;
}

/// A single request/response exchange with an LLM provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Which provider this client talks to
    fn provider(&self) -> ProviderId;

    /// Model identifier sent with each request
    fn model(&self) -> &str;

    /// Submit prompt content and return the provider's textual completion
    async fn submit(&self, prompt: &str) -> Result<ProviderResponse, ApiFailure>;
}

/// Serialization of a submission record to a markdown report file
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportWriter: Send + Sync {
    /// Write the report, deriving a path under the reports directory when no
    /// explicit path is given. Returns the path written.
    async fn write(
        &self,
        record: &SubmissionRecord,
        explicit_path: Option<PathBuf>,
    ) -> SubmitterResult<PathBuf>;
}

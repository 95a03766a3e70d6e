//! Submission pipeline with dependency injection
//!
//! One pipeline shared by both provider binaries: resolve a prompt, submit it
//! to the injected client, write the report. The binaries differ only in the
//! `SubmissionClient` implementation they construct.

use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, info};

use crate::error::{SubmitterError, SubmitterResult};
use crate::traits::{PromptPicker, PromptStore, ReportWriter, SubmissionClient};
use crate::types::{ApiFailure, Prompt, SubmissionRecord};

/// Submitter with dependency injection
pub struct Submitter<S, P, C, W>
where
    S: PromptStore,
    P: PromptPicker,
    C: SubmissionClient,
    W: ReportWriter,
{
    pub prompt_store: S,
    pub prompt_picker: P,
    pub client: C,
    pub report_writer: W,
}

impl<S, P, C, W> Submitter<S, P, C, W>
where
    S: PromptStore,
    P: PromptPicker,
    C: SubmissionClient,
    W: ReportWriter,
{
    /// Create new submitter instance
    pub fn new(prompt_store: S, prompt_picker: P, client: C, report_writer: W) -> Self {
        Self {
            prompt_store,
            prompt_picker,
            client,
            report_writer,
        }
    }

    /// Run one submission: load -> submit -> write
    ///
    /// When `prompt_name` is `None` the available prompts are listed and one
    /// is chosen through the picker. Returns the path of the written report.
    pub async fn run(
        &self,
        prompt_name: Option<String>,
        output: Option<PathBuf>,
    ) -> SubmitterResult<PathBuf> {
        let prompt = self.resolve_prompt(prompt_name).await?;

        info!(
            "Submitting prompt '{}' to {} (model {}). Prompt length: {}",
            prompt.name,
            self.client.provider(),
            self.client.model(),
            prompt.content.len()
        );

        let response = self
            .client
            .submit(&prompt.content)
            .await
            .map_err(|reason| match reason {
                ApiFailure::AuthenticationFailed => SubmitterError::Authentication {
                    provider: self.client.provider(),
                },
                other => SubmitterError::Request {
                    provider: self.client.provider(),
                    reason: other,
                },
            })?;

        info!(
            "{} submission complete in {:?}. Response length: {}",
            self.client.provider(),
            response.response_time,
            response.content.len()
        );
        debug!(
            "Response preview: {}",
            response.content.chars().take(200).collect::<String>()
        );

        let record = SubmissionRecord {
            provider: self.client.provider(),
            prompt_name: prompt.name,
            submitted_at: Local::now(),
            content: response.content,
        };

        let path = self.report_writer.write(&record, output).await?;
        info!("Response saved to {}", path.display());
        Ok(path)
    }

    /// Resolve a prompt by name, or interactively when no name is given
    async fn resolve_prompt(&self, prompt_name: Option<String>) -> SubmitterResult<Prompt> {
        match prompt_name {
            Some(name) => self.prompt_store.load(&name).await,
            None => {
                let names = self.prompt_store.list().await?;
                if names.is_empty() {
                    return Err(SubmitterError::NoPromptsAvailable {
                        dir: self.prompt_store.prompts_dir().to_path_buf(),
                    });
                }
                let chosen = self.prompt_picker.pick(&names).await?;
                self.prompt_store.load(&chosen).await
            }
        }
    }
}

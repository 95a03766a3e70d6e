//! Real prompt store implementation
//!
//! Prompts are plain UTF-8 `.txt` files in a single directory, addressed by
//! file stem. Loading returns the file content verbatim.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::error::{SubmitterError, SubmitterResult};
use crate::traits::PromptStore;
use crate::types::Prompt;

/// Default directory the prompt files are read from
pub const PROMPTS_DIR: &str = "prompts";

/// Real prompt store reading `.txt` files from a directory
pub struct RealPromptStore {
    prompts_dir: PathBuf,
}

impl RealPromptStore {
    /// Create new prompt store reading from `./prompts`
    pub fn new() -> Self {
        Self {
            prompts_dir: PathBuf::from(PROMPTS_DIR),
        }
    }

    /// Create with custom prompts directory
    pub fn with_dir(prompts_dir: PathBuf) -> Self {
        Self { prompts_dir }
    }

    fn prompt_file_path(&self, name: &str) -> PathBuf {
        self.prompts_dir.join(format!("{name}.txt"))
    }
}

impl Default for RealPromptStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptStore for RealPromptStore {
    async fn load(&self, name: &str) -> SubmitterResult<Prompt> {
        let path = self.prompt_file_path(name);
        let content = fs::read_to_string(&path)
            .await
            .map_err(|_| SubmitterError::PromptNotFound {
                name: name.to_string(),
                path: path.clone(),
            })?;

        Ok(Prompt {
            name: name.to_string(),
            content,
        })
    }

    async fn list(&self) -> SubmitterResult<Vec<String>> {
        // A missing directory is treated as an empty collection; the pipeline
        // turns that into NoPromptsAvailable.
        let mut entries = match fs::read_dir(&self.prompts_dir).await {
            Ok(entries) => entries,
            Err(_) => return Ok(Vec::new()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    fn prompts_dir(&self) -> &Path {
        &self.prompts_dir
    }
}

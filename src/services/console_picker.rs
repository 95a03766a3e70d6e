//! Interactive console prompt selection
//!
//! Prints a numbered menu of the available prompts and reads a 1-based
//! selection from stdin. Only the binaries reach this path; tests inject a
//! mock picker instead.

use async_trait::async_trait;
use tokio::io::{stdin, stdout, AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::error::{SubmitterError, SubmitterResult};
use crate::traits::PromptPicker;

/// Console-backed prompt picker
pub struct ConsolePicker;

impl ConsolePicker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptPicker for ConsolePicker {
    async fn pick(&self, names: &[String]) -> SubmitterResult<String> {
        let mut out = stdout();
        out.write_all(b"Available prompts:\n").await?;
        for (i, name) in names.iter().enumerate() {
            out.write_all(format!("{}. {}\n", i + 1, name).as_bytes())
                .await?;
        }
        out.write_all(b"\nEnter prompt number to use: ").await?;
        out.flush().await?;

        let mut line = String::new();
        BufReader::new(stdin()).read_line(&mut line).await?;
        let input = line.trim();

        let selection: usize = input
            .parse()
            .map_err(|_| SubmitterError::InvalidSelection {
                input: input.to_string(),
            })?;

        names
            .get(selection.wrapping_sub(1))
            .cloned()
            .ok_or_else(|| SubmitterError::InvalidSelection {
                input: input.to_string(),
            })
    }
}

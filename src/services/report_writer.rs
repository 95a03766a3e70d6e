//! Real report writer implementation
//!
//! Serializes a submission record into a markdown document with a fixed
//! front-matter header and writes it under the reports directory, or to an
//! explicit path when one is supplied.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::error::{SubmitterError, SubmitterResult};
use crate::traits::ReportWriter;
use crate::types::SubmissionRecord;

/// Default directory the reports are written to
pub const REPORTS_DIR: &str = "reports";

/// Real report writer producing markdown files
pub struct RealReportWriter {
    reports_dir: PathBuf,
}

impl RealReportWriter {
    /// Create new report writer targeting `./reports`
    pub fn new() -> Self {
        Self {
            reports_dir: PathBuf::from(REPORTS_DIR),
        }
    }

    /// Create with custom reports directory
    pub fn with_dir(reports_dir: PathBuf) -> Self {
        Self { reports_dir }
    }

    /// Derived report path: `<provider>_<prompt>_<timestamp>.md`
    fn derived_path(&self, record: &SubmissionRecord) -> PathBuf {
        let stamp = record.submitted_at.format("%Y%m%d_%H%M%S");
        self.reports_dir
            .join(format!("{}_{}_{}.md", record.provider, record.prompt_name, stamp))
    }

    /// Render the document: front-matter header followed by the raw response
    fn render(record: &SubmissionRecord) -> String {
        format!(
            "---\nprompt: {}\nsubmitted_at: {}\n---\n\n{}",
            record.prompt_name,
            record.submitted_at.format("%Y-%m-%d %H:%M:%S"),
            record.content
        )
    }
}

impl Default for RealReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportWriter for RealReportWriter {
    async fn write(
        &self,
        record: &SubmissionRecord,
        explicit_path: Option<PathBuf>,
    ) -> SubmitterResult<PathBuf> {
        let path = match explicit_path {
            Some(path) => path,
            None => {
                fs::create_dir_all(&self.reports_dir)
                    .await
                    .map_err(|e| SubmitterError::WriteFailed {
                        path: self.reports_dir.clone(),
                        source: e,
                    })?;
                self.derived_path(record)
            }
        };

        let document = Self::render(record);
        fs::write(&path, document)
            .await
            .map_err(|e| SubmitterError::WriteFailed {
                path: path.clone(),
                source: e,
            })?;

        Ok(path)
    }
}

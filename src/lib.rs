//! Prompt submitter library
//!
//! This library provides services for submitting prompt files to external LLM
//! providers (xAI, Google Gemini) and saving the responses as markdown reports
//! with submission metadata.

pub mod error;
pub mod logging;
pub mod services;
pub mod submitter_impl;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{SubmitterError, SubmitterResult};
pub use submitter_impl::Submitter;
pub use traits::*;
pub use types::*;

//! Submitter services implementations

pub mod api_keys;
pub mod console_picker;
pub mod gemini_client;
pub mod prompt_store;
pub mod report_writer;
pub mod xai_client;

#[cfg(test)]
pub mod tests;

pub use console_picker::*;
pub use gemini_client::*;
pub use prompt_store::*;
pub use report_writer::*;
pub use xai_client::*;

//! Tests for the submitter service implementations
//!
//! Each test works against its own scratch directory under the system temp
//! dir so tests stay independent when run in parallel.


use std::path::PathBuf;

/// Create a unique scratch directory for a test
pub async fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("prompt-submitter-{label}-{}", uuid::Uuid::new_v4()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    dir
}

/// Remove a scratch directory, ignoring errors
pub async fn cleanup(dir: &PathBuf) {
    let _ = tokio::fs::remove_dir_all(dir).await;
}

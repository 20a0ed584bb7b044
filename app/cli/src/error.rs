//! FILENAME: app/cli/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Host-side failures. Rejected expressions are an outcome of `run`, not an error.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read expression file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot open log file {}: {source}", .path.display())]
    OpenLogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no expression on stdin")]
    EmptyInput,

    #[error("logger setup failed: {0}")]
    LogInit(String),
}

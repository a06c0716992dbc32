// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DaylogError>;

#[derive(Error, Debug)]
pub enum DaylogError {
    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    #[error("Named path already registered: {0}")]
    DuplicateEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

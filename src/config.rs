// file: src/config.rs
// description: logger destination configuration
// reference: internal configuration structs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Directory holding the daily log and report files.
    pub dir: PathBuf,
}

impl LogConfig {
    /// `logs/` under the process working directory.
    pub fn default_config() -> Self {
        Self {
            dir: PathBuf::from("logs"),
        }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

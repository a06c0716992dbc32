// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod filer;
pub mod logger;
pub mod utils;

pub use config::LogConfig;
pub use error::{DaylogError, Result};
pub use filer::{Filer, PathRegistry, STALE_AFTER, named_paths};
pub use logger::{Level, LogRecord, Logger};
pub use utils::{random_int, sleep};

// file: src/logger/writer.rs
// description: daily-file log writer and process-wide logger instance
// reference: append-only file logging patterns

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::Local;
use tracing::error;

use super::level::{Destination, Level};
use super::record::LogRecord;
use crate::config::LogConfig;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Appends rendered records to a daily log file and a daily report file.
///
/// Destination paths are fixed from the local calendar date at construction;
/// a process running past midnight keeps writing to the files it started
/// with. Logging never fails from the caller's perspective: append errors go
/// to the `tracing` diagnostic channel instead, so logging a failure cannot
/// mask the failure being logged.
pub struct Logger {
    log_path: PathBuf,
    report_path: PathBuf,
}

impl Logger {
    pub fn new(config: LogConfig) -> Self {
        let stamp = Local::now().format("%Y%m%d");
        Self {
            log_path: config.dir.join(format!("log_{}.txt", stamp)),
            report_path: config.dir.join(format!("report_{}.txt", stamp)),
        }
    }

    /// Installs the process-wide logger. The first call wins; later calls
    /// return the instance that is already installed.
    pub fn init(config: LogConfig) -> &'static Logger {
        GLOBAL.get_or_init(|| Logger::new(config))
    }

    /// The process-wide logger. Installs one from
    /// `LogConfig::default_config()` if `init` was never called.
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(|| Logger::new(LogConfig::default_config()))
    }

    /// Info-level message to the log file.
    pub fn log(&self, message: &str) {
        self.write_record(LogRecord::new(Level::Info, message));
    }

    pub fn log_with_level(&self, message: &str, level: Level) {
        self.write_record(LogRecord::new(level, message));
    }

    /// Same as `log_with_level`, with a caller label rendered into the line.
    pub fn log_from(&self, label: &str, message: &str, level: Level) {
        self.write_record(LogRecord::with_label(level, label, message));
    }

    /// Error-level message; appended to the log file and echoed to stdout.
    pub fn error(&self, message: &str) {
        self.log_with_level(message, Level::Error);
    }

    /// Warning-level message; log file only, never echoed.
    pub fn warning(&self, message: &str) {
        self.log_with_level(message, Level::Warning);
    }

    /// Untagged line appended to the report file.
    pub fn report(&self, message: &str) {
        self.log_with_level(message, Level::Report);
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    fn write_record(&self, record: LogRecord) {
        let line = record.render();

        if record.level.echoes_to_stdout() {
            println!("{}", line);
        }

        let path = match record.level.destination() {
            Destination::Log => &self.log_path,
            Destination::Report => &self.report_path,
        };

        if let Err(e) = append_line(path, &line) {
            error!("Failed to append to {}: {}", path.display(), e);
        }
    }
}

/// Append-only write of one line, creating the log directory and file on
/// first use. One open-append-close per call; short single-line writes rely
/// on the platform's append atomicity.
fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}

/// Points the process-wide logger at a shared temporary directory so facade
/// tests never touch the real working directory.
#[cfg(test)]
pub(crate) fn install_test_global() -> &'static Logger {
    static DIR: OnceLock<tempfile::TempDir> = OnceLock::new();
    let dir = DIR.get_or_init(|| tempfile::tempdir().unwrap());
    Logger::init(LogConfig::with_dir(dir.path()))
}

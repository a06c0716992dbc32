// file: src/logger/record.rs
// description: ephemeral log records and their single-line rendering
// reference: https://docs.rs/chrono

use super::level::{Destination, Level};
use chrono::{DateTime, SecondsFormat, Utc};

/// One log entry. Records exist only long enough to be rendered; nothing is
/// persisted beyond the rendered line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    /// Optional caller annotation, rendered after the level tag.
    pub label: Option<String>,
}

impl LogRecord {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            label: None,
        }
    }

    pub fn with_label(level: Level, label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            label: Some(label.into()),
        }
    }

    /// The single rendered line, without a trailing newline. Report-destined
    /// records carry no level tag. Embedded newlines are flattened to keep
    /// the one-record-one-line invariant.
    pub fn render(&self) -> String {
        let ts = self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
        let message = self.message.replace(['\r', '\n'], " ");

        match (self.level.destination(), &self.label) {
            (Destination::Report, _) => format!("[{}] {}", ts, message),
            (Destination::Log, Some(label)) => {
                format!("[{}] {} [{}] {}", ts, self.level.tag(), label, message)
            }
            (Destination::Log, None) => format!("[{}] {} {}", ts, self.level.tag(), message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_log_line() {
        let record = LogRecord::new(Level::Error, "disk on fire");
        let line = record.render();

        assert!(line.starts_with('['));
        assert!(line.contains("] [ERROR] "));
        assert!(line.ends_with("disk on fire"));
    }

    #[test]
    fn test_render_report_line_has_no_tag() {
        let record = LogRecord::new(Level::Report, "42 items processed");
        let line = record.render();

        assert!(!line.contains("[INFO]"));
        assert!(line.ends_with("] 42 items processed"));
    }

    #[test]
    fn test_render_includes_label() {
        let record = LogRecord::with_label(Level::Info, "scanner", "done");
        let line = record.render();

        assert!(line.contains("[INFO] [scanner] done"));
    }

    #[test]
    fn test_render_flattens_newlines() {
        let record = LogRecord::new(Level::Info, "line one\nline two");
        let line = record.render();

        assert_eq!(line.lines().count(), 1);
        assert!(line.ends_with("line one line two"));
    }

    #[test]
    fn test_timestamp_is_utc_iso8601() {
        let record = LogRecord::new(Level::Info, "tick");
        let line = record.render();
        let stamp = &line[1..line.find(']').unwrap()];

        assert!(stamp.ends_with('Z'));
        assert!(stamp.contains('T'));
    }
}

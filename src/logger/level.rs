// file: src/logger/level.rs
// description: message severity levels and their destination routing
// reference: internal level table

use crate::error::DaylogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity/category of a log message. The table is fixed: each level maps
/// to a tag, a stdout-echo flag, and one of the two destination files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warning,
    Error,
    Report,
}

/// Physical file a record lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Destination {
    Log,
    Report,
}

impl Level {
    /// Bracketed tag rendered into log-file lines. Report shares the info
    /// tag; report-destined lines are written untagged regardless.
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Info | Level::Report => "[INFO]",
            Level::Warning => "[WARNING]",
            Level::Error => "[ERROR]",
        }
    }

    /// Only error-level messages are echoed to stdout.
    pub fn echoes_to_stdout(&self) -> bool {
        matches!(self, Level::Error)
    }

    pub(crate) fn destination(&self) -> Destination {
        match self {
            Level::Report => Destination::Report,
            _ => Destination::Log,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Info
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Report => "report",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Level {
    type Err = DaylogError;

    /// Case-insensitive; single-letter aliases accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" | "i" => Ok(Level::Info),
            "warning" | "w" => Ok(Level::Warning),
            "error" | "e" => Ok(Level::Error),
            "report" | "r" => Ok(Level::Report),
            other => Err(DaylogError::UnknownLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_names() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("report".parse::<Level>().unwrap(), Level::Report);
    }

    #[test]
    fn test_parse_single_letter_aliases() {
        assert_eq!("i".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("w".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("e".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("r".parse::<Level>().unwrap(), Level::Report);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ERROR".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("R".parse::<Level>().unwrap(), Level::Report);
    }

    #[test]
    fn test_parse_unknown_level_fails() {
        let err = "verbose".parse::<Level>();
        assert!(err.is_err());
    }

    #[test]
    fn test_tags() {
        assert_eq!(Level::Info.tag(), "[INFO]");
        assert_eq!(Level::Warning.tag(), "[WARNING]");
        assert_eq!(Level::Error.tag(), "[ERROR]");
        assert_eq!(Level::Report.tag(), "[INFO]");
    }

    #[test]
    fn test_only_error_echoes() {
        assert!(Level::Error.echoes_to_stdout());
        assert!(!Level::Info.echoes_to_stdout());
        assert!(!Level::Warning.echoes_to_stdout());
        assert!(!Level::Report.echoes_to_stdout());
    }

    #[test]
    fn test_destination_routing() {
        assert_eq!(Level::Report.destination(), Destination::Report);
        assert_eq!(Level::Info.destination(), Destination::Log);
        assert_eq!(Level::Warning.destination(), Destination::Log);
        assert_eq!(Level::Error.destination(), Destination::Log);
    }

    #[test]
    fn test_serde_lowercase_round_trip() {
        let json = serde_json::to_string(&Level::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Level::Warning);
    }
}

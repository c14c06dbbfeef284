use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the report pipeline.
///
/// Per-line variants (`MalformedLine`, `MalformedTimestamp`,
/// `MalformedField`) are recoverable: the offending line or field is
/// skipped and processing continues. Only `UnreadableSource` and
/// `UnwritableDestination` are fatal to their respective operations.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The log file could not be opened or read.
    #[error("Failed to read log file {path}: {source}")]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line is not syntactically valid JSON.
    #[error("Line is not valid JSON: {0}")]
    MalformedLine(#[from] serde_json::Error),

    /// A `time` value did not match the expected positional format.
    #[error("Invalid timestamp format: {0}")]
    MalformedTimestamp(String),

    /// A field was present but held a value of the wrong shape.
    ///
    /// The classifier reduces this to an empty field; it never aborts a
    /// line on its own.
    #[error("Malformed field \"{field}\": expected {expected}")]
    MalformedField {
        field: String,
        expected: &'static str,
    },

    /// The report destination could not be opened for writing.
    #[error("Error opening {path} for writing: {source}")]
    UnwritableDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unreadable_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ReportError::UnreadableSource {
            path: PathBuf::from("/var/log/edr.jsonl"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read log file"));
        assert!(msg.contains("/var/log/edr.jsonl"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_malformed_timestamp() {
        let err = ReportError::MalformedTimestamp("not-a-time".to_string());
        assert_eq!(err.to_string(), "Invalid timestamp format: not-a-time");
    }

    #[test]
    fn test_error_display_malformed_field() {
        let err = ReportError::MalformedField {
            field: "path".to_string(),
            expected: "string",
        };
        assert_eq!(err.to_string(), "Malformed field \"path\": expected string");
    }

    #[test]
    fn test_error_display_unwritable_destination() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ReportError::UnwritableDestination {
            path: PathBuf::from("report.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Error opening report.txt for writing"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: ReportError = json_err.into();
        assert!(err.to_string().contains("Line is not valid JSON"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ReportError = io_err.into();
        assert!(err.to_string().contains("pipe closed"));
    }
}

//! Error types and exit codes for metro
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown station, conflicting line, unreadable network)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown station, bad network definition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a network
#[derive(Error, Debug)]
pub enum MetroError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("station not found: {name}")]
    StationNotFound { name: String },

    #[error("line already exists: {name}")]
    LineNameConflict { name: String },

    #[error("line has no stations: {name}")]
    EmptyLine { name: String },

    #[error("no interchange reachable from {station}")]
    NoInterchangeReachable { station: String },

    #[error("network file not found: {path:?}")]
    NetworkNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl MetroError {
    /// Create an error for a station name that is not registered
    pub fn station_not_found(name: impl Into<String>) -> Self {
        MetroError::StationNotFound { name: name.into() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MetroError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MetroError::UnknownFormat(_)
            | MetroError::UsageError(_)
            | MetroError::InvalidValue { .. } => ExitCode::Usage,

            MetroError::StationNotFound { .. }
            | MetroError::LineNameConflict { .. }
            | MetroError::EmptyLine { .. }
            | MetroError::NoInterchangeReachable { .. }
            | MetroError::NetworkNotFound { .. }
            | MetroError::Toml(_)
            | MetroError::Json(_) => ExitCode::Data,

            MetroError::Io(_) | MetroError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MetroError::UnknownFormat(_) => "unknown_format",
            MetroError::UsageError(_) => "usage_error",
            MetroError::InvalidValue { .. } => "invalid_value",
            MetroError::StationNotFound { .. } => "station_not_found",
            MetroError::LineNameConflict { .. } => "line_name_conflict",
            MetroError::EmptyLine { .. } => "empty_line",
            MetroError::NoInterchangeReachable { .. } => "no_interchange_reachable",
            MetroError::NetworkNotFound { .. } => "network_not_found",
            MetroError::Io(_) => "io_error",
            MetroError::Json(_) => "json_error",
            MetroError::Toml(_) => "toml_error",
            MetroError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for metro operations
pub type Result<T> = std::result::Result<T, MetroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_not_found_is_data_error() {
        let err = MetroError::station_not_found("Nowhere");
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.to_string(), "station not found: Nowhere");
    }

    #[test]
    fn test_invalid_value_is_usage_error() {
        let err = MetroError::invalid_value("max_routes", 0);
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(err.to_string(), "invalid max_routes: 0");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = MetroError::LineNameConflict {
            name: "Red".to_string(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "line_name_conflict");
        assert_eq!(json["error"]["message"], "line already exists: Red");
    }

    #[test]
    fn test_exit_code_into_i32() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Usage), 2);
    }
}

//! Error types for the logging core
//!
//! These never reach a log call site: emission is infallible by contract.
//! They exist for the initialization path, where the one surfaced failure
//! (a configured log file that cannot be opened) is formatted into a single
//! stderr diagnostic and everything else degrades silently.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The path named by `LDCP_LOGFILE` could not be opened for appending
    #[error("could not open file '{}' for logging output ({})", .path.display(), .source)]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `LDCP_LOGLEVEL` held something other than an integer
    #[error("log level value '{value}' is not an integer")]
    InvalidLogLevel { value: String },
}

impl LoggerError {
    pub fn open_log_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::OpenLogFile {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_log_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLogLevel {
            value: value.into(),
        }
    }
}

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the view rendered without an error banner
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (fetch failure, bad config, output failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors surfaced by the search backend client and configuration loading.
///
/// The `Display` text of the fetch variants is what ends up in the error
/// banner, so it stays short and human-readable.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Connectivity, DNS, TLS or timeout failure before a response arrived
    #[error("{message}")]
    Transport { message: String },

    /// The backend answered with a non-success HTTP status
    #[error("Failed to fetch data (HTTP {status})")]
    FetchFailed { status: u16 },

    /// The response body was not valid JSON
    #[error("Failed to parse response: {details}")]
    Parse { details: String },

    #[error("Invalid config: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    Config {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Transport {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Parse {
            details: err.to_string(),
        }
    }
}

/// Error types shared across the application
///
/// Errors that travel inside iced messages must be `Clone`, so the
/// underlying I/O and HTTP failures are captured as strings where they
/// cross into the UI.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while taking an image in from the picker or a drop
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntakeError {
    /// The file's declared type does not indicate an image
    #[error("Please choose a valid image file ({0} is not an image).")]
    NotAnImage(String),

    /// The file looked like an image but could not be read
    #[error("Could not read {name}: {reason}")]
    Read { name: String, reason: String },

    /// An edit started before the file finished loading
    #[error("{0} was not loaded because an edit is in progress.")]
    Busy(String),
}

/// Errors raised by the edit request client
///
/// Every variant renders with the same prefix so the banner always reads
/// as one descriptive message, whatever failed underneath.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EditError {
    /// Connection, TLS or timeout failure
    #[error("Gemini API Error: {0}")]
    Request(String),

    /// The service answered with a non-success status
    #[error("Gemini API Error: HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The service answered 2xx but the body was not a valid response
    #[error("Gemini API Error: failed to parse response: {0}")]
    Decode(String),
}

/// Fatal startup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_KEY environment variable not set")]
    MissingApiKey,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_errors_share_prefix() {
        let errors = [
            EditError::Request("connection refused".into()),
            EditError::Status { status: 503, body: "overloaded".into() },
            EditError::Decode("expected value".into()),
        ];

        for err in errors {
            assert!(err.to_string().starts_with("Gemini API Error: "), "{}", err);
        }
    }

    #[test]
    fn test_status_error_message() {
        let err = EditError::Status { status: 429, body: "quota".into() };
        assert_eq!(err.to_string(), "Gemini API Error: HTTP 429: quota");
    }
}

#![deny(warnings)]

// Error types for the fileio-bridge crate

use thiserror::Error;

/// Main error type for the fileio-bridge application
#[derive(Error, Debug)]
pub enum FileIoBridgeError {
    /// File I/O operation errors
    #[error(transparent)]
    FileIo(#[from] FileIoError),

    /// Request decoding errors
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Transport layer errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File I/O operation errors.
///
/// Variants form the stable set of failure kinds surfaced to callers; the
/// Display output is `<FailureKind>: <message>` and is what ends up in the
/// `error` field of a response.
#[derive(Error, Debug)]
pub enum FileIoError {
    /// Path does not exist
    #[error("NotFound: {0}")]
    NotFound(String),

    /// Access refused by the operating system
    #[error("PermissionDenied: {0}")]
    PermissionDenied(String),

    /// Read target is a directory
    #[error("IsADirectory: {0}")]
    IsADirectory(String),

    /// File bytes are not valid UTF-8
    #[error("InvalidEncoding: {0}")]
    InvalidEncoding(String),

    /// Any other filesystem failure
    #[error("Io: {0}")]
    Io(String),
}

/// Request decoding errors
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Input line is not valid JSON or not a JSON object
    #[error("InvalidRequest: {0}")]
    InvalidRequest(String),

    /// Required request field absent
    #[error("InvalidRequest: missing required field: {0}")]
    MissingField(&'static str),

    /// Required request field present but not a string
    #[error("InvalidRequest: field must be a string: {0}")]
    NonStringField(&'static str),
}

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// End of input reached
    #[error("Connection closed")]
    ConnectionClosed,

    /// IO error in transport
    #[error("Transport IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FileIoBridgeError>;

impl FileIoError {
    /// Map a std::io::Error to a failure kind based on the error kind
    pub fn from_io_error(operation: &str, path: &str, error: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match error.kind() {
            ErrorKind::NotFound => {
                FileIoError::NotFound(format!("failed to {} {}: {}", operation, path, error))
            }
            ErrorKind::PermissionDenied => FileIoError::PermissionDenied(format!(
                "failed to {} {}: {}",
                operation, path, error
            )),
            ErrorKind::IsADirectory => {
                FileIoError::IsADirectory(format!("failed to {} {}: {}", operation, path, error))
            }
            ErrorKind::InvalidData => {
                FileIoError::InvalidEncoding(format!("failed to {} {}: {}", operation, path, error))
            }
            _ => FileIoError::Io(format!("failed to {} {}: {}", operation, path, error)),
        }
    }
}

//! Error types shared by the workspace model, the orchestrator and the
//! remote service client.
//!
//! Two failure scopes are kept apart:
//!
//! * [`ServiceError`] describes one failed call to the remote conversion
//!   service. During a batch conversion it is recovered per file and only
//!   surfaces as a transient message.
//! * [`WorkflowError`] describes why a whole operation (convert-all,
//!   merge-all, download) did not produce a result. The user-facing text for
//!   it is always delivered through a status message; the error value itself
//!   is for logging and tests.

use std::fmt;

use thiserror::Error;

/// The remote call that failed. Its `Display` form is the word used in the
/// generic `"<operation> failed: <status text>"` fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOperation {
    Upload,
    Convert,
    Merge,
}

impl fmt::Display for ServiceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            ServiceOperation::Upload => "Upload",
            ServiceOperation::Convert => "Conversion",
            ServiceOperation::Merge => "Merge",
        };
        f.write_str(word)
    }
}

/// A single failed call to the remote conversion service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Non-success HTTP status carrying a `{ "error": ... }` body. The server
    /// text is shown verbatim.
    #[error("{message}")]
    Rejected {
        operation: ServiceOperation,
        status: u16,
        message: String,
    },

    /// Non-success HTTP status without a usable error body.
    #[error("{operation} failed: {status_text}")]
    Status {
        operation: ServiceOperation,
        status: u16,
        status_text: String,
    },

    /// The request never produced a response (network down, CORS, aborted).
    #[error("{operation} request could not be sent: {reason}")]
    Transport {
        operation: ServiceOperation,
        reason: String,
    },

    /// A success status whose body could not be understood, or that reported
    /// `success: false`.
    #[error("{operation} returned an unexpected response: {reason}")]
    InvalidResponse {
        operation: ServiceOperation,
        reason: String,
    },
}

impl ServiceError {
    pub fn operation(&self) -> ServiceOperation {
        match self {
            ServiceError::Rejected { operation, .. }
            | ServiceError::Status { operation, .. }
            | ServiceError::Transport { operation, .. }
            | ServiceError::InvalidResponse { operation, .. } => *operation,
        }
    }
}

/// Failures of the ordered file collections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("index {index} is out of range for a list of {len} files")]
    OutOfRange { index: usize, len: usize },

    #[error("new order must contain exactly the current {expected} files, got {actual}")]
    NotAPermutation { expected: usize, actual: usize },
}

/// Failures of host facilities (timers, new browsing contexts).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("{0}")]
    OpenWindow(String),
}

/// Why an orchestration run produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("another operation is already in progress")]
    Busy,

    #[error("there are no files to convert")]
    NothingToConvert,

    #[error("merging needs at least two converted files, found {found}")]
    TooFewToMerge { found: usize },

    #[error("none of the {total} files could be converted")]
    NoneConverted { total: usize },

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Configuration documents that could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

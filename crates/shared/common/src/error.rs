//! Error taxonomy for the chat data-access layer.
//!
//! Two levels:
//! - `StoreError`: what the remote store client reports for a failed request
//! - `DbError`: the closed set of kinds surfaced to repository callers
//!
//! `From<StoreError> for DbError` is the translation entry point, so `?` on a
//! store call classifies transport failures with the cause attached.

use thiserror::Error;

// =============================================================================
// Store (transport) errors
// =============================================================================

/// Failure reported by the remote store while completing a request.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Store responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid store request: {0}")]
    InvalidRequest(String),

    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        StoreError::Unavailable(msg.into())
    }

    pub fn permission_denied(msg: impl Into<String>) -> Self {
        StoreError::PermissionDenied(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        StoreError::InvalidRequest(msg.into())
    }
}

/// Result type alias for store client calls
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Repository errors
// =============================================================================

/// Errors surfaced by repository operations.
#[derive(Error, Debug)]
pub enum DbError {
    /// The store failed to complete the request
    #[error("Store request failed: {0}")]
    Transport(#[from] StoreError),

    /// A value was present but is not a valid chat room
    #[error("Failed to decode chat room: {0}")]
    Decoding(#[source] serde_json::Error),

    /// A collection path held something other than a mapping of records
    #[error("Value at {path} is not a collection of chat rooms")]
    Validation { path: String },

    /// An id cannot be used as a single path segment
    #[error("Invalid store key '{key}'")]
    InvalidKey { key: String },

    /// A record could not be turned into a store value (precondition failure)
    #[error("Failed to encode chat room: {0}")]
    Encoding(#[source] serde_json::Error),
}

impl DbError {
    /// Get a stable error code for the kind
    pub fn code(&self) -> &'static str {
        match self {
            DbError::Transport(_) => "TRANSPORT_ERROR",
            DbError::Decoding(_) => "DECODING_ERROR",
            DbError::Validation { .. } => "VALIDATION_ERROR",
            DbError::InvalidKey { .. } => "INVALID_KEY",
            DbError::Encoding(_) => "ENCODING_ERROR",
        }
    }

    pub fn decoding(err: serde_json::Error) -> Self {
        DbError::Decoding(err)
    }

    pub fn encoding(err: serde_json::Error) -> Self {
        DbError::Encoding(err)
    }

    pub fn validation(path: impl Into<String>) -> Self {
        DbError::Validation { path: path.into() }
    }

    pub fn invalid_key(key: impl Into<String>) -> Self {
        DbError::InvalidKey { key: key.into() }
    }
}

/// Result type alias for repository operations
pub type DbResult<T> = Result<T, DbError>;

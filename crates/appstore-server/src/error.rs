//! Errors for appstore-server

use thiserror::Error;

/// App Store Server client errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A signed payload failed verification
    #[error("Verification failed: {0}")]
    Verification(#[from] appstore_jws::Error),

    // ============================================================================
    // Credential Errors
    // ============================================================================
    #[error("Invalid private key: {0}")]
    PrivateKey(String),

    #[error("Failed to sign bearer token: {0}")]
    Signing(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    // ============================================================================
    // Remote Errors
    // ============================================================================
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("App Store API error: status {status}, code {code:?}: {message}")]
    Api {
        status: u16,
        /// Apple's `errorCode`, when the body carried one
        code: Option<i64>,
        message: String,
    },

    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("Invalid remote URL: {0}")]
    RemoteUrlInvalid(String),

    #[error("Remote response too large: {size} bytes (maximum: {max} bytes)")]
    RemoteResponseTooLarge { size: usize, max: usize },
}

impl Error {
    /// Apple's error code of an [`Error::Api`]
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Error::Api { code, .. } => *code,
            _ => None,
        }
    }
}

/// Result type alias for appstore-server operations
pub type Result<T> = std::result::Result<T, Error>;

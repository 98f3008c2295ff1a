//! Errors for appstore-jws

use thiserror::Error;

/// Signed payload verification errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Malformed token: expected three non-empty segments separated by '.'")]
    MalformedToken,

    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    #[error("Payload could not be decoded: {0}")]
    PayloadParseError(String),

    // ============================================================================
    // Certificate Errors
    // ============================================================================
    #[error("Header carries no certificate in 'x5c'")]
    NoCertificate,

    #[error("Invalid certificate: {0}")]
    InvalidCertificate(String),

    #[error("Unsupported public key algorithm: {0}")]
    UnsupportedKeyAlgorithm(String),

    #[error("Header algorithm '{header}' does not match the certificate key ({key})")]
    AlgorithmMismatch { header: String, key: String },

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,
}

/// Result type alias for appstore-jws operations
pub type Result<T> = std::result::Result<T, Error>;

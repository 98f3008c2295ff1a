//! Size limit constants for input validation

/// Maximum length for a signed token string (256KB)
///
/// Notification envelopes embed two further signed tokens, each with its own
/// certificate chain, so they are several times larger than a plain JWT.
pub(crate) const MAX_TOKEN_LENGTH: usize = 256 * 1024;

// ============================================================================
// Decoded segment size limits
// ============================================================================

/// Maximum size for decoded header JSON (32KB)
/// Apple headers carry a three certificate chain, usually around 4KB
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 32 * 1024;

/// Maximum size for decoded payload JSON (192KB)
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 192 * 1024;

/// Maximum size for decoded signature bytes (1KB)
/// RSA signatures are typically 256-512 bytes, ES256 raw signatures are 64
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;

// ============================================================================
// Header field size limits
// ============================================================================

/// Maximum length for algorithm (alg) field (16 bytes)
pub(crate) const MAX_ALG_LENGTH: usize = 16;

/// Maximum size for a decoded leaf certificate (8KB)
pub(crate) const MAX_CERTIFICATE_SIZE: usize = 8 * 1024;

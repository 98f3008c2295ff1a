//! Size and timing limits for the transport layer

use std::time::Duration;

/// Maximum length for a configured base URL (2KB)
pub(crate) const MAX_BASE_URL_LENGTH: usize = 2048;

/// Maximum size for a response body (16MB)
///
/// Notification history pages carry up to twenty notifications, each with
/// nested signed transactions and their certificate chains.
pub(crate) const MAX_RESPONSE_SIZE: usize = 16 * 1024 * 1024;

// ============================================================================
// Bearer tokens
// ============================================================================

/// Audience of every bearer token
pub(crate) const TOKEN_AUDIENCE: &str = "appstoreconnect-v1";

/// Apple rejects tokens that live longer than 60 minutes
pub(crate) const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// A cached token is dropped this long before it expires
pub(crate) const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Lower bound for the cache time-to-live of a token
pub(crate) const MIN_TOKEN_CACHE_TTL: Duration = Duration::from_secs(1);

/// Maximum number of cached tokens (one per scope)
pub(crate) const MAX_CACHED_TOKENS: u64 = 256;

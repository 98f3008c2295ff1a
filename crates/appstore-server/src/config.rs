//! Client configuration
//!
//! A [`ClientConfig`] is built once per service and passed by value to
//! [`AppStoreClient::new`](crate::AppStoreClient::new); clients never mutate
//! it afterwards.

use std::fmt;
use std::time::Duration;

/// Which Apple API the client talks to
///
/// The two APIs accept the same kind of bearer token but scope it
/// differently: the App Store Server API binds it to a bundle ID, App Store
/// Connect to a single `METHOD path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    AppStoreServer,
    AppStoreConnect,
}

/// Server environment of the App Store Server API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Production,
    Sandbox,
}

impl Service {
    /// Default base URL of this service in `environment`
    pub const fn base_url(&self, environment: Environment) -> &'static str {
        match (self, environment) {
            (Service::AppStoreServer, Environment::Production) => {
                "https://api.storekit.itunes.apple.com"
            }
            (Service::AppStoreServer, Environment::Sandbox) => {
                "https://api.storekit-sandbox.itunes.apple.com"
            }
            (Service::AppStoreConnect, _) => "https://api.appstoreconnect.apple.com",
        }
    }
}

/// API key issued in App Store Connect
#[derive(Clone)]
pub struct Credentials {
    pub(crate) issuer_id: String,
    pub(crate) key_id: String,
    pub(crate) private_key_pem: String,
    pub(crate) bundle_id: Option<String>,
}

impl Credentials {
    /// Create credentials from the issuer ID, key ID and the `.p8` key file
    /// contents
    pub fn new(
        issuer_id: impl Into<String>,
        key_id: impl Into<String>,
        private_key_pem: impl Into<String>,
    ) -> Self {
        Self {
            issuer_id: issuer_id.into(),
            key_id: key_id.into(),
            private_key_pem: private_key_pem.into(),
            bundle_id: None,
        }
    }

    /// Bundle ID of the app, required by the App Store Server API
    pub fn with_bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.bundle_id = Some(bundle_id.into());
        self
    }

    pub fn issuer_id(&self) -> &str {
        &self.issuer_id
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn bundle_id(&self) -> Option<&str> {
        self.bundle_id.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("issuer_id", &self.issuer_id)
            .field("key_id", &self.key_id)
            .field("private_key_pem", &"<redacted>")
            .field("bundle_id", &self.bundle_id)
            .finish()
    }
}

/// Immutable configuration of an [`AppStoreClient`](crate::AppStoreClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) service: Service,
    pub(crate) environment: Environment,
    pub(crate) credentials: Credentials,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Duration,
    pub(crate) retry_count: u32,
    pub(crate) retry_wait: Duration,
    pub(crate) retry_max_wait: Duration,
    pub(crate) token_lifetime: Duration,
}

impl ClientConfig {
    pub fn new(service: Service, environment: Environment, credentials: Credentials) -> Self {
        Self {
            service,
            environment,
            credentials,
            base_url: None,
            timeout: Duration::from_secs(10),
            retry_count: 3,
            retry_wait: Duration::from_secs(3),
            retry_max_wait: Duration::from_secs(10),
            token_lifetime: Duration::from_secs(5 * 60),
        }
    }

    /// Send requests to `base_url` instead of Apple's host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Timeout of a single HTTP attempt
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retries after the first attempt; zero disables retrying
    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    /// Wait before the first retry, doubled for each further retry
    pub fn with_retry_wait(mut self, retry_wait: Duration) -> Self {
        self.retry_wait = retry_wait;
        self
    }

    /// Upper bound for the wait between retries
    pub fn with_retry_max_wait(mut self, retry_max_wait: Duration) -> Self {
        self.retry_max_wait = retry_max_wait;
        self
    }

    /// Lifetime of each bearer token, at most 60 minutes
    pub fn with_token_lifetime(mut self, token_lifetime: Duration) -> Self {
        self.token_lifetime = token_lifetime;
        self
    }

    pub fn service(&self) -> Service {
        self.service
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The configured override, or the service default for the environment
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.service.base_url(self.environment))
    }

    /// Wait before retry number `retry` (zero based)
    pub(crate) fn backoff(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
        self.retry_wait
            .checked_mul(factor)
            .unwrap_or(self.retry_max_wait)
            .min(self.retry_max_wait)
    }
}

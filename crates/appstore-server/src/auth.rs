//! Bearer tokens for outgoing requests
//!
//! Each request carries an ES256 JWT signed with the App Store Connect API
//! key. Signing needs a fresh random nonce, so tokens are cached per scope
//! and reused until shortly before they expire.

use crate::config::{Credentials, Service};
use crate::error::{Error, Result};
use crate::limits::{
    MAX_CACHED_TOKENS, MAX_TOKEN_LIFETIME, MIN_TOKEN_CACHE_TTL, TOKEN_AUDIENCE,
    TOKEN_EXPIRY_MARGIN,
};
use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{ECDSA_P256_SHA256_FIXED_SIGNING, EcdsaKeyPair};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use moka::future::Cache;
use serde::Serialize;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Serialize)]
struct TokenHeader<'a> {
    alg: &'static str,
    kid: &'a str,
    typ: &'static str,
}

#[derive(Serialize)]
struct TokenClaims<'a> {
    iss: &'a str,
    iat: u64,
    exp: u64,
    aud: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<[&'a str; 1]>,
}

/// Parse a PEM private key into an ES256 signing key
///
/// Accepts the PKCS#8 `PRIVATE KEY` that App Store Connect issues as a `.p8`
/// file, and SEC1 `EC PRIVATE KEY`.
pub(crate) fn parse_private_key(pem: &str) -> Result<EcdsaKeyPair> {
    let (label, der) = der::pem::decode_vec(pem.as_bytes())
        .map_err(|e| Error::PrivateKey(format!("PEM decode failed: {e}")))?;

    match label {
        "PRIVATE KEY" => EcdsaKeyPair::from_pkcs8(&ECDSA_P256_SHA256_FIXED_SIGNING, &der)
            .map_err(|e| Error::PrivateKey(format!("not a P-256 PKCS#8 key: {e}"))),
        "EC PRIVATE KEY" => {
            EcdsaKeyPair::from_private_key_der(&ECDSA_P256_SHA256_FIXED_SIGNING, &der)
                .map_err(|e| Error::PrivateKey(format!("not a P-256 SEC1 key: {e}")))
        }
        other => Err(Error::PrivateKey(format!("unexpected PEM label '{other}'"))),
    }
}

/// Signs and caches bearer tokens for one set of credentials
pub(crate) struct TokenSigner {
    service: Service,
    issuer_id: String,
    key_id: String,
    bundle_id: Option<String>,
    key_pair: EcdsaKeyPair,
    rng: SystemRandom,
    lifetime: Duration,
    cache: Cache<String, String>,
}

impl TokenSigner {
    pub(crate) fn new(
        service: Service,
        credentials: &Credentials,
        lifetime: Duration,
    ) -> Result<Self> {
        if credentials.issuer_id.is_empty() || credentials.key_id.is_empty() {
            return Err(Error::Configuration(
                "issuer ID and key ID are required".into(),
            ));
        }

        if service == Service::AppStoreServer && credentials.bundle_id.is_none() {
            return Err(Error::Configuration(
                "the App Store Server API requires a bundle ID".into(),
            ));
        }

        if lifetime.is_zero() || lifetime > MAX_TOKEN_LIFETIME {
            return Err(Error::Configuration(format!(
                "token lifetime must be between 1 second and {} minutes",
                MAX_TOKEN_LIFETIME.as_secs() / 60
            )));
        }

        let key_pair = parse_private_key(&credentials.private_key_pem)?;

        let ttl = lifetime
            .saturating_sub(TOKEN_EXPIRY_MARGIN)
            .max(MIN_TOKEN_CACHE_TTL);
        let cache = Cache::builder()
            .time_to_live(ttl)
            .max_capacity(MAX_CACHED_TOKENS)
            .build();

        Ok(Self {
            service,
            issuer_id: credentials.issuer_id.clone(),
            key_id: credentials.key_id.clone(),
            bundle_id: credentials.bundle_id.clone(),
            key_pair,
            rng: SystemRandom::new(),
            lifetime,
            cache,
        })
    }

    /// Cache key of a request: empty for bundle-bound tokens
    fn scope(&self, method: &str, path: &str) -> String {
        match self.service {
            Service::AppStoreServer => String::new(),
            Service::AppStoreConnect => format!("{method} {path}"),
        }
    }

    /// Token for a request, from the cache when still fresh
    pub(crate) async fn bearer_token(&self, method: &str, path: &str) -> Result<String> {
        let scope = self.scope(method, path);

        if let Some(token) = self.cache.get(&scope).await {
            return Ok(token);
        }

        tracing::debug!(scope = %scope, "signing new bearer token");
        let token = self.sign(&scope, now()?)?;
        self.cache.insert(scope, token.clone()).await;

        Ok(token)
    }

    /// Sign a token issued at `issued_at` (UNIX seconds)
    pub(crate) fn sign(&self, scope: &str, issued_at: u64) -> Result<String> {
        let header = TokenHeader {
            alg: "ES256",
            kid: &self.key_id,
            typ: "JWT",
        };
        let claims = TokenClaims {
            iss: &self.issuer_id,
            iat: issued_at,
            exp: issued_at + self.lifetime.as_secs(),
            aud: TOKEN_AUDIENCE,
            bid: match self.service {
                Service::AppStoreServer => self.bundle_id.as_deref(),
                Service::AppStoreConnect => None,
            },
            scope: match self.service {
                Service::AppStoreServer => None,
                Service::AppStoreConnect => Some([scope]),
            },
        };

        let header_json =
            serde_json::to_vec(&header).map_err(|e| Error::Signing(e.to_string()))?;
        let claims_json =
            serde_json::to_vec(&claims).map_err(|e| Error::Signing(e.to_string()))?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header_json),
            URL_SAFE_NO_PAD.encode(claims_json)
        );

        let signature = self
            .key_pair
            .sign(&self.rng, signing_input.as_bytes())
            .map_err(|e| Error::Signing(e.to_string()))?;

        Ok(format!(
            "{signing_input}.{}",
            URL_SAFE_NO_PAD.encode(signature.as_ref())
        ))
    }
}

fn now() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| Error::Signing(format!("system clock before UNIX epoch: {e}")))
}

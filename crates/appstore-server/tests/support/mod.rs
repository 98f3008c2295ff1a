//! Shared helpers for client tests
//!
//! Signed payloads are produced with the fixture key whose certificate is
//! embedded in their `x5c` header, the way the App Store signs them.

#![allow(dead_code)]

use appstore_server::{AppStoreClient, ClientConfig, Credentials, Environment, Service};
use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{ECDSA_P256_SHA256_FIXED_SIGNING, EcdsaKeyPair};
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde_json::{Value, json};
use std::time::Duration;

pub const PRIVATE_KEY_PEM: &str = include_str!("../fixtures/ec_p256.p8");
pub const CERTIFICATE: &[u8] = include_bytes!("../fixtures/ec_p256.cert.der");

pub const BEARER_PATTERN: &str = r"^Bearer [A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$";

/// Sign `payload` as the App Store would
pub fn sign(payload: &Value) -> String {
    let (_, pkcs8) = der::pem::decode_vec(PRIVATE_KEY_PEM.as_bytes()).expect("fixture PEM");
    let key_pair =
        EcdsaKeyPair::from_pkcs8(&ECDSA_P256_SHA256_FIXED_SIGNING, &pkcs8).expect("fixture key");

    let header = json!({"alg": "ES256", "x5c": [STANDARD.encode(CERTIFICATE)]});
    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header).unwrap()),
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap())
    );
    let signature = key_pair
        .sign(&SystemRandom::new(), signing_input.as_bytes())
        .expect("signing");

    format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(signature.as_ref()))
}

/// Replace the signature of a token with one over different bytes
pub fn tamper(token: &str) -> String {
    let (signing_input, _) = token.rsplit_once('.').unwrap();
    let other = sign(&json!({"tampered": true}));
    let (_, signature) = other.rsplit_once('.').unwrap();
    format!("{signing_input}.{signature}")
}

pub fn transaction_payload(transaction_id: &str) -> Value {
    json!({
        "transactionId": transaction_id,
        "originalTransactionId": "2000000000000000",
        "bundleId": "com.example.test",
        "productId": "com.example.monthly",
        "purchaseDate": 1_698_148_900_000_i64,
        "expiresDate": 1_700_827_300_000_i64,
        "type": "Auto-Renewable Subscription",
        "inAppOwnershipType": "PURCHASED",
        "environment": "Sandbox",
        "signedDate": 1_698_148_950_000_i64,
    })
}

pub fn renewal_payload() -> Value {
    json!({
        "originalTransactionId": "2000000000000000",
        "autoRenewProductId": "com.example.monthly",
        "productId": "com.example.monthly",
        "autoRenewStatus": 1,
        "environment": "Sandbox",
        "signedDate": 1_698_148_950_000_i64,
    })
}

pub fn credentials() -> Credentials {
    Credentials::new("57246542-96fe-1a63-e053-0824d011072a", "2X9R4HXF34", PRIVATE_KEY_PEM)
        .with_bundle_id("com.example.test")
}

/// Client for a mock server with fast retries
pub fn client(base_url: &str) -> AppStoreClient {
    client_with(base_url, 3)
}

pub fn client_with(base_url: &str, retry_count: u32) -> AppStoreClient {
    let config = ClientConfig::new(Service::AppStoreServer, Environment::Sandbox, credentials())
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5))
        .with_retry_count(retry_count)
        .with_retry_wait(Duration::from_millis(1))
        .with_retry_max_wait(Duration::from_millis(5));

    AppStoreClient::new(config).expect("client")
}

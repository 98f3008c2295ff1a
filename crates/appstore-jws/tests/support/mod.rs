//! Token generation utilities for tests
//!
//! Tokens are signed in-process with the fixture keys in `tests/fixtures`,
//! whose certificates are embedded in the `x5c` header the same way the App
//! Store embeds its signing chain.
//!
//! ```rust,ignore
//! let token = TokenBuilder::new(Signer::Es256Raw)
//!     .payload(json!({"bundleId": "com.example.test"}))
//!     .generate();
//! ```

#![allow(dead_code)]

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{
    ECDSA_P256_SHA256_ASN1_SIGNING, ECDSA_P256_SHA256_FIXED_SIGNING, EcdsaKeyPair,
    RSA_PKCS1_SHA256, RsaKeyPair,
};
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde_json::{Value, json};

pub const EC_P256_PKCS8: &[u8] = include_bytes!("../fixtures/ec_p256.pk8.der");
pub const EC_P256_CERT: &[u8] = include_bytes!("../fixtures/ec_p256.cert.der");
pub const EC_P384_CERT: &[u8] = include_bytes!("../fixtures/ec_p384.cert.der");
pub const RSA_2048_PKCS8: &[u8] = include_bytes!("../fixtures/rsa_2048.pk8.der");
pub const RSA_2048_CERT: &[u8] = include_bytes!("../fixtures/rsa_2048.cert.der");
pub const ED25519_CERT: &[u8] = include_bytes!("../fixtures/ed25519.cert.der");
pub const EC_SECP256K1_CERT: &[u8] = include_bytes!("../fixtures/ec_secp256k1.cert.der");

/// Tokens signed outside the test process, for keys aws-lc-rs cannot sign
/// with: ES256 over P-384 and P-521, and RS256 with a 1024-bit key. Each
/// carries `{"environment":"Sandbox","bundleId":"com.example.test"}`.
pub const EC_P384_ES256_RAW: &str = include_str!("../fixtures/ec_p384_es256_raw.jws");
pub const EC_P384_ES256_DER: &str = include_str!("../fixtures/ec_p384_es256_der.jws");
pub const EC_P521_ES256_RAW: &str = include_str!("../fixtures/ec_p521_es256_raw.jws");
pub const EC_P521_ES256_DER: &str = include_str!("../fixtures/ec_p521_es256_der.jws");
pub const RSA_1024_RS256: &str = include_str!("../fixtures/rsa_1024_rs256.jws");

pub fn presigned_tokens() -> [(&'static str, &'static str); 5] {
    [
        ("P-384 raw", EC_P384_ES256_RAW),
        ("P-384 DER", EC_P384_ES256_DER),
        ("P-521 raw", EC_P521_ES256_RAW),
        ("P-521 DER", EC_P521_ES256_DER),
        ("RSA 1024", RSA_1024_RS256),
    ]
}

/// Signing schemes the App Store may use
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signer {
    /// ES256 with raw `r || s` signature (JWS standard)
    Es256Raw,
    /// ES256 with ASN.1 DER signature
    Es256Der,
    /// RS256, PKCS#1 v1.5
    Rs256,
}

impl Signer {
    pub fn alg(&self) -> &'static str {
        match self {
            Self::Es256Raw | Self::Es256Der => "ES256",
            Self::Rs256 => "RS256",
        }
    }

    pub fn certificate(&self) -> &'static [u8] {
        match self {
            Self::Es256Raw | Self::Es256Der => EC_P256_CERT,
            Self::Rs256 => RSA_2048_CERT,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Es256Raw, Self::Es256Der, Self::Rs256]
    }

    /// Sign `input` with the fixture key for this scheme
    pub fn sign(&self, input: &[u8]) -> Vec<u8> {
        let rng = SystemRandom::new();
        match self {
            Self::Es256Raw | Self::Es256Der => {
                let alg = if *self == Self::Es256Raw {
                    &ECDSA_P256_SHA256_FIXED_SIGNING
                } else {
                    &ECDSA_P256_SHA256_ASN1_SIGNING
                };
                let key_pair = EcdsaKeyPair::from_pkcs8(alg, EC_P256_PKCS8).expect("EC fixture");
                key_pair
                    .sign(&rng, input)
                    .expect("ECDSA signing failed")
                    .as_ref()
                    .to_vec()
            }
            Self::Rs256 => {
                let key_pair = RsaKeyPair::from_pkcs8(RSA_2048_PKCS8).expect("RSA fixture");
                let mut signature = vec![0u8; key_pair.public_modulus_len()];
                key_pair
                    .sign(&RSA_PKCS1_SHA256, &rng, input, &mut signature)
                    .expect("RSA signing failed");
                signature
            }
        }
    }
}

/// Builder for signed tokens
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    signer: Signer,
    header: Value,
    payload: Value,
}

impl TokenBuilder {
    pub fn new(signer: Signer) -> Self {
        Self {
            signer,
            header: json!({
                "alg": signer.alg(),
                "x5c": [STANDARD.encode(signer.certificate())],
            }),
            payload: json!({}),
        }
    }

    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// Override the header algorithm
    pub fn alg(mut self, alg: &str) -> Self {
        self.header["alg"] = json!(alg);
        self
    }

    /// Replace the certificate chain, leaf first
    pub fn chain(mut self, certificates: &[&[u8]]) -> Self {
        let encoded: Vec<String> = certificates.iter().map(|c| STANDARD.encode(c)).collect();
        self.header["x5c"] = json!(encoded);
        self
    }

    /// Sign header and payload into a compact token
    pub fn generate(self) -> String {
        let header_b64 = encode_json(&self.header);
        let payload_b64 = encode_json(&self.payload);
        let signing_input = format!("{header_b64}.{payload_b64}");
        let signature = self.signer.sign(signing_input.as_bytes());
        format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(signature))
    }
}

pub fn encode_json(value: &Value) -> String {
    URL_SAFE_NO_PAD.encode(serde_json::to_vec(value).expect("serialize"))
}

/// Decode one segment of a token
pub fn segment_bytes(token: &str, index: usize) -> Vec<u8> {
    let segment = token.split('.').nth(index).expect("segment");
    URL_SAFE_NO_PAD.decode(segment).expect("segment decode")
}

/// Replace one segment of a token with the encoding of `bytes`
pub fn replace_segment(token: &str, index: usize, bytes: &[u8]) -> String {
    let mut parts: Vec<String> = token.split('.').map(String::from).collect();
    parts[index] = URL_SAFE_NO_PAD.encode(bytes);
    parts.join(".")
}

/// Flip a single bit of the decoded segment and re-encode it
pub fn flip_bit(token: &str, index: usize, bit: usize) -> String {
    let mut bytes = segment_bytes(token, index);
    bytes[bit / 8] ^= 1 << (bit % 8);
    replace_segment(token, index, &bytes)
}

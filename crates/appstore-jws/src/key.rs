//! Public keys taken from signing certificates
use crate::error::{Error, Result};

use aws_lc_rs::signature::{self, EcdsaVerificationAlgorithm, UnparsedPublicKey};
use der::Encode;
use der::asn1::UintRef;

/// Named curve of an ECDSA certificate key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EcdsaCurve {
    P256,
    P384,
    P521,
}

impl EcdsaCurve {
    /// Width of one scalar in bytes
    const fn scalar_len(&self) -> usize {
        match self {
            EcdsaCurve::P256 => 32,
            EcdsaCurve::P384 => 48,
            EcdsaCurve::P521 => 66,
        }
    }

    /// SHA-256 over raw `r || s`; aws-lc-rs has no such variant for P-384
    fn fixed(&self) -> Option<&'static EcdsaVerificationAlgorithm> {
        match self {
            EcdsaCurve::P256 => Some(&signature::ECDSA_P256_SHA256_FIXED),
            EcdsaCurve::P384 => None,
            EcdsaCurve::P521 => Some(&signature::ECDSA_P521_SHA256_FIXED),
        }
    }

    /// SHA-256 over an ASN.1 DER signature
    fn asn1(&self) -> &'static EcdsaVerificationAlgorithm {
        match self {
            EcdsaCurve::P256 => &signature::ECDSA_P256_SHA256_ASN1,
            EcdsaCurve::P384 => &signature::ECDSA_P384_SHA256_ASN1,
            EcdsaCurve::P521 => &signature::ECDSA_P521_SHA256_ASN1,
        }
    }
}

/// Public key of a leaf certificate
///
/// Both variants hold the contents of the certificate's
/// `subjectPublicKey` BIT STRING.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PublicKey {
    /// ECDSA key as an uncompressed SEC1 point
    Ecdsa { curve: EcdsaCurve, point: Vec<u8> },
    /// RSA key as a DER `RSAPublicKey` (PKCS#1)
    Rsa(Vec<u8>),
}

impl PublicKey {
    /// Human readable key family, used in error messages
    pub(crate) const fn family(&self) -> &'static str {
        match self {
            PublicKey::Ecdsa { curve: EcdsaCurve::P256, .. } => "ECDSA P-256",
            PublicKey::Ecdsa { curve: EcdsaCurve::P384, .. } => "ECDSA P-384",
            PublicKey::Ecdsa { curve: EcdsaCurve::P521, .. } => "ECDSA P-521",
            PublicKey::Rsa(_) => "RSA",
        }
    }

    /// Verify `signature` over `signing_input` with SHA-256
    ///
    /// ECDSA signatures are accepted as raw `r || s` first and as ASN.1 DER
    /// second. RSA signatures use PKCS#1 v1.5 and keys from 1024 bits up.
    pub(crate) fn verify(&self, signing_input: &[u8], signature: &[u8]) -> Result<()> {
        match self {
            PublicKey::Ecdsa { curve, point } => {
                if let Some(fixed) = raw_to_fixed(signature, curve.scalar_len()) {
                    if verify_fixed(*curve, point, signing_input, &fixed) {
                        return Ok(());
                    }
                }

                UnparsedPublicKey::new(curve.asn1(), point)
                    .verify(signing_input, signature)
                    .map_err(|_| Error::SignatureInvalid)
            }
            PublicKey::Rsa(der) => UnparsedPublicKey::new(
                &signature::RSA_PKCS1_1024_8192_SHA256_FOR_LEGACY_USE_ONLY,
                der,
            )
            .verify(signing_input, signature)
            .map_err(|_| Error::SignatureInvalid),
        }
    }
}

fn verify_fixed(curve: EcdsaCurve, point: &[u8], signing_input: &[u8], fixed: &[u8]) -> bool {
    match curve.fixed() {
        Some(algorithm) => UnparsedPublicKey::new(algorithm, point)
            .verify(signing_input, fixed)
            .is_ok(),
        None => fixed_to_asn1(fixed).is_some_and(|der| {
            UnparsedPublicKey::new(curve.asn1(), point)
                .verify(signing_input, &der)
                .is_ok()
        }),
    }
}

/// Normalize a raw `r || s` signature to fixed-width scalars
///
/// The signature is split exactly in half and each half is read as a
/// big-endian unsigned integer, so leading zero bytes are tolerated. Returns
/// `None` when the halves cannot be scalars of `scalar_len` bytes.
fn raw_to_fixed(signature: &[u8], scalar_len: usize) -> Option<Vec<u8>> {
    if signature.is_empty() || signature.len() % 2 != 0 {
        return None;
    }

    let (r, s) = signature.split_at(signature.len() / 2);
    let mut fixed = Vec::with_capacity(scalar_len * 2);
    for half in [r, s] {
        let first_nonzero = half.iter().position(|b| *b != 0).unwrap_or(half.len());
        let digits = &half[first_nonzero..];
        if digits.len() > scalar_len {
            return None;
        }
        fixed.resize(fixed.len() + scalar_len - digits.len(), 0);
        fixed.extend_from_slice(digits);
    }
    Some(fixed)
}

/// Re-encode fixed-width `r || s` as `SEQUENCE { r INTEGER, s INTEGER }`
fn fixed_to_asn1(fixed: &[u8]) -> Option<Vec<u8>> {
    let (r, s) = fixed.split_at(fixed.len() / 2);
    [UintRef::new(r).ok()?, UintRef::new(s).ok()?].to_der().ok()
}

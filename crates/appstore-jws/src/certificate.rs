//! Leaf certificate extraction from the `x5c` header chain
//!
//! The public key is read from the leaf certificate only. The chain is not
//! validated against a root of trust.

use crate::error::{Error, Result};
use crate::header::DecodedHeader;
use crate::key::{EcdsaCurve, PublicKey};
use crate::limits::MAX_CERTIFICATE_SIZE;
use base64::{Engine, engine::general_purpose::STANDARD};
use der::{Decode, Encode};
use spki::{ObjectIdentifier, SubjectPublicKeyInfoOwned};
use x509_cert::Certificate;

const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
const SECP256R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
const SECP384R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");
const SECP521R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");
const RSA_ENCRYPTION_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Known OIDs, only used to make error messages readable
const KNOWN_OIDS: &[(ObjectIdentifier, &str)] = &[
    (ObjectIdentifier::new_unwrap("1.3.101.112"), "Ed25519"),
    (ObjectIdentifier::new_unwrap("1.3.101.113"), "Ed448"),
    (ObjectIdentifier::new_unwrap("1.2.840.10040.4.1"), "DSA"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.10"), "RSASSA-PSS"),
    (ObjectIdentifier::new_unwrap("1.3.132.0.10"), "secp256k1"),
];

fn describe(oid: &ObjectIdentifier) -> String {
    KNOWN_OIDS
        .iter()
        .find(|(known, _)| known == oid)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| oid.to_string())
}

/// Extract the public key of the leaf certificate in the header chain
pub(crate) fn leaf_public_key(header: &DecodedHeader) -> Result<PublicKey> {
    let encoded = header.leaf_certificate().ok_or(Error::NoCertificate)?;

    if encoded.len() / 4 * 3 > MAX_CERTIFICATE_SIZE {
        return Err(Error::InvalidCertificate(format!(
            "certificate too large: {} characters (max decoded: {} bytes)",
            encoded.len(),
            MAX_CERTIFICATE_SIZE
        )));
    }

    let der = STANDARD
        .decode(encoded)
        .map_err(|e| Error::InvalidCertificate(format!("Base64 decode failed: {e}")))?;

    let certificate = Certificate::from_der(&der)
        .map_err(|e| Error::InvalidCertificate(format!("DER parse failed: {e}")))?;

    public_key_from_spki(&certificate.tbs_certificate.subject_public_key_info)
}

/// Map a SubjectPublicKeyInfo onto a supported key type
fn public_key_from_spki(spki: &SubjectPublicKeyInfoOwned) -> Result<PublicKey> {
    let algorithm = spki.algorithm.oid;

    if algorithm == EC_PUBLIC_KEY_OID {
        let curve = match named_curve(spki)? {
            oid if oid == SECP256R1_OID => EcdsaCurve::P256,
            oid if oid == SECP384R1_OID => EcdsaCurve::P384,
            oid if oid == SECP521R1_OID => EcdsaCurve::P521,
            oid => {
                return Err(Error::InvalidCertificate(format!(
                    "unsupported elliptic curve {}",
                    describe(&oid)
                )));
            }
        };
        Ok(PublicKey::Ecdsa {
            curve,
            point: subject_key_bytes(spki)?,
        })
    } else if algorithm == RSA_ENCRYPTION_OID {
        Ok(PublicKey::Rsa(subject_key_bytes(spki)?))
    } else {
        Err(Error::UnsupportedKeyAlgorithm(describe(&algorithm)))
    }
}

/// The namedCurve parameter of an EC key
fn named_curve(spki: &SubjectPublicKeyInfoOwned) -> Result<ObjectIdentifier> {
    let parameters = spki
        .algorithm
        .parameters
        .as_ref()
        .ok_or_else(|| Error::InvalidCertificate("EC key without curve parameters".into()))?;

    parameters
        .to_der()
        .and_then(|encoded| ObjectIdentifier::from_der(&encoded))
        .map_err(|e| Error::InvalidCertificate(format!("EC key without named curve: {e}")))
}

fn subject_key_bytes(spki: &SubjectPublicKeyInfoOwned) -> Result<Vec<u8>> {
    spki.subject_public_key
        .as_bytes()
        .map(<[u8]>::to_vec)
        .ok_or_else(|| Error::InvalidCertificate("public key is not octet aligned".into()))
}

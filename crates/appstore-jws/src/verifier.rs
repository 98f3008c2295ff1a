use crate::algorithm::AlgorithmType;
use crate::certificate::leaf_public_key;
use crate::error::{Error, Result};
use crate::header::DecodedHeader;
use crate::limits::{
    MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_DECODED_SIGNATURE_SIZE,
    MAX_TOKEN_LENGTH,
};
use crate::utils::base64url;
use serde::de::DeserializeOwned;

/// The three segments of a compact token, still Base64URL encoded
struct TokenParts<'a> {
    /// `header.payload`, exactly as received
    signing_input: &'a str,
    header: &'a str,
    payload: &'a str,
    signature: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Validate token length and split into exactly three non-empty segments
    fn split(token: &'a str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let mut parts = token.split('.');
        let header = parts.next().ok_or(Error::MalformedToken)?;
        let payload = parts.next().ok_or(Error::MalformedToken)?;
        let signature = parts.next().ok_or(Error::MalformedToken)?;
        if parts.next().is_some() {
            return Err(Error::MalformedToken);
        }
        if header.is_empty() || payload.is_empty() || signature.is_empty() {
            return Err(Error::MalformedToken);
        }

        // The signature is the last segment, so the signed bytes are
        // everything before the final '.'
        let signing_input = &token[..header.len() + 1 + payload.len()];

        Ok(Self {
            signing_input,
            header,
            payload,
            signature,
        })
    }

    fn decode_header(&self) -> Result<DecodedHeader> {
        let header_json = base64url::decode_bytes(self.header, MAX_DECODED_HEADER_SIZE)
            .map_err(Error::MalformedHeader)?;

        serde_json::from_slice(&header_json)
            .map_err(|e| Error::MalformedHeader(format!("Failed to parse header: {e}")))
    }

    fn decode_signature(&self) -> Result<Vec<u8>> {
        base64url::decode_bytes(self.signature, MAX_DECODED_SIGNATURE_SIZE)
            .map_err(Error::MalformedSignature)
    }

    fn decode_payload<T: DeserializeOwned>(&self) -> Result<T> {
        let payload_json = base64url::decode_bytes(self.payload, MAX_DECODED_PAYLOAD_SIZE)
            .map_err(Error::PayloadParseError)?;

        serde_json::from_slice(&payload_json)
            .map_err(|e| Error::PayloadParseError(format!("Failed to parse payload: {e}")))
    }
}

/// Verify a signed token and decode its payload
///
/// The token is checked against the public key of the leaf certificate in
/// its own `x5c` header. The payload is only decoded once the signature has
/// verified, so a value of `T` always comes from authenticated bytes.
///
/// The leaf key is extracted before the header `alg` is looked at, so an
/// unsupported key type is reported as such whatever algorithm it claims.
///
/// # Errors
/// Returns the first failing step: [`Error::MalformedToken`],
/// [`Error::MalformedHeader`] for an undecodable header,
/// [`Error::NoCertificate`], [`Error::InvalidCertificate`],
/// [`Error::UnsupportedKeyAlgorithm`], [`Error::MalformedHeader`] for an
/// unknown `alg`, [`Error::AlgorithmMismatch`], [`Error::MalformedSignature`],
/// [`Error::SignatureInvalid`] or [`Error::PayloadParseError`].
pub fn verify<T: DeserializeOwned>(token: &str) -> Result<T> {
    let parts = TokenParts::split(token)?;

    let header = parts.decode_header()?;
    let key = leaf_public_key(&header)?;

    let algorithm = AlgorithmType::from_str(&header.algorithm)?;
    algorithm.ensure_matches(&key)?;

    let signature = parts.decode_signature()?;
    key.verify(parts.signing_input.as_bytes(), &signature)?;

    parts.decode_payload()
}

/// Decode the header of a signed token without verifying it
///
/// Useful for logging which certificate chain a rejected token carried. The
/// payload stays inaccessible.
pub fn decode_header(token: &str) -> Result<DecodedHeader> {
    TokenParts::split(token)?.decode_header()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

    #[test]
    fn test_split_segments() {
        let parts = TokenParts::split("aGVhZGVy.cGF5bG9hZA.c2ln").unwrap();
        assert_eq!(parts.signing_input, "aGVhZGVy.cGF5bG9hZA");
        assert_eq!(parts.header, "aGVhZGVy");
        assert_eq!(parts.payload, "cGF5bG9hZA");
        assert_eq!(parts.signature, "c2ln");
    }

    #[test]
    fn test_split_wrong_segment_count() {
        for token in ["", "a", "a.b", "a.b.c.d", "a.b.c.d.e", "...", "a..c", ".b.c", "a.b."] {
            assert!(
                matches!(TokenParts::split(token), Err(Error::MalformedToken)),
                "{token:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_split_too_large() {
        let token = "a".repeat(MAX_TOKEN_LENGTH + 1);
        assert!(matches!(
            TokenParts::split(&token),
            Err(Error::TokenTooLarge { size, max }) if size > max
        ));
    }

    #[test]
    fn test_header_not_base64() {
        let result = verify::<serde_json::Value>("!!!.cGF5bG9hZA.c2ln");
        assert!(matches!(result, Err(Error::MalformedHeader(_))));
    }

    #[test]
    fn test_header_not_json() {
        // "header" is valid Base64URL but not JSON
        let result = verify::<serde_json::Value>("aGVhZGVy.cGF5bG9hZA.c2ln");
        assert!(matches!(result, Err(Error::MalformedHeader(msg)) if msg.contains("parse header")));
    }

    #[test]
    fn test_header_without_certificate() {
        // {"alg":"ES256","x5c":[]}
        let result = verify::<serde_json::Value>("eyJhbGciOiJFUzI1NiIsIng1YyI6W119.e30.c2ln");
        assert_eq!(result, Err(Error::NoCertificate));
    }

    fn header_segment(alg: &str) -> String {
        let certificate = STANDARD.encode(include_bytes!("../tests/fixtures/ec_p256.cert.der"));
        let header = serde_json::json!({"alg": alg, "x5c": [certificate]});
        URL_SAFE_NO_PAD.encode(header.to_string())
    }

    #[test]
    fn test_header_alg_none() {
        let token = format!("{}.e30.c2ln", header_segment("none"));
        let result = verify::<serde_json::Value>(&token);
        assert!(matches!(result, Err(Error::MalformedHeader(msg)) if msg.contains("none")));
    }

    #[test]
    fn test_header_alg_none_without_certificate() {
        // {"alg":"none"}
        let result = verify::<serde_json::Value>("eyJhbGciOiJub25lIn0.e30.c2ln");
        assert_eq!(result, Err(Error::NoCertificate));
    }

    #[test]
    fn test_header_alg_unknown() {
        let token = format!("{}.e30.c2ln", header_segment("HS256"));
        let result = verify::<serde_json::Value>(&token);
        assert!(matches!(result, Err(Error::MalformedHeader(msg)) if msg.contains("HS256")));
    }

    #[test]
    fn test_decode_header() {
        let header = decode_header("eyJhbGciOiJFUzI1NiIsIng1YyI6W119.e30.c2ln").unwrap();
        assert_eq!(header.algorithm, "ES256");
        assert!(header.certificate_chain.is_empty());
    }
}

//! Algorithm identifiers accepted in the JWS header
use crate::error::{Error, Result};
use crate::key::PublicKey;
use crate::limits::MAX_ALG_LENGTH;

/// Algorithm identifier from the JWS header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmType {
    ES256,
    RS256,
}

impl AlgorithmType {
    pub(crate) fn from_str(s: &str) -> Result<Self> {
        if s.len() > MAX_ALG_LENGTH {
            return Err(Error::MalformedHeader(format!(
                "Algorithm string too long: {} bytes (maximum: {} bytes)",
                s.len(),
                MAX_ALG_LENGTH
            )));
        }

        match s {
            "ES256" => Ok(AlgorithmType::ES256),
            "RS256" => Ok(AlgorithmType::RS256),
            "none" => Err(Error::MalformedHeader(
                "the 'none' algorithm is rejected".into(),
            )),
            _ => Err(Error::MalformedHeader(format!(
                "unsupported algorithm '{s}'"
            ))),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmType::ES256 => "ES256",
            AlgorithmType::RS256 => "RS256",
        }
    }

    /// Reject a header algorithm that names the other key family
    pub(crate) fn ensure_matches(&self, key: &PublicKey) -> Result<()> {
        match (self, key) {
            (AlgorithmType::ES256, PublicKey::Ecdsa { .. })
            | (AlgorithmType::RS256, PublicKey::Rsa(_)) => Ok(()),
            _ => Err(Error::AlgorithmMismatch {
                header: self.to_string(),
                key: key.family().to_string(),
            }),
        }
    }
}

impl std::fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for AlgorithmType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

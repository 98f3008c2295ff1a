use crate::error::Result;
use crate::header::DecodedHeader;
use crate::verifier;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A signed token whose verified payload decodes to `T`
///
/// Serializes as the bare token string, so it can stand in for any
/// `signedTransactionInfo`-style field of an API response. The payload is
/// only reachable through [`Signed::verify`].
pub struct Signed<T> {
    token: String,
    payload: PhantomData<fn() -> T>,
}

impl<T> Signed<T> {
    /// Wrap a token string without inspecting it
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            payload: PhantomData,
        }
    }

    /// The token as received
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Unwrap the token string
    pub fn into_inner(self) -> String {
        self.token
    }

    /// Decode the unverified header
    pub fn header(&self) -> Result<DecodedHeader> {
        verifier::decode_header(&self.token)
    }
}

impl<T: DeserializeOwned> Signed<T> {
    /// Verify the signature and decode the payload
    pub fn verify(&self) -> Result<T> {
        verifier::verify(&self.token)
    }
}

impl<T> Clone for Signed<T> {
    fn clone(&self) -> Self {
        Self::new(self.token.clone())
    }
}

impl<T> PartialEq for Signed<T> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl<T> Eq for Signed<T> {}

impl<T> fmt::Debug for Signed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signed").field(&self.token).finish()
    }
}

impl<T> fmt::Display for Signed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

impl<T> From<String> for Signed<T> {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl<T> From<&str> for Signed<T> {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl<T> Serialize for Signed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.token)
    }
}

impl<'de, T> Deserialize<'de> for Signed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

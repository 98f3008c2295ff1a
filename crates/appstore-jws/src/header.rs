use serde::Deserialize;

/// Decoded JWS header
///
/// Carries the signing algorithm and the certificate chain, leaf first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DecodedHeader {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Base64 (standard alphabet) DER certificates
    #[serde(rename = "x5c", default)]
    pub certificate_chain: Vec<String>,
}

impl DecodedHeader {
    /// The certificate whose key signed the token
    pub fn leaf_certificate(&self) -> Option<&str> {
        self.certificate_chain.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_parses_alg_and_chain() {
        let header: DecodedHeader =
            serde_json::from_str(r#"{"alg":"ES256","x5c":["leaf","intermediate","root"]}"#)
                .unwrap();
        assert_eq!(header.algorithm, "ES256");
        assert_eq!(header.certificate_chain.len(), 3);
        assert_eq!(header.leaf_certificate(), Some("leaf"));
    }

    #[test]
    fn test_header_without_chain() {
        let header: DecodedHeader = serde_json::from_str(r#"{"alg":"ES256"}"#).unwrap();
        assert!(header.certificate_chain.is_empty());
        assert_eq!(header.leaf_certificate(), None);
    }

    #[test]
    fn test_header_missing_alg() {
        let result = serde_json::from_str::<DecodedHeader>(r#"{"x5c":[]}"#);
        assert!(result.is_err());
    }
}

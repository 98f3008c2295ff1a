//! Bounded decoding of unpadded Base64URL token segments
//!
//! Errors are plain messages; each caller files them under the segment it
//! was decoding.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Decode one segment, refusing anything that would exceed `max_size` bytes
pub(crate) fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>, String> {
    // Reject oversized input before allocating: 4 chars encode 3 bytes
    if input.len() / 4 * 3 > max_size {
        return Err(format!(
            "Encoded size exceeds limit: {} characters (max decoded: {} bytes)",
            input.len(),
            max_size
        ));
    }

    let result = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| format!("Base64URL decode failed: {e}"))?;

    if result.len() > max_size {
        return Err(format!(
            "Decoded size exceeds limit: {} bytes (max: {})",
            result.len(),
            max_size
        ));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_other_alphabets() {
        assert!(decode_bytes("!!!", 1000).is_err());
        // Padding is not part of compact serialization
        assert!(decode_bytes("SGVsbG8=", 1000).is_err());
        // '+' and '/' belong to the standard alphabet only
        assert!(decode_bytes("ab+/", 1000).is_err());
    }

    #[test]
    fn test_limit_is_inclusive() {
        // "e30" is "{}"
        assert_eq!(decode_bytes("e30", 2).unwrap(), b"{}");
        assert!(decode_bytes("e30", 1).is_err());
    }

    #[test]
    fn test_decode_oversized_input_rejected_early() {
        let input = "A".repeat(4096);
        let err = decode_bytes(&input, 16).unwrap_err();
        assert!(err.contains("Encoded size exceeds limit"));
    }

    #[test]
    fn test_empty_segment_decodes_to_nothing() {
        assert!(decode_bytes("", 1000).unwrap().is_empty());
    }
}

//! Base64URL segment encoding per RFC 4648 §5
//!
//! Segments are written without `=` padding. On input the padding is restored
//! to the next multiple of four before decoding, so both padded and unpadded
//! segments are accepted. Non-canonical trailing bits are rejected, which keeps
//! every valid segment to exactly one byte sequence.

use crate::error::{Error, Result};
use base64::{Engine, engine::general_purpose::URL_SAFE};

/// Encode bytes as an unpadded Base64URL segment
pub fn encode(input: impl AsRef<[u8]>) -> String {
    let mut encoded = URL_SAFE.encode(input);
    let unpadded = encoded.trim_end_matches('=').len();
    encoded.truncate(unpadded);
    encoded
}

/// Decode a Base64URL segment, padded or not
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let missing = (4 - input.len() % 4) % 4;

    let mut padded = String::with_capacity(input.len() + missing);
    padded.push_str(input);
    padded.extend(std::iter::repeat('=').take(missing));

    URL_SAFE
        .decode(padded)
        .map_err(|e| Error::malformed(format!("Base64URL decoding failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg");
        assert_eq!(encode(b"fo"), "Zm8");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foob"), "Zm9vYg");
        assert_eq!(encode(b"fooba"), "Zm9vYmE");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
        assert_eq!(encode(r#"{"typ":"h256only"}"#), "eyJ0eXAiOiJoMjU2b25seSJ9");
    }

    #[test]
    fn test_decode_restores_padding() {
        assert_eq!(decode("Zg").unwrap(), b"f");
        assert_eq!(decode("Zm8").unwrap(), b"fo");
        assert_eq!(decode("Zm9v").unwrap(), b"foo");

        // Already padded input is accepted as well
        assert_eq!(decode("Zg==").unwrap(), b"f");
        assert_eq!(decode("Zm8=").unwrap(), b"fo");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_invalid() {
        assert!(matches!(decode("!!!"), Err(Error::Malformed(_))));
        // A single dangling character can never be valid
        assert!(matches!(decode("A"), Err(Error::Malformed(_))));
        assert!(matches!(decode("Zm9vY"), Err(Error::Malformed(_))));
        // Standard alphabet is not accepted
        assert!(matches!(decode("+/8"), Err(Error::Malformed(_))));
        assert!(matches!(decode("Zm 9v"), Err(Error::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_non_canonical_trailing_bits() {
        // "Zg" and "Zh" would both map to b"f" if trailing bits were ignored
        assert!(decode("Zg").is_ok());
        assert!(matches!(decode("Zh"), Err(Error::Malformed(_))));
    }

    #[test]
    fn test_url_safe_characters() {
        let encoded = encode([0xfb, 0xff, 0xfe]);
        assert_eq!(encoded, "-__-");
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }

    proptest! {
        #[test]
        fn prop_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let encoded = encode(&bytes);
            prop_assert!(!encoded.contains('='));
            prop_assert_eq!(decode(&encoded).unwrap(), bytes);
        }
    }
}

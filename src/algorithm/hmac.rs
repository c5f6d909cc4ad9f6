//! HMAC-SHA-256, the only signing algorithm
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign `signing_input` and return the Base64URL-encoded signature segment
///
/// Deterministic: the same input and key always produce the same segment.
/// No attempt is made to parse or validate `signing_input`.
pub fn sign(signing_input: &str, key: &Key) -> String {
    base64url::encode(digest(signing_input, key))
}

/// Verify that `signature` is the signature of `signing_input` under `key`
///
/// Only the signature is checked; whether `signing_input` is a well-formed,
/// unexpired token is the parser's business. Every mismatch is reported as
/// [`Error::SignatureInvalid`], with no indication of where it differed.
pub fn verify(signing_input: &str, signature: &str, key: &Key) -> Result<()> {
    let provided_signature = base64url::decode(signature)?;
    let expected_signature = digest(signing_input, key);

    if provided_signature.len() != expected_signature.len() {
        return Err(Error::SignatureInvalid);
    }

    if constant_time_eq(&provided_signature, &expected_signature) {
        Ok(())
    } else {
        Err(Error::SignatureInvalid)
    }
}

fn digest(signing_input: &str, key: &Key) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(signing_input.as_bytes());

    let mut digest = [0u8; 32];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    digest
}

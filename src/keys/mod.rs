//! The signing key
//!
//! A [`Key`] always holds exactly [`KEY_LENGTH`] bytes. Every signing and
//! verification function takes `&Key`, so "no key" cannot be expressed and
//! "wrong size" is rejected once, where the key is built.
use crate::error::{Error, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key length in bytes (256 bits)
pub const KEY_LENGTH: usize = 32;

/// A 256-bit HMAC-SHA-256 key
///
/// The bytes are wiped when the key is dropped and never appear in `Debug`
/// output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bytes: [u8; KEY_LENGTH],
}

impl Key {
    /// Create a key from raw bytes
    ///
    /// Fails unless `bytes` is exactly 32 bytes long and not all zeros.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LENGTH] = bytes.try_into().map_err(|_| {
            Error::InvalidKey(format!(
                "expected {KEY_LENGTH} bytes, got {}",
                bytes.len()
            ))
        })?;
        Self::try_from(bytes)
    }

    /// Create a key from its 64-character hex encoding
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let mut bytes = [0u8; KEY_LENGTH];
        hex::decode_to_slice(encoded.trim(), &mut bytes)
            .map_err(|e| Error::InvalidKey(format!("invalid hex key: {e}")))?;
        let key = Self::try_from(bytes);
        bytes.zeroize();
        key
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.bytes
    }
}

impl TryFrom<[u8; KEY_LENGTH]> for Key {
    type Error = Error;

    fn try_from(bytes: [u8; KEY_LENGTH]) -> Result<Self> {
        // An all-zero key is almost certainly an uninitialised buffer
        if bytes.iter().fold(0u8, |acc, b| acc | b) == 0 {
            return Err(Error::InvalidKey("key is all zeros".into()));
        }
        Ok(Self { bytes })
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key").field("bytes", &"<redacted>").finish()
    }
}

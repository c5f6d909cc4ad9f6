//! The signing algorithm
//!
//! There is exactly one: HMAC-SHA-256 keyed with a 256-bit [`Key`](crate::Key).
//! Tokens never name it, so there is nothing to negotiate and nothing to
//! confuse it with.

pub mod hmac;

pub use hmac::{sign, verify};

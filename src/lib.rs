//! # h256only - Signed Tokens With Exactly One Algorithm
//!
//! > Compact, signed, three-segment bearer tokens using HMAC-SHA-256 and nothing else.
//!
//! **h256only** keeps the useful part of JWT (sharable, signed, self-describing
//! claims) and removes algorithm agility. There is one algorithm, HMAC-SHA-256
//! with a 256-bit key, and a token that names any algorithm at all is rejected.
//!
//! ## Overview
//!
//! A token is three Base64URL segments joined with `.`:
//!
//! ```text
//! b64url(JSON(header)) . b64url(JSON(claims)) . b64url(HMAC-SHA-256(key, first two segments))
//! ```
//!
//! The header is always `{"typ":"h256only"}`. Padding is stripped on output and
//! restored on input. Map keys serialize in sorted order and struct fields in
//! declaration order, so the same claims always produce the same token.
//!
//! ## Quick Start
//!
//! ```ignore
//! use h256only::{Key, MapClaims, Token};
//! use serde_json::json;
//!
//! let key = Key::from_hex("6368616e676520746869732070617373776f726420746f206120736563726574")?;
//!
//! let mut claims = MapClaims::new();
//! claims.insert("sub".into(), json!("user123"));
//! claims.insert("exp".into(), json!(h256only::current_timestamp() + 3600));
//!
//! let token = Token::new_with_claims(claims).signed_string(&key)?;
//!
//! let parsed = h256only::parse(&token, &key)?;
//! assert_eq!(parsed.claims().get("sub"), Some(&json!("user123")));
//! ```
//!
//! ## Validation Flow
//!
//! [`parse`] and [`parse_with_claims`] run every check, in this order, and stop
//! at the first failure:
//!
//! 1. Length limit and exactly three segments ([`Error::Malformed`])
//! 2. Header and claims decode to JSON ([`Error::Malformed`], or
//!    [`Error::CallerMistake`] for a pasted `Authorization: Bearer …` value)
//! 3. Signature ([`Error::SignatureInvalid`])
//! 4. No `alg` in the header ([`Error::UnsupportedAlgorithm`])
//! 5. `typ` is `h256only` ([`Error::UnknownType`])
//! 6. Claims are valid now ([`Error::Expired`], [`Error::UsedBeforeIssued`],
//!    [`Error::NotYetValid`])
//!
//! Use a [`Parser`] to pin the validation clock or change the size limit.
//!
//! ## Claims
//!
//! Claims are anything implementing [`Claims`]:
//!
//! - [`MapClaims`]: an open JSON object, the default
//! - [`StandardClaims`]: the registered claims (`aud`, `exp`, `jti`, `iat`,
//!   `iss`, `nbf`, `sub`) as a struct
//! - your own struct with [`#[claims]`](macro@claims), which embeds
//!   [`StandardClaims`] next to your fields
//!
//! ```ignore
//! use h256only::claims;
//!
//! #[claims]
//! struct Session {
//!     pub role: String,
//! }
//!
//! let token = h256only::parse_with_claims::<Session>(&token_str, &key)?;
//! println!("{} expires at {:?}", token.claims().role, token.claims().standard.expires_at);
//! ```
//!
//! `exp`, `nbf` and `iat` may be integers, floats or long decimals; each is
//! compared as whole seconds. No clock skew is applied.
//!
//! ## Security
//!
//! ### No Algorithm Negotiation
//!
//! The header never selects the algorithm. A header with an `alg` field, whatever
//! its value, is rejected.
//!
//! ### Keys
//!
//! A [`Key`] is exactly 32 bytes and never all zeros. Key bytes are wiped on drop
//! and never printed or logged.
//!
//! ### Timing Attack Protection
//!
//! Signature comparison uses the [`constant_time_eq`](https://crates.io/crates/constant_time_eq)
//! crate.
//!
//! ## References
//!
//! - [RFC 4648 §5](https://datatracker.ietf.org/doc/html/rfc4648#section-5): Base64URL
//! - [RFC 2104](https://datatracker.ietf.org/doc/html/rfc2104): HMAC
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT), for the registered claim names

// Lets `#[claims]` output, which names `::h256only`, resolve inside this crate
extern crate self as h256only;

// Core modules
pub mod error;
pub mod limits;
pub mod utils;

// Signing
pub mod algorithm;
pub mod keys;

// Claims and validation
pub mod claims;

// Token types
pub mod token;

// Parser (main public API)
pub mod parser;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use parser::{Parser, parse, parse_with_claims};
pub use token::{Header, TOKEN_TYPE, Token};

pub use algorithm::{sign, verify};
pub use claims::{Claims, MapClaims, NumericDate, StandardClaims, current_timestamp};
pub use error::{Error, Result};
pub use keys::{KEY_LENGTH, Key};

pub use h256only_derive::claims;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

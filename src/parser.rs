//! Token parsing and verification
//!
//! [`Parser`] turns a token string back into a [`Token`], running every check
//! on the way. Parsing is all-or-nothing: either every check passes and the
//! token is returned, or the first failing check is reported as the error.
//!
//! Checks run in a fixed order:
//!
//! ```text
//! length ≤ max_token_length          Malformed
//!     │
//! exactly three segments             Malformed
//!     │
//! header: Base64URL JSON object      Malformed / CallerMistake ("Bearer …")
//!     │
//! claims: Base64URL JSON as C        Malformed
//!     │
//! HMAC-SHA-256 signature             SignatureInvalid
//!     │
//! no `alg` in header                 UnsupportedAlgorithm
//!     │
//! `typ` == "h256only"                UnknownType
//!     │
//! claims.valid(now)                  Expired / UsedBeforeIssued / NotYetValid / …
//!     ▼
//! Token
//! ```
//!
//! The signature is checked before the header fields and the claims are
//! inspected, so no semantic check ever runs on unauthenticated input.

use crate::algorithm::hmac;
use crate::claims::{Claims, MapClaims, current_timestamp};
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::limits::MAX_TOKEN_LENGTH;
use crate::token::{Header, TOKEN_TYPE, Token};
use crate::utils::base64url;
use tracing::{debug, trace};

/// Token parser configuration
///
/// The defaults suit almost everyone; [`parse`] and [`parse_with_claims`] use
/// them. Build a `Parser` to pin the validation clock or change the input
/// size limit.
///
/// # Examples
///
/// ```ignore
/// use h256only::{Key, Parser, StandardClaims};
///
/// let parser = Parser::new().at_time(1_444_478_400);
/// let token = parser.parse_with_claims::<StandardClaims>(&token_str, &key)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_token_length: usize,
    time: Option<i64>,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            max_token_length: MAX_TOKEN_LENGTH,
            time: None,
        }
    }
}

impl Parser {
    /// Create a parser with the default limit and the system clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject token strings longer than `length` bytes
    pub fn max_token_length(mut self, length: usize) -> Self {
        self.max_token_length = length;
        self
    }

    /// Validate claims at a fixed Unix time instead of the system clock
    pub fn at_time(mut self, now: i64) -> Self {
        self.time = Some(now);
        self
    }

    /// Parse and verify a token carrying [`MapClaims`]
    pub fn parse(&self, token: &str, key: &Key) -> Result<Token<MapClaims>> {
        self.parse_with_claims(token, key)
    }

    /// Parse and verify a token, decoding its claims as `C`
    pub fn parse_with_claims<C: Claims>(&self, token: &str, key: &Key) -> Result<Token<C>> {
        match self.verify(token, key) {
            Ok(parsed) => {
                trace!(token_len = token.len(), "token accepted");
                Ok(parsed)
            }
            Err(err) => {
                debug!(error = err.kind(), token_len = token.len(), "token rejected");
                Err(err)
            }
        }
    }

    fn verify<C: Claims>(&self, token: &str, key: &Key) -> Result<Token<C>> {
        if token.len() > self.max_token_length {
            return Err(Error::malformed(format!(
                "token is {} bytes, the limit is {}",
                token.len(),
                self.max_token_length
            )));
        }

        let (header_b64, claims_b64, signature_b64) = split_segments(token)?;

        let header: Header = decode_segment(header_b64, "header").map_err(|err| {
            if has_bearer_prefix(token) {
                Error::CallerMistake
            } else {
                err
            }
        })?;

        let claims: C = decode_segment(claims_b64, "claims")?;

        let signing_input = &token[..header_b64.len() + 1 + claims_b64.len()];
        trace!(
            header_len = header_b64.len(),
            claims_len = claims_b64.len(),
            signature_len = signature_b64.len(),
            "verifying signature"
        );
        hmac::verify(signing_input, signature_b64, key)?;

        if header.has_algorithm() {
            return Err(Error::UnsupportedAlgorithm);
        }

        match header.token_type() {
            Some(TOKEN_TYPE) => {}
            other => {
                return Err(Error::UnknownType {
                    found: match other {
                        Some(typ) => Some(typ.to_string()),
                        None => header.get("typ").map(|value| value.to_string()),
                    },
                })
            }
        }

        let now = self.time.unwrap_or_else(current_timestamp);
        claims.valid(now)?;

        Ok(Token::from_parts(token, header, claims, signature_b64))
    }
}

/// Parse and verify a token with the default [`Parser`]
pub fn parse(token: &str, key: &Key) -> Result<Token<MapClaims>> {
    Parser::default().parse(token, key)
}

/// Parse and verify a token with the default [`Parser`], decoding its claims as `C`
pub fn parse_with_claims<C: Claims>(token: &str, key: &Key) -> Result<Token<C>> {
    Parser::default().parse_with_claims(token, key)
}

fn split_segments(token: &str) -> Result<(&str, &str, &str)> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(claims), Some(signature), None) => Ok((header, claims, signature)),
        _ => Err(Error::malformed(format!(
            "token contains {} segments, expected 3",
            token.split('.').count()
        ))),
    }
}

fn decode_segment<T: serde::de::DeserializeOwned>(segment: &str, what: &str) -> Result<T> {
    let json = base64url::decode(segment)?;
    serde_json::from_slice(&json)
        .map_err(|e| Error::malformed(format!("Failed to parse {what}: {e}")))
}

fn has_bearer_prefix(token: &str) -> bool {
    token
        .get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("bearer "))
}

//! Error types for token signing and verification
//!
//! Every fallible operation in this crate returns exactly one [`Error`]. The
//! variants are flat: callers `match` on the kinds they care about and treat
//! the rest as "token rejected".

use thiserror::Error;

/// h256only errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    /// Wrong segment count, bad Base64URL, or a segment that is not the expected JSON
    #[error("Malformed token: {0}")]
    Malformed(String),

    /// The caller passed an `Authorization` header value instead of the bare token
    #[error("Token string should not contain 'bearer '")]
    CallerMistake,

    // ============================================================================
    // Header Errors
    // ============================================================================
    /// The header names an algorithm; there is only one and it is implicit
    #[error("'alg' parameter is illegal; there is only one supported algorithm")]
    UnsupportedAlgorithm,

    /// The header `typ` is missing or is not `h256only`
    #[error("Unknown token type: {}", .found.as_deref().unwrap_or("<missing>"))]
    UnknownType { found: Option<String> },

    // ============================================================================
    // Claims Errors
    // ============================================================================
    #[error("Token is expired")]
    Expired,

    #[error("Token is not valid yet")]
    NotYetValid,

    #[error("Token used before issued")]
    UsedBeforeIssued,

    /// Rejection reported by a caller-defined claims type
    #[error("Token claim validation failed: {0}")]
    InvalidClaim(String),

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Invalid signature")]
    SignatureInvalid,

    // ============================================================================
    // Signing Errors
    // ============================================================================
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Key is invalid: {0}")]
    InvalidKey(String),
}

impl Error {
    /// Whether the token was rejected by claims validation rather than by
    /// its structure or signature
    pub fn is_claims_error(&self) -> bool {
        matches!(
            self,
            Error::Expired | Error::NotYetValid | Error::UsedBeforeIssued | Error::InvalidClaim(_)
        )
    }

    /// Short, stable name of the variant, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Malformed(_) => "malformed",
            Error::CallerMistake => "caller_mistake",
            Error::UnsupportedAlgorithm => "unsupported_algorithm",
            Error::UnknownType { .. } => "unknown_type",
            Error::Expired => "expired",
            Error::NotYetValid => "not_yet_valid",
            Error::UsedBeforeIssued => "used_before_issued",
            Error::InvalidClaim(_) => "invalid_claim",
            Error::SignatureInvalid => "signature_invalid",
            Error::Serialization(_) => "serialization",
            Error::InvalidKey(_) => "invalid_key",
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Error::Malformed(msg.into())
    }
}

/// Result type alias for h256only operations
pub type Result<T> = std::result::Result<T, Error>;

//! The registered claims as a struct
use crate::claims::validator::{self, Timestamp};
use crate::claims::{Claims, NumericDate};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The registered claim names, all optional
///
/// Unset fields are left out of the JSON. Fields serialize in declaration
/// order, so `{exp, iss}` always encodes as `{"exp":…,"iss":…}`. Embed it with
/// `#[serde(flatten)]` (or use [`#[claims]`](macro@crate::claims)) to add
/// private claims next to the registered ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardClaims {
    /// Audience (aud)
    #[serde(rename = "aud", default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// Expiration Time (exp)
    #[serde(rename = "exp", default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NumericDate>,
    /// JWT ID (jti)
    #[serde(rename = "jti", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Issued At (iat)
    #[serde(rename = "iat", default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<NumericDate>,
    /// Issuer (iss)
    #[serde(rename = "iss", default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Not Before (nbf)
    #[serde(rename = "nbf", default, skip_serializing_if = "Option::is_none")]
    pub not_before: Option<NumericDate>,
    /// Subject (sub)
    #[serde(rename = "sub", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl StandardClaims {
    /// Compare the `aud` claim against `expected`
    ///
    /// If `required` is false, an unset claim passes.
    pub fn verify_audience(&self, expected: &str, required: bool) -> bool {
        verify_string(self.audience.as_deref(), expected, required)
    }

    /// Compare the `iss` claim against `expected`
    ///
    /// If `required` is false, an unset claim passes.
    pub fn verify_issuer(&self, expected: &str, required: bool) -> bool {
        verify_string(self.issuer.as_deref(), expected, required)
    }

    /// Check `now < exp`
    pub fn verify_expires_at(&self, now: i64, required: bool) -> bool {
        validator::verify_expires_at(Timestamp::from_date(self.expires_at.as_ref()), now, required)
    }

    /// Check `now >= nbf`
    pub fn verify_not_before(&self, now: i64, required: bool) -> bool {
        validator::verify_not_before(Timestamp::from_date(self.not_before.as_ref()), now, required)
    }

    /// Check `iat <= now`
    pub fn verify_issued_at(&self, now: i64, required: bool) -> bool {
        validator::verify_issued_at(Timestamp::from_date(self.issued_at.as_ref()), now, required)
    }
}

impl Claims for StandardClaims {
    fn valid(&self, now: i64) -> Result<()> {
        validator::validate_timestamps(
            Timestamp::from_date(self.expires_at.as_ref()),
            Timestamp::from_date(self.issued_at.as_ref()),
            Timestamp::from_date(self.not_before.as_ref()),
            now,
        )
    }
}

fn verify_string(value: Option<&str>, expected: &str, required: bool) -> bool {
    match value {
        None => !required,
        Some(value) => value == expected,
    }
}

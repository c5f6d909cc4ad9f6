mod map;
mod standard;
mod validator;

pub use map::MapClaims;
pub use standard::StandardClaims;
pub use validator::current_timestamp;

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::str::FromStr;

/// A token payload
///
/// Anything that round-trips through a JSON object and can answer one
/// question: is it valid at `now` (seconds since the Unix epoch)? No clock
/// skew is applied; implementations compare against `now` exactly.
///
/// The crate ships two implementations: [`MapClaims`], an open mapping and the
/// default, and [`StandardClaims`], the registered claims as a struct. The
/// [`#[claims]`](macro@crate::claims) attribute builds a third kind from any struct
/// with named fields.
///
/// # Examples
///
/// A hand-written claims type that embeds the registered claims:
///
/// ```ignore
/// use h256only::{Claims, Error, Result, StandardClaims};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Session {
///     role: String,
///     #[serde(flatten)]
///     standard: StandardClaims,
/// }
///
/// impl Claims for Session {
///     fn valid(&self, now: i64) -> Result<()> {
///         self.standard.valid(now)?;
///         if self.role.is_empty() {
///             return Err(Error::InvalidClaim("empty role".into()));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Claims: Serialize + DeserializeOwned {
    /// Validate the claims at `now`, returning the first failing check
    fn valid(&self, now: i64) -> Result<()>;
}

/// A point in time as a JSON number of seconds since the Unix epoch
///
/// The number is kept exactly as it appeared on the wire (integer, float or
/// long decimal) and only coerced to whole seconds when compared. Values that
/// cannot be expressed as an `i64` are never valid timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericDate(Number);

impl NumericDate {
    /// Create a date from whole seconds since the Unix epoch
    pub fn from_seconds(seconds: i64) -> Self {
        Self(Number::from(seconds))
    }

    /// Whole seconds since the Unix epoch, or `None` if the number does not
    /// fit an `i64`
    pub fn seconds(&self) -> Option<i64> {
        validator::number_to_seconds(&self.0)
    }

    /// The underlying JSON number
    pub fn as_number(&self) -> &Number {
        &self.0
    }
}

impl From<i64> for NumericDate {
    fn from(seconds: i64) -> Self {
        Self::from_seconds(seconds)
    }
}

impl From<Number> for NumericDate {
    fn from(number: Number) -> Self {
        Self(number)
    }
}

impl FromStr for NumericDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Number::from_str(s)
            .map(Self)
            .map_err(|e| Error::Serialization(format!("invalid numeric date '{s}': {e}")))
    }
}

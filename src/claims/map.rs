//! Open-ended claims backed by a JSON object
use crate::claims::validator::{self, Timestamp};
use crate::claims::Claims;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::{Deref, DerefMut};

/// Claims as a JSON object, the default payload of a [`Token`](crate::Token)
///
/// Keys serialize in sorted order. Numbers are kept at full precision, so
/// `exp`, `nbf` and `iat` may arrive as integers, floats or long decimals
/// and still compare the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapClaims(Map<String, Value>);

impl MapClaims {
    /// Create empty claims
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwrap into the underlying JSON object
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Compare the `aud` claim against `expected`
    ///
    /// If `required` is false, an unset claim passes.
    pub fn verify_audience(&self, expected: &str, required: bool) -> bool {
        self.verify_string("aud", expected, required)
    }

    /// Compare the `iss` claim against `expected`
    ///
    /// If `required` is false, an unset claim passes.
    pub fn verify_issuer(&self, expected: &str, required: bool) -> bool {
        self.verify_string("iss", expected, required)
    }

    /// Check `now < exp`
    pub fn verify_expires_at(&self, now: i64, required: bool) -> bool {
        validator::verify_expires_at(self.timestamp("exp"), now, required)
    }

    /// Check `now >= nbf`
    pub fn verify_not_before(&self, now: i64, required: bool) -> bool {
        validator::verify_not_before(self.timestamp("nbf"), now, required)
    }

    /// Check `iat <= now`
    pub fn verify_issued_at(&self, now: i64, required: bool) -> bool {
        validator::verify_issued_at(self.timestamp("iat"), now, required)
    }

    fn timestamp(&self, name: &str) -> Timestamp {
        Timestamp::from_value(self.0.get(name))
    }

    fn verify_string(&self, name: &str, expected: &str, required: bool) -> bool {
        match self.0.get(name) {
            None | Some(Value::Null) => !required,
            Some(Value::String(value)) => value == expected,
            Some(_) => false,
        }
    }
}

impl Claims for MapClaims {
    fn valid(&self, now: i64) -> Result<()> {
        validator::validate_timestamps(
            self.timestamp("exp"),
            self.timestamp("iat"),
            self.timestamp("nbf"),
            now,
        )
    }
}

impl Deref for MapClaims {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MapClaims {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Map<String, Value>> for MapClaims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for MapClaims {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl TryFrom<Value> for MapClaims {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::Serialization(format!(
                "claims must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

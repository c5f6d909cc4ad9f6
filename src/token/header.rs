use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The only token type this crate produces or accepts
pub const TOKEN_TYPE: &str = "h256only";

/// Token header, the first segment
///
/// A JSON object. Tokens built by this crate carry exactly
/// `{"typ":"h256only"}`; there is no `alg` field because there is only one
/// algorithm. Parsed headers are kept whole, unknown fields included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Header(Map<String, Value>);

impl Header {
    /// The signing-path header, `{"typ":"h256only"}`
    pub fn h256only() -> Self {
        let mut fields = Map::new();
        fields.insert("typ".into(), Value::String(TOKEN_TYPE.into()));
        Self(fields)
    }

    /// The `typ` field, if it is a string
    pub fn token_type(&self) -> Option<&str> {
        self.0.get("typ").and_then(Value::as_str)
    }

    /// Whether the header names an algorithm at all, whatever its value
    pub fn has_algorithm(&self) -> bool {
        self.0.contains_key("alg")
    }

    /// Get a header field
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// All header fields
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::h256only()
    }
}

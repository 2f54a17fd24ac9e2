use serde_json::Value;

/// The decoded JOSE header of a token
///
/// A thin wrapper over the header's JSON object. The two registered
/// parameters consumed by this crate have typed accessors; everything else
/// is reachable through [`get`](Header::get).
pub struct Header {
    map: serde_json::Map<String, Value>,
}

impl Header {
    pub(crate) fn new(map: serde_json::Map<String, Value>) -> Self {
        Self { map }
    }

    /// Get the declared algorithm (`alg`), if present and a string
    pub fn algorithm(&self) -> Option<&str> {
        self.map.get("alg").and_then(Value::as_str)
    }

    /// Get the token type (`typ`), if present and a string
    pub fn token_type(&self) -> Option<&str> {
        self.map.get("typ").and_then(Value::as_str)
    }

    /// Get a raw header parameter by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }
}

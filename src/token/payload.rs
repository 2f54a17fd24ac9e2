use std::collections::HashSet;

use serde_json::Value;

/// The decoded payload of a token, with typed accessors for the registered
/// claims
///
/// Extraction never fails: a claim that is missing or of the wrong JSON
/// shape reads as absent (or, for the audience, as the empty set).
/// Strictness — turning a malformed claim into a diagnostic — is the
/// validators' job, not the decoder's.
pub struct Payload {
    map: serde_json::Map<String, Value>,
}

impl Payload {
    pub(crate) fn new(map: serde_json::Map<String, Value>) -> Self {
        Self { map }
    }

    /// Get the issuer (`iss`), if present and a string
    pub fn issuer(&self) -> Option<&str> {
        self.claim_string("iss")
    }

    /// Get the subject (`sub`), if present and a string
    pub fn subject(&self) -> Option<&str> {
        self.claim_string("sub")
    }

    /// Get the JWT identifier (`jti`), if present and a string
    pub fn jwt_identifier(&self) -> Option<&str> {
        self.claim_string("jti")
    }

    /// Get the audience (`aud`) as a set of strings
    ///
    /// The claim may be a single string or an array of strings. Any other
    /// shape — missing, a number, an array containing a non-string — yields
    /// the empty set. A malformed audience is therefore indistinguishable
    /// from an absent one at this layer; the audience validator reports the
    /// difference by looking at the raw claim.
    pub fn audience(&self) -> HashSet<String> {
        match self.map.get("aud") {
            Some(Value::String(s)) => std::iter::once(s.clone()).collect(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| v.as_str().map(String::from))
                .collect::<Option<HashSet<String>>>()
                .unwrap_or_default(),
            _ => HashSet::new(),
        }
    }

    /// Get the expiration time (`exp`) as seconds since the Unix epoch
    pub fn expiration(&self) -> Option<i64> {
        self.claim_timestamp("exp")
    }

    /// Get the not-before time (`nbf`) as seconds since the Unix epoch
    pub fn not_before(&self) -> Option<i64> {
        self.claim_timestamp("nbf")
    }

    /// Get the issued-at time (`iat`) as seconds since the Unix epoch
    pub fn issued_at(&self) -> Option<i64> {
        self.claim_timestamp("iat")
    }

    /// Get a raw claim value by name
    ///
    /// Unlike the typed accessors, this distinguishes a claim that is
    /// entirely absent (`None`) from one that is present with an unexpected
    /// shape.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    fn claim_string(&self, name: &str) -> Option<&str> {
        self.map.get(name).and_then(Value::as_str)
    }

    fn claim_timestamp(&self, name: &str) -> Option<i64> {
        match self.map.get(name)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            _ => None,
        }
    }
}

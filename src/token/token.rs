use crate::error::{Error, Result};
use crate::token::{Header, Payload};
use crate::utils::base64url;

use serde_json::Value;

/// A decoded JWT token
///
/// Decoding is a pure parse: it splits the compact string into three
/// Base64URL segments, JSON-decodes header and payload, and keeps the
/// signature as raw bytes. Nothing is verified at this stage — a decoded
/// token carries no trust until a composed
/// [`Validator`](crate::Validator) has accepted it.
///
/// The token is immutable once decoded. The original header and payload
/// segments are retained so that [`signing_input`](Token::signing_input)
/// always returns the exact bytes that were signed, never a re-serialization
/// of the parsed maps (re-encoding could change byte-for-byte content and
/// invalidate signatures).
///
/// # Example
///
/// ```ignore
/// use jwtval::Token;
///
/// let token = Token::decode("eyJ...")?;
/// println!("issuer: {:?}", token.payload().issuer());
/// ```
pub struct Token {
    header: Header,
    payload: Payload,
    signature: Vec<u8>,
    header_segment: String,
    payload_segment: String,
}

impl Token {
    /// Decode a compact JWT string
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidFormat`] if the input does not split into exactly
    ///   three dot-separated segments
    /// - [`Error::InvalidBase64`] if a segment is not valid unpadded Base64URL
    /// - [`Error::InvalidJson`] if decoded header/payload bytes are not JSON
    /// - [`Error::JsonRootNotAnObject`] if a decoded JSON root is not an object
    ///
    /// The signature segment has no shape requirement: an empty signature is
    /// a legal decode (an unsigned token) and is rejected later by every
    /// signature verifier.
    pub fn decode(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() != 3 {
            return Err(Error::InvalidFormat);
        }

        let header_segment = parts[0].to_string();
        let payload_segment = parts[1].to_string();

        let header = Header::new(decode_object(&header_segment, "header")?);
        let payload = Payload::new(decode_object(&payload_segment, "payload")?);
        let signature = base64url::decode_bytes(parts[2])?;

        Ok(Self {
            header,
            payload,
            signature,
            header_segment,
            payload_segment,
        })
    }

    /// Get the decoded header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Get the decoded payload
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Get the raw signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Get the signing input: the original encoded header and payload
    /// segments joined by `'.'`
    ///
    /// This is re-derived from the stored segments on every call, so it is
    /// byte-for-byte identical to the input the issuer signed.
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header_segment, self.payload_segment)
    }
}

impl std::str::FromStr for Token {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Token::decode(s)
    }
}

/// Decode one Base64URL segment into a JSON object map
fn decode_object(segment: &str, name: &'static str) -> Result<serde_json::Map<String, Value>> {
    let bytes = base64url::decode_bytes(segment)?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|e| Error::InvalidJson {
        segment: name,
        message: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::JsonRootNotAnObject(name)),
    }
}

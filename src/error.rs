//! Decode-time errors
//!
//! These errors cover structural problems with a compact JWT string: wrong
//! segment count, invalid Base64URL, invalid JSON, or a JSON root that is not
//! an object. They are fatal for that token — no [`Token`](crate::Token) value
//! is produced.
//!
//! Everything that happens *after* a successful decode (missing claims,
//! expired timestamps, signature mismatches) is reported through
//! [`ValidationResult`](crate::ValidationResult) instead and never raises an
//! error.

use thiserror::Error;

/// Errors that can occur while decoding a compact JWT string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Token does not split into exactly three dot-separated segments
    #[error("invalid JWT format: expected three parts separated by '.'")]
    InvalidFormat,

    /// A segment is not valid unpadded Base64URL
    #[error("Base64URL decoding failed: {0}")]
    InvalidBase64(String),

    /// Decoded header or payload bytes are not valid JSON
    #[error("JSON parsing failed in {segment}: {message}")]
    InvalidJson {
        segment: &'static str,
        message: String,
    },

    /// Decoded header or payload JSON root is not an object
    #[error("decoded {0} is not a JSON object")]
    JsonRootNotAnObject(&'static str),
}

/// Result type alias for jwtval decode operations
pub type Result<T> = std::result::Result<T, Error>;

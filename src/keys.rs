//! Key types for JWT signature verification
//!
//! HMAC secrets are plain byte strings and are passed to
//! [`HmacVerifier::new`](crate::HmacVerifier::new) directly; only asymmetric
//! keys get a named type.

/// RSA public key (DER-encoded, PKCS#1 `RSAPublicKey`)
///
/// The key is held as opaque DER bytes and handed to the verification
/// backend as-is. Whether the bytes actually are a usable key is only
/// discovered at verification time, where a bad key surfaces as an invalid
/// result rather than a construction error.
#[derive(Debug, Clone)]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

impl RsaPublicKey {
    /// Create a public key from DER bytes
    pub fn from_der(der: impl Into<Vec<u8>>) -> Self {
        Self { der: der.into() }
    }

    /// Get the DER-encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

impl From<Vec<u8>> for RsaPublicKey {
    fn from(der: Vec<u8>) -> Self {
        Self::from_der(der)
    }
}

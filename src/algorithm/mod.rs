//! Signature verifiers
//!
//! Two verifier families, each itself a [`Validator`](crate::Validator):
//! [`HmacVerifier`] recomputes a keyed hash over the token's signing input,
//! [`RsaPkcs1Verifier`] checks a PKCS#1 v1.5 signature against a public key.
//!
//! Both fail closed: an unusable key, an empty signature, or a primitive
//! error all come back as an invalid [`ValidationResult`](crate::ValidationResult)
//! with a reason, never as a panic or an `Err` that aborts the caller's
//! validation tree.
//!
//! A disjunction of two verifiers accepts either key scheme for a token
//! without inspecting the header; callers who want strict dispatch can turn
//! on the declared-algorithm cross-check per verifier.

pub mod hmac;
pub mod rsa;

pub use hmac::HmacVerifier;
pub use rsa::RsaPkcs1Verifier;

/// Hash function selector shared by both verifier families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashFunction {
    Sha256,
    Sha384,
    Sha512,
}

impl HashFunction {
    /// JOSE algorithm name for the HMAC family
    pub fn hmac_name(&self) -> &'static str {
        match self {
            HashFunction::Sha256 => "HS256",
            HashFunction::Sha384 => "HS384",
            HashFunction::Sha512 => "HS512",
        }
    }

    /// JOSE algorithm name for the RSA-PKCS1 family
    pub fn rsa_pkcs1_name(&self) -> &'static str {
        match self {
            HashFunction::Sha256 => "RS256",
            HashFunction::Sha384 => "RS384",
            HashFunction::Sha512 => "RS512",
        }
    }
}

use crate::algorithm::HashFunction;
use crate::keys::RsaPublicKey;
use crate::token::Token;
use crate::validation::{ValidationFailure, ValidationResult, Validator};

// Select crypto backend based on features
#[cfg(feature = "aws-lc-rs")]
use aws_lc_rs::signature::{self, UnparsedPublicKey};
#[cfg(not(feature = "aws-lc-rs"))]
use ring::signature::{self, UnparsedPublicKey};

/// RSA-PKCS1 signature verifier (RS256, RS384, RS512)
///
/// Verifies the token's signature over the signing input under PKCS#1 v1.5
/// padding with the selected hash, using the configured public key.
///
/// Verification fails closed: a malformed key or any primitive error is an
/// ordinary invalid result, so a verifier with a broken key never aborts a
/// composed validation tree.
pub struct RsaPkcs1Verifier {
    key: RsaPublicKey,
    hash: HashFunction,
    check_declared_algorithm: bool,
}

impl RsaPkcs1Verifier {
    /// Create a verifier from a public key and hash function selector
    pub fn new(key: RsaPublicKey, hash: HashFunction) -> Self {
        Self {
            key,
            hash,
            check_declared_algorithm: false,
        }
    }

    /// Also require the header's `alg` to name this verifier's algorithm
    ///
    /// Off by default; see
    /// [`HmacVerifier::require_declared_algorithm`](crate::HmacVerifier::require_declared_algorithm).
    #[must_use]
    pub fn require_declared_algorithm(mut self) -> Self {
        self.check_declared_algorithm = true;
        self
    }

    fn verification_algorithm(&self) -> &'static dyn signature::VerificationAlgorithm {
        match self.hash {
            HashFunction::Sha256 => &signature::RSA_PKCS1_2048_8192_SHA256,
            HashFunction::Sha384 => &signature::RSA_PKCS1_2048_8192_SHA384,
            HashFunction::Sha512 => &signature::RSA_PKCS1_2048_8192_SHA512,
        }
    }
}

impl Validator for RsaPkcs1Verifier {
    fn evaluate(&self, token: &Token) -> ValidationResult {
        let algorithm = self.hash.rsa_pkcs1_name();

        if self.check_declared_algorithm && token.header().algorithm() != Some(algorithm) {
            return ValidationResult::failure(ValidationFailure::AlgorithmMismatch {
                declared: token.header().algorithm().unwrap_or("<none>").to_string(),
                expected: algorithm,
            });
        }

        // An empty signature never verifies; reject before touching the key
        if token.signature().is_empty() {
            return ValidationResult::failure(ValidationFailure::SignatureMismatch { algorithm });
        }

        let public_key = UnparsedPublicKey::new(self.verification_algorithm(), self.key.as_der());
        match public_key.verify(token.signing_input().as_bytes(), token.signature()) {
            Ok(()) => ValidationResult::valid(),
            // The backend reports bad keys and bad signatures with one
            // opaque error, so both surface as a mismatch
            Err(_) => ValidationResult::failure(ValidationFailure::SignatureMismatch { algorithm }),
        }
    }
}

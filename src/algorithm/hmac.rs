use crate::algorithm::HashFunction;
use crate::token::Token;
use crate::validation::{ValidationFailure, ValidationResult, Validator};

use constant_time_eq::constant_time_eq;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HMAC signature verifier (HS256, HS384, HS512)
///
/// Recomputes the keyed hash over the token's signing input with the
/// configured secret and hash function, and compares it against the token's
/// signature bytes in constant time.
///
/// # Example
///
/// ```ignore
/// use jwtval::{HashFunction, HmacVerifier, Validator};
///
/// let verifier = HmacVerifier::new("secret", HashFunction::Sha256);
/// assert!(verifier.evaluate(&token).is_valid());
/// ```
pub struct HmacVerifier {
    secret: Vec<u8>,
    hash: HashFunction,
    check_declared_algorithm: bool,
}

impl HmacVerifier {
    /// Create a verifier from a shared secret and hash function selector
    pub fn new(secret: impl Into<Vec<u8>>, hash: HashFunction) -> Self {
        Self {
            secret: secret.into(),
            hash,
            check_declared_algorithm: false,
        }
    }

    /// Also require the header's `alg` to name this verifier's algorithm
    ///
    /// Off by default. With the check enabled, a token whose header declares
    /// a different algorithm fails with
    /// [`ValidationFailure::AlgorithmMismatch`] before any MAC is computed,
    /// which closes off algorithm-confusion tricks when this verifier is
    /// used on its own.
    #[must_use]
    pub fn require_declared_algorithm(mut self) -> Self {
        self.check_declared_algorithm = true;
        self
    }

    fn expected_tag(&self, signing_input: &[u8]) -> Result<Vec<u8>, ValidationFailure> {
        match self.hash {
            HashFunction::Sha256 => tag::<Hmac<Sha256>>(&self.secret, signing_input),
            HashFunction::Sha384 => tag::<Hmac<Sha384>>(&self.secret, signing_input),
            HashFunction::Sha512 => tag::<Hmac<Sha512>>(&self.secret, signing_input),
        }
        .ok_or_else(|| ValidationFailure::UnusableKey {
            algorithm: self.hash.hmac_name(),
            reason: "secret rejected by MAC construction".to_string(),
        })
    }
}

impl Validator for HmacVerifier {
    fn evaluate(&self, token: &Token) -> ValidationResult {
        let algorithm = self.hash.hmac_name();

        if self.check_declared_algorithm && token.header().algorithm() != Some(algorithm) {
            return ValidationResult::failure(ValidationFailure::AlgorithmMismatch {
                declared: token.header().algorithm().unwrap_or("<none>").to_string(),
                expected: algorithm,
            });
        }

        let expected = match self.expected_tag(token.signing_input().as_bytes()) {
            Ok(tag) => tag,
            Err(failure) => return ValidationResult::failure(failure),
        };

        // Length check first: an empty or truncated signature can never match
        if expected.len() == token.signature().len()
            && constant_time_eq(&expected, token.signature())
        {
            ValidationResult::valid()
        } else {
            ValidationResult::failure(ValidationFailure::SignatureMismatch { algorithm })
        }
    }
}

/// Compute the keyed hash over the signing input
fn tag<M: Mac + KeyInit>(secret: &[u8], signing_input: &[u8]) -> Option<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(secret).ok()?;
    mac.update(signing_input);
    Some(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base64url;

    fn signed_token(header: &str, payload: &str, secret: &[u8], hash: HashFunction) -> Token {
        let signing_input = format!(
            "{}.{}",
            base64url::encode(header),
            base64url::encode(payload)
        );
        let signature = match hash {
            HashFunction::Sha256 => tag::<Hmac<Sha256>>(secret, signing_input.as_bytes()),
            HashFunction::Sha384 => tag::<Hmac<Sha384>>(secret, signing_input.as_bytes()),
            HashFunction::Sha512 => tag::<Hmac<Sha512>>(secret, signing_input.as_bytes()),
        }
        .unwrap();
        let raw = format!("{}.{}", signing_input, base64url::encode_bytes(&signature));
        Token::decode(&raw).unwrap()
    }

    #[test]
    fn test_hs256_valid_signature() {
        let token = signed_token(
            r#"{"alg":"HS256"}"#,
            r#"{"iss":"kreactive"}"#,
            b"secret",
            HashFunction::Sha256,
        );
        let verifier = HmacVerifier::new("secret", HashFunction::Sha256);
        assert!(verifier.evaluate(&token).is_valid());
    }

    #[test]
    fn test_wrong_secret() {
        let token = signed_token(
            r#"{"alg":"HS256"}"#,
            r#"{}"#,
            b"secret",
            HashFunction::Sha256,
        );
        let verifier = HmacVerifier::new("other-secret", HashFunction::Sha256);
        let result = verifier.evaluate(&token);
        assert_eq!(
            result.failures(),
            &[ValidationFailure::SignatureMismatch { algorithm: "HS256" }]
        );
    }

    #[test]
    fn test_wrong_hash_selector() {
        let token = signed_token(
            r#"{"alg":"HS256"}"#,
            r#"{}"#,
            b"secret",
            HashFunction::Sha256,
        );
        let verifier = HmacVerifier::new("secret", HashFunction::Sha512);
        assert!(!verifier.evaluate(&token).is_valid());
    }

    #[test]
    fn test_hs384_and_hs512() {
        for hash in [HashFunction::Sha384, HashFunction::Sha512] {
            let token = signed_token(r#"{"alg":"HS384"}"#, r#"{}"#, b"secret", hash);
            assert!(HmacVerifier::new("secret", hash).evaluate(&token).is_valid());
        }
    }

    #[test]
    fn test_empty_signature_rejected() {
        let raw = format!(
            "{}.{}.",
            base64url::encode(r#"{"alg":"none"}"#),
            base64url::encode(r#"{}"#)
        );
        let token = Token::decode(&raw).unwrap();
        let verifier = HmacVerifier::new("secret", HashFunction::Sha256);
        assert!(!verifier.evaluate(&token).is_valid());
    }

    #[test]
    fn test_declared_algorithm_check() {
        let token = signed_token(
            r#"{"alg":"HS512"}"#,
            r#"{}"#,
            b"secret",
            HashFunction::Sha256,
        );

        // Without the check the signature alone decides
        assert!(HmacVerifier::new("secret", HashFunction::Sha256)
            .evaluate(&token)
            .is_valid());

        // With it, the declared HS512 does not match the verifier's HS256
        let strict = HmacVerifier::new("secret", HashFunction::Sha256)
            .require_declared_algorithm();
        let result = strict.evaluate(&token);
        assert_eq!(
            result.failures(),
            &[ValidationFailure::AlgorithmMismatch {
                declared: "HS512".to_string(),
                expected: "HS256",
            }]
        );
    }
}

use crate::validation::RegisteredClaim;

use thiserror::Error;

/// Why a single validator rejected a token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// A mandatory claim is not present in the payload
    #[error("required claim '{0}' is missing")]
    MissingClaim(RegisteredClaim),

    /// The claim is present but not of the expected JSON shape
    #[error("claim '{0}' is present but malformed")]
    MalformedClaim(RegisteredClaim),

    /// The claim is well-formed but rejected by the configured check
    /// (a caller predicate, or the built-in temporal comparison)
    #[error("claim '{0}' was rejected")]
    RejectedClaim(RegisteredClaim),

    /// Recomputed or verified signature does not match the token's
    #[error("{algorithm} signature verification failed")]
    SignatureMismatch { algorithm: &'static str },

    /// The verification key could not be used with the selected algorithm
    #[error("{algorithm} verification key is unusable: {reason}")]
    UnusableKey {
        algorithm: &'static str,
        reason: String,
    },

    /// The header's declared algorithm differs from the verifier's
    /// (only produced by verifiers with the declared-algorithm check enabled)
    #[error("token declares algorithm '{declared}', verifier expects '{expected}'")]
    AlgorithmMismatch {
        declared: String,
        expected: &'static str,
    },
}

/// The aggregate outcome of evaluating a validator tree
///
/// A result is valid iff it carries no failures. Conjunction
/// ([`and`](ValidationResult::and)) concatenates failures in evaluation
/// order; disjunction ([`or`](ValidationResult::or)) is valid when either
/// side is and otherwise keeps both sides' failures for diagnostics.
///
/// Results are produced fresh per validation call and are plain values —
/// inspect [`is_valid`](ValidationResult::is_valid) for the go/no-go
/// decision and [`failures`](ValidationResult::failures) for logging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    failures: Vec<ValidationFailure>,
}

impl ValidationResult {
    /// The passing result
    pub fn valid() -> Self {
        Self::default()
    }

    /// A failing result carrying a single reason
    pub fn failure(failure: ValidationFailure) -> Self {
        Self {
            failures: vec![failure],
        }
    }

    /// Whether the token passed every composed check
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// The ordered failure reasons (empty when valid)
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Conjunction: valid iff both inputs are valid, failures concatenated
    #[must_use]
    pub fn and(mut self, other: Self) -> Self {
        self.failures.extend(other.failures);
        self
    }

    /// Disjunction: valid iff at least one input is valid
    ///
    /// When both fail, the reasons from both sides are retained.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        if self.is_valid() || other.is_valid() {
            Self::valid()
        } else {
            self.and(other)
        }
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        write!(f, "invalid:")?;
        for failure in &self.failures {
            write!(f, " [{failure}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(claim: RegisteredClaim) -> ValidationResult {
        ValidationResult::failure(ValidationFailure::MissingClaim(claim))
    }

    #[test]
    fn test_valid_has_no_failures() {
        let result = ValidationResult::valid();
        assert!(result.is_valid());
        assert!(result.failures().is_empty());
    }

    #[test]
    fn test_and_concatenates_failures() {
        let result = missing(RegisteredClaim::Issuer)
            .and(ValidationResult::valid())
            .and(missing(RegisteredClaim::Subject));

        assert!(!result.is_valid());
        assert_eq!(
            result.failures(),
            &[
                ValidationFailure::MissingClaim(RegisteredClaim::Issuer),
                ValidationFailure::MissingClaim(RegisteredClaim::Subject),
            ]
        );
    }

    #[test]
    fn test_and_of_valids_is_valid() {
        assert!(ValidationResult::valid()
            .and(ValidationResult::valid())
            .is_valid());
    }

    #[test]
    fn test_or_valid_wins() {
        assert!(missing(RegisteredClaim::Issuer)
            .or(ValidationResult::valid())
            .is_valid());
        assert!(ValidationResult::valid()
            .or(missing(RegisteredClaim::Issuer))
            .is_valid());
    }

    #[test]
    fn test_or_both_failing_keeps_both_reasons() {
        let result = missing(RegisteredClaim::Issuer).or(missing(RegisteredClaim::Audience));
        assert!(!result.is_valid());
        assert_eq!(result.failures().len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(ValidationResult::valid().to_string(), "valid");
        let text = missing(RegisteredClaim::ExpirationTime).to_string();
        assert!(text.starts_with("invalid:"));
        assert!(text.contains("exp"));
    }
}

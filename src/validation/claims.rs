use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::token::{Payload, Token};
use crate::validation::{Optional, ValidationFailure, ValidationResult, Validator};

/// The registered claims this crate can validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisteredClaim {
    Issuer,
    Subject,
    JwtIdentifier,
    Audience,
    ExpirationTime,
    NotBefore,
    IssuedAt,
}

impl RegisteredClaim {
    /// The claim's payload key per RFC 7519
    pub fn key(&self) -> &'static str {
        match self {
            RegisteredClaim::Issuer => "iss",
            RegisteredClaim::Subject => "sub",
            RegisteredClaim::JwtIdentifier => "jti",
            RegisteredClaim::Audience => "aud",
            RegisteredClaim::ExpirationTime => "exp",
            RegisteredClaim::NotBefore => "nbf",
            RegisteredClaim::IssuedAt => "iat",
        }
    }
}

impl std::fmt::Display for RegisteredClaim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Validator for one registered claim
///
/// Every claim validator has two construction modes:
///
/// - **Presence mode** (the plain constructor): valid iff the claim is
///   present and of the correct shape. Time-based claims additionally
///   compare against the wall clock — [`expiration_time`] requires a token
///   that has not expired, [`not_before`] a token that is already mature.
/// - **Predicate mode** ([`with_predicate`]): the presence check plus a
///   caller-supplied predicate over the extracted value.
///
/// A mandatory validator turns into an absence-tolerant one with
/// [`optional`]: the claim may be missing entirely, but a present claim
/// still gets the full check, so a malformed value never slips through.
///
/// ```ignore
/// use jwtval::{ClaimValidator, Validator, ValidatorExt};
///
/// let validator = ClaimValidator::issuer()
///     .with_predicate(|iss| iss == "kreactive")
///     .and(ClaimValidator::audience().with_predicate(|aud| aud.contains("test-app")))
///     .and(ClaimValidator::expiration_time())
///     .and(ClaimValidator::not_before().optional());
/// ```
///
/// [`expiration_time`]: ClaimValidator::expiration_time
/// [`not_before`]: ClaimValidator::not_before
/// [`with_predicate`]: ClaimValidator::with_predicate
/// [`optional`]: ClaimValidator::optional
pub struct ClaimValidator<T> {
    claim: RegisteredClaim,
    extract: fn(&Payload) -> Option<T>,
    predicate: Option<Predicate<T>>,
}

impl<T: 'static> ClaimValidator<T> {
    fn new(claim: RegisteredClaim, extract: fn(&Payload) -> Option<T>) -> Self {
        Self {
            claim,
            extract,
            predicate: None,
        }
    }

    /// The claim this validator checks
    pub fn claim(&self) -> RegisteredClaim {
        self.claim
    }

    /// Add a predicate over the extracted claim value
    ///
    /// Predicates compose: calling this on a validator that already has one
    /// (including the built-in temporal checks) requires both to hold.
    #[must_use]
    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(match self.predicate.take() {
            Some(existing) => Box::new(move |value: &T| existing(value) && predicate(value)),
            None => Box::new(predicate),
        });
        self
    }

    /// Tolerate complete absence of the claim
    ///
    /// The resulting validator is valid when the claim key is not in the
    /// payload at all and otherwise applies this validator's full check.
    pub fn optional(self) -> Optional<Self> {
        Optional::new(self.claim, self)
    }
}

impl ClaimValidator<String> {
    /// Validator for the issuer claim (`iss`)
    pub fn issuer() -> Self {
        Self::new(RegisteredClaim::Issuer, |p| p.issuer().map(String::from))
    }

    /// Validator for the subject claim (`sub`)
    pub fn subject() -> Self {
        Self::new(RegisteredClaim::Subject, |p| p.subject().map(String::from))
    }

    /// Validator for the JWT identifier claim (`jti`)
    pub fn jwt_identifier() -> Self {
        Self::new(RegisteredClaim::JwtIdentifier, |p| {
            p.jwt_identifier().map(String::from)
        })
    }
}

impl ClaimValidator<HashSet<String>> {
    /// Validator for the audience claim (`aud`)
    ///
    /// Presence mode accepts a non-empty audience set derived from a
    /// correctly-shaped claim (a string or an array of strings). A claim of
    /// any other shape collapses to the empty set during extraction, so it
    /// fails here exactly as true absence does — deliberately coarse, the
    /// failure reason is the only place the two are told apart.
    pub fn audience() -> Self {
        Self::new(RegisteredClaim::Audience, |p| {
            let audience = p.audience();
            if audience.is_empty() {
                None
            } else {
                Some(audience)
            }
        })
    }
}

impl ClaimValidator<i64> {
    /// Validator for the expiration time claim (`exp`)
    ///
    /// Valid iff the claim is a well-formed timestamp at or after the
    /// current time (the token has not expired).
    pub fn expiration_time() -> Self {
        Self::new(RegisteredClaim::ExpirationTime, Payload::expiration)
            .with_predicate(|&expiration| expiration >= unix_now())
    }

    /// Validator for the not-before claim (`nbf`)
    ///
    /// Valid iff the claim is a well-formed timestamp at or before the
    /// current time (the token is already mature).
    pub fn not_before() -> Self {
        Self::new(RegisteredClaim::NotBefore, Payload::not_before)
            .with_predicate(|&not_before| not_before <= unix_now())
    }

    /// Validator for the issued-at claim (`iat`)
    ///
    /// Presence mode only requires a well-formed numeric timestamp; no
    /// comparison against the current time is made.
    pub fn issued_at() -> Self {
        Self::new(RegisteredClaim::IssuedAt, Payload::issued_at)
    }
}

impl<T> Validator for ClaimValidator<T> {
    fn evaluate(&self, token: &Token) -> ValidationResult {
        match (self.extract)(token.payload()) {
            None => {
                if token.payload().get(self.claim.key()).is_some() {
                    ValidationResult::failure(ValidationFailure::MalformedClaim(self.claim))
                } else {
                    ValidationResult::failure(ValidationFailure::MissingClaim(self.claim))
                }
            }
            Some(value) => match &self.predicate {
                Some(predicate) if !predicate(&value) => {
                    ValidationResult::failure(ValidationFailure::RejectedClaim(self.claim))
                }
                _ => ValidationResult::valid(),
            },
        }
    }
}

/// Current Unix timestamp in seconds
fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time is before the Unix epoch")
        .as_secs() as i64
}

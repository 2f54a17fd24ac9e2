//! Validator composition engine
//!
//! A [`Validator`] is a stateless capability from [`Token`] to
//! [`ValidationResult`]. Validators hold only their configuration (expected
//! values, predicates, keys) and can be shared across threads and reused for
//! any number of tokens.
//!
//! Individual checks compose into trees:
//!
//! - [`AllOf`] / [`ValidatorExt::and`] — conjunction; every child must pass,
//!   all failures are collected
//! - [`AnyOf`] / [`ValidatorExt::or`] — disjunction; one passing child is
//!   enough, failures from every child are kept when all fail
//! - [`Optional`] / [`ClaimValidator::optional`] — absence of the claim is
//!   valid, a present claim gets the full check
//!
//! ```ignore
//! use jwtval::{ClaimValidator, HmacVerifier, HashFunction, Validator, ValidatorExt};
//!
//! let validator = ClaimValidator::issuer()
//!     .with_predicate(|iss| iss == "kreactive")
//!     .and(ClaimValidator::expiration_time())
//!     .and(HmacVerifier::new("secret", HashFunction::Sha256));
//!
//! let result = validator.evaluate(&token);
//! if !result.is_valid() {
//!     for failure in result.failures() {
//!         eprintln!("{failure}");
//!     }
//! }
//! ```

mod claims;
mod combinators;
mod result;

pub use claims::{ClaimValidator, RegisteredClaim};
pub use combinators::{AllOf, AnyOf, Optional, ValidatorExt};
pub use result::{ValidationFailure, ValidationResult};

use crate::token::Token;

/// A composable token check
///
/// Implementations must be pure with respect to the token: evaluation may
/// read the wall clock (time-based claim validators do) but must not mutate
/// shared state, so one validator tree can serve concurrent validations.
pub trait Validator {
    /// Evaluate this check against a decoded token
    fn evaluate(&self, token: &Token) -> ValidationResult;
}

impl Validator for Box<dyn Validator + Send + Sync> {
    fn evaluate(&self, token: &Token) -> ValidationResult {
        self.as_ref().evaluate(token)
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    fn evaluate(&self, token: &Token) -> ValidationResult {
        (**self).evaluate(token)
    }
}

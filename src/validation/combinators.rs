use crate::token::Token;
use crate::validation::{RegisteredClaim, ValidationResult, Validator};

/// Boxed validator stored inside a combinator tree
type BoxedValidator = Box<dyn Validator + Send + Sync>;

/// Conjunction of validators
///
/// Valid iff every child is valid against the same token. All children are
/// evaluated — there is no short-circuit — so the result carries every
/// failure for diagnostics, not just the first one.
pub struct AllOf {
    validators: Vec<BoxedValidator>,
}

impl AllOf {
    /// Build a conjunction from pre-boxed validators
    pub fn new(validators: Vec<BoxedValidator>) -> Self {
        Self { validators }
    }

    /// Append another validator to this conjunction
    ///
    /// Unlike [`ValidatorExt::and`], this keeps the tree flat, so failure
    /// reasons stay in the order the validators were chained.
    #[must_use]
    pub fn and<V>(mut self, validator: V) -> Self
    where
        V: Validator + Send + Sync + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }
}

impl Validator for AllOf {
    fn evaluate(&self, token: &Token) -> ValidationResult {
        self.validators
            .iter()
            .map(|v| v.evaluate(token))
            .fold(ValidationResult::valid(), ValidationResult::and)
    }
}

/// Disjunction of validators
///
/// Valid iff at least one child is valid against the token. When every
/// child fails, the failures of all of them are retained in order.
pub struct AnyOf {
    validators: Vec<BoxedValidator>,
}

impl AnyOf {
    /// Build a disjunction from pre-boxed validators
    pub fn new(validators: Vec<BoxedValidator>) -> Self {
        Self { validators }
    }

    /// Append another alternative to this disjunction
    #[must_use]
    pub fn or<V>(mut self, validator: V) -> Self
    where
        V: Validator + Send + Sync + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }
}

impl Validator for AnyOf {
    fn evaluate(&self, token: &Token) -> ValidationResult {
        let mut combined = ValidationResult::valid();
        for (i, validator) in self.validators.iter().enumerate() {
            let result = validator.evaluate(token);
            combined = if i == 0 { result } else { combined.or(result) };
        }
        combined
    }
}

/// Decorator that tolerates a fully absent claim
///
/// Valid when the claim key does not appear in the payload at all;
/// otherwise delegates to the wrapped validator. A claim that is present
/// but malformed still gets the full check — absence is not the same as
/// being broken.
pub struct Optional<V> {
    claim: RegisteredClaim,
    inner: V,
}

impl<V> Optional<V> {
    pub(crate) fn new(claim: RegisteredClaim, inner: V) -> Self {
        Self { claim, inner }
    }
}

impl<V: Validator> Validator for Optional<V> {
    fn evaluate(&self, token: &Token) -> ValidationResult {
        if token.payload().get(self.claim.key()).is_none() {
            ValidationResult::valid()
        } else {
            self.inner.evaluate(token)
        }
    }
}

/// Combinator methods available on every validator
pub trait ValidatorExt: Validator + Send + Sync + Sized + 'static {
    /// Conjunction: both `self` and `other` must pass
    fn and<O>(self, other: O) -> AllOf
    where
        O: Validator + Send + Sync + 'static,
    {
        AllOf::new(vec![Box::new(self), Box::new(other)])
    }

    /// Disjunction: either `self` or `other` must pass
    fn or<O>(self, other: O) -> AnyOf
    where
        O: Validator + Send + Sync + 'static,
    {
        AnyOf::new(vec![Box::new(self), Box::new(other)])
    }
}

impl<V: Validator + Send + Sync + 'static> ValidatorExt for V {}

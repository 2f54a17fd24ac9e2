//! Algebraic behavior of the AND/OR/optional combinators

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::{json, Value};

use jwtval::{
    AllOf, AnyOf, ClaimValidator, RegisteredClaim, Token, ValidationFailure, Validator,
    ValidatorExt,
};

fn token_with_payload(payload: Value) -> Token {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_string(&payload).unwrap());
    Token::decode(&format!("{header}.{payload}.")).unwrap()
}

#[test]
fn test_and_collects_all_failures() {
    let token = token_with_payload(json!({"iss": "kreactive"}));

    let result = ClaimValidator::issuer()
        .and(ClaimValidator::subject())
        .and(ClaimValidator::audience())
        .evaluate(&token);

    // No short-circuit: both missing claims are reported, in chain order
    assert_eq!(
        result.failures(),
        &[
            ValidationFailure::MissingClaim(RegisteredClaim::Subject),
            ValidationFailure::MissingClaim(RegisteredClaim::Audience),
        ]
    );
}

#[test]
fn test_or_is_symmetric_for_validity() {
    let token = token_with_payload(json!({"iss": "kreactive"}));

    let a_or_b = ClaimValidator::issuer()
        .or(ClaimValidator::subject())
        .evaluate(&token);
    let b_or_a = ClaimValidator::subject()
        .or(ClaimValidator::issuer())
        .evaluate(&token);

    assert!(a_or_b.is_valid());
    assert_eq!(a_or_b.is_valid(), b_or_a.is_valid());
}

#[test]
fn test_and_is_symmetric_for_validity() {
    let token = token_with_payload(json!({"iss": "kreactive"}));

    let a_and_b = ClaimValidator::issuer()
        .and(ClaimValidator::subject())
        .evaluate(&token);
    let b_and_a = ClaimValidator::subject()
        .and(ClaimValidator::issuer())
        .evaluate(&token);

    assert_eq!(a_and_b.is_valid(), b_and_a.is_valid());
    assert!(!a_and_b.is_valid());
}

#[test]
fn test_or_both_failing_retains_both_reasons() {
    let token = token_with_payload(json!({}));

    let result = ClaimValidator::issuer()
        .or(ClaimValidator::subject())
        .evaluate(&token);

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
fn test_associativity_of_validity() {
    let token = token_with_payload(json!({"iss": "kreactive", "sub": "antoine"}));

    let left = ClaimValidator::issuer()
        .and(ClaimValidator::subject())
        .and(ClaimValidator::audience())
        .evaluate(&token);
    let right = ClaimValidator::issuer()
        .and(ClaimValidator::subject().and(ClaimValidator::audience()))
        .evaluate(&token);
    assert_eq!(left.is_valid(), right.is_valid());

    let left = ClaimValidator::issuer()
        .or(ClaimValidator::subject())
        .or(ClaimValidator::audience())
        .evaluate(&token);
    let right = ClaimValidator::issuer()
        .or(ClaimValidator::subject().or(ClaimValidator::audience()))
        .evaluate(&token);
    assert_eq!(left.is_valid(), right.is_valid());
}

#[test]
fn test_boxed_tree_construction() {
    let token = token_with_payload(json!({"iss": "kreactive", "sub": "antoine"}));

    let conjunction = AllOf::new(vec![
        Box::new(ClaimValidator::issuer()),
        Box::new(ClaimValidator::subject()),
    ]);
    assert!(conjunction.evaluate(&token).is_valid());

    let disjunction = AnyOf::new(vec![
        Box::new(ClaimValidator::audience()),
        Box::new(ClaimValidator::issuer()),
    ]);
    assert!(disjunction.evaluate(&token).is_valid());
}

#[test]
fn test_optional_is_valid_on_absence_regardless_of_inner() {
    let token = token_with_payload(json!({}));

    let strict = ClaimValidator::issuer().with_predicate(|_| false);
    assert!(strict.optional().evaluate(&token).is_valid());
}

#[test]
fn test_optional_composes_with_and() {
    let token = token_with_payload(json!({"iss": "kreactive"}));

    let validator = ClaimValidator::issuer()
        .and(ClaimValidator::subject().optional())
        .and(ClaimValidator::expiration_time().optional());

    let result = validator.evaluate(&token);
    assert!(result.is_valid(), "{result}");
}

#[test]
fn test_shared_tree_across_threads() {
    let validator = std::sync::Arc::new(
        ClaimValidator::issuer()
            .with_predicate(|iss| iss == "kreactive")
            .and(ClaimValidator::subject()),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = validator.clone();
            std::thread::spawn(move || {
                let token =
                    token_with_payload(json!({"iss": "kreactive", "sub": format!("user-{i}")}));
                validator.evaluate(&token).is_valid()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

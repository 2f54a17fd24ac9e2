//! # jwtval - JWT Decoding and Composable Validation
//!
//! > JSON Web Token decoding, claim validation, and signature verification
//! > with composable validator trees.
//!
//! **jwtval** decodes a compact JWT string into an immutable [`Token`] and
//! lets you assemble validation pipelines from small, reusable checks:
//! per-claim validators, HMAC and RSA-PKCS1 signature verifiers, and the
//! AND/OR/optional combinators that glue them together.
//!
//! ## Overview
//!
//! JWTs encode claims as a JSON object secured by a signature or message
//! authentication code. Validating one means parsing Base64URL-encoded
//! segments, checking the registered claims (`iss`, `sub`, `jti`, `aud`,
//! `exp`, `nbf`, `iat`), and verifying the signature over the exact bytes
//! that were signed.
//!
//! jwtval splits this into two strictly separated tiers. Decoding is a hard
//! failure path: a structurally broken token yields an [`Error`] and no
//! `Token` value. Validation never fails hard: every check — missing claim,
//! malformed claim, expired timestamp, signature mismatch, unusable key —
//! resolves to an invalid [`ValidationResult`] carrying typed reasons, so a
//! composed tree can aggregate them uniformly and one decoded token can be
//! run against many validator trees.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtval::{ClaimValidator, HashFunction, HmacVerifier, Token, Validator, ValidatorExt};
//!
//! let token = Token::decode(token_str)?;
//!
//! let validator = ClaimValidator::issuer()
//!     .with_predicate(|iss| iss == "kreactive")
//!     .and(ClaimValidator::audience().with_predicate(|aud| aud.contains("test-app")))
//!     .and(ClaimValidator::expiration_time())
//!     .and(ClaimValidator::not_before().optional())
//!     .and(HmacVerifier::new("secret", HashFunction::Sha256));
//!
//! let result = validator.evaluate(&token);
//! if !result.is_valid() {
//!     for failure in result.failures() {
//!         eprintln!("rejected: {failure}");
//!     }
//! }
//! ```
//!
//! ## Composition
//!
//! Validators form trees. Conjunction evaluates every child and collects
//! every failure; disjunction accepts a token that satisfies any child:
//!
//! ```ignore
//! // Accept either of two key schemes without inspecting the header
//! let either_key = RsaPkcs1Verifier::new(public_key, HashFunction::Sha512)
//!     .or(HmacVerifier::new("secret", HashFunction::Sha512));
//! ```
//!
//! The `optional` decorator makes a mandatory claim check tolerate complete
//! absence while still rejecting a claim that is present but malformed:
//!
//! ```ignore
//! // Valid without an exp claim; invalid with exp: "tomorrow"
//! let validator = ClaimValidator::expiration_time().optional();
//! ```
//!
//! Validator trees hold only configuration and are `Send + Sync` when their
//! predicates are, so one tree can validate tokens from many threads
//! concurrently.
//!
//! ## Claim access without validation
//!
//! The decoded [`Payload`] exposes typed accessors that never fail: absent
//! or wrong-shaped claims read as `None` (the audience reads as an empty
//! set). Use them when you want the raw data without a validator tree —
//! but remember nothing about a decoded token is trustworthy before a
//! signature verifier has accepted it.
//!
//! ## Features
//!
//! - **HMAC** (always enabled): HS256, HS384, HS512
//! - **RSA-PKCS1** (always enabled): RS256, RS384, RS512
//! - **`aws-lc-rs`**: use the AWS-LC backend instead of `ring` for RSA
//!   verification

mod error;
mod keys;

// Internal modules
pub(crate) mod algorithm;
pub(crate) mod token;
pub(crate) mod utils;
pub(crate) mod validation;

// Public Interface
pub use algorithm::{HashFunction, HmacVerifier, RsaPkcs1Verifier};
pub use error::{Error, Result};
pub use keys::RsaPublicKey;
pub use token::{Header, Payload, Token};
pub use validation::{
    AllOf, AnyOf, ClaimValidator, Optional, RegisteredClaim, ValidationFailure, ValidationResult,
    Validator, ValidatorExt,
};

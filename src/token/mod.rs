//! Token decoding and claim access
//!
//! A compact JWT string is decoded once into an immutable [`Token`]. The
//! decoded token exposes the header and payload as JSON object wrappers
//! ([`Header`], [`Payload`]) plus the raw signature bytes and the exact
//! signing input the signature was computed over.

mod header;
mod payload;
#[allow(clippy::module_inception)]
mod token;

pub use header::Header;
pub use payload::Payload;
pub use token::Token;

//! Signed token issuance and verification.
//!
//! Tokens are HMAC-SHA256 signed JWTs carrying `{sid, uid, iat, exp}`.
//! Verification distinguishes expiry, bad signature and malformed input
//! as separate error kinds, and successful verifications are cached for
//! a short window.

pub mod cache;
pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod signing;

pub use cache::ClaimsCache;
pub use claims::{Claims, MintedToken};
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;

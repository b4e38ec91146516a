//! Authentication utilities
//!
//! Tokens are issued by the identity provider; this service only verifies them.

mod jwt;

pub use jwt::{Claims, IdentityVerifier, JwtIdentityVerifier, VerifiedIdentity};

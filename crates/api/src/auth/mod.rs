//! Credential and session primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- JWT session issuance/validation and the session cookie.

pub mod password;
pub mod session;

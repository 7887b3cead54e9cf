//! Request-scoped extractors.
//!
//! - [`current_user`] -- resolves the caller's identity from the session
//!   cookie on every request.

pub mod current_user;

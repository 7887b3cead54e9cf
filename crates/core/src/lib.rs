//! Domain types shared across the signet service.
//!
//! Holds the error kinds, id types, and the validation pipeline — no
//! database or HTTP dependencies.

pub mod error;
pub mod types;
pub mod validation;

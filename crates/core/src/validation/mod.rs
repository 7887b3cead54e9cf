//! Declarative field validation.
//!
//! Rules are fixed ordered lists evaluated without short-circuiting: a
//! payload can fail several rules at once and every failure is collected, in
//! rule-list order, before the handler body ever runs.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate, normalize_email, validate_credentials, validate_password};
pub use rules::{FieldError, Rule, EMAIL_RULES, PASSWORD_RULES};

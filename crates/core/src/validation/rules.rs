//! Validation rule and result types.

use serde::Serialize;
use validator::ValidateEmail;

/// A single field-level validation failure.
///
/// `field` is omitted from JSON when absent (business-rule failures carry a
/// bare message).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl FieldError {
    /// A failure tied to a named payload field.
    pub fn on(field: &str, message: &str) -> Self {
        Self {
            field: Some(field.to_string()),
            message: message.to_string(),
        }
    }

    /// A failure with no associated field.
    pub fn bare(message: &str) -> Self {
        Self {
            field: None,
            message: message.to_string(),
        }
    }
}

/// A pure per-field check: `check` returns `true` when the value passes.
///
/// Rule lists are `const` — there is no runtime rule mutation.
pub struct Rule {
    pub field: &'static str,
    pub message: &'static str,
    pub check: fn(&str) -> bool,
}

/// Special characters a password must draw from.
const SPECIAL_CHARS: &str = "!@#$%^&*";

fn is_valid_email(value: &str) -> bool {
    value.validate_email()
}

// Bounds count characters, not bytes, so non-ASCII input is measured the
// way users see it.
fn email_short_enough(value: &str) -> bool {
    value.chars().count() <= 50
}

fn password_length_ok(value: &str) -> bool {
    (8..=20).contains(&value.chars().count())
}

fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
}

fn has_special(value: &str) -> bool {
    value.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// Ordered rules for the `email` field. Run against the normalized
/// (trimmed, lowercased) value.
pub const EMAIL_RULES: &[Rule] = &[
    Rule {
        field: "email",
        message: "Must be a valid email",
        check: is_valid_email,
    },
    Rule {
        field: "email",
        message: "Email must be under 50 characters",
        check: email_short_enough,
    },
];

/// Ordered rules for the `password` field. Run against the trimmed value.
pub const PASSWORD_RULES: &[Rule] = &[
    Rule {
        field: "password",
        message: "Password Must be provided and min 8 characters",
        check: password_length_ok,
    },
    Rule {
        field: "password",
        message: "Must contain at least one digit",
        check: has_digit,
    },
    Rule {
        field: "password",
        message: "Must contain at least one uppercase letter",
        check: has_uppercase,
    },
    Rule {
        field: "password",
        message: "Must contain at least one lowercase letter",
        check: has_lowercase,
    },
    Rule {
        field: "password",
        message: "Must contain at least one special character",
        check: has_special,
    },
];

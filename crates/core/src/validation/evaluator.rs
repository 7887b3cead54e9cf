//! Pure rule evaluation over inbound payload fields.

use super::rules::{FieldError, Rule, EMAIL_RULES, PASSWORD_RULES};

/// Normalize an email for lookup and storage: trimmed and lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Run an ordered rule list against one value, collecting every failure.
///
/// Evaluation never short-circuits; output order follows rule-list order.
pub fn evaluate(rules: &[Rule], value: &str) -> Vec<FieldError> {
    rules
        .iter()
        .filter(|rule| !(rule.check)(value))
        .map(|rule| FieldError::on(rule.field, rule.message))
        .collect()
}

/// Validate a signup/signin payload: email rules first, then password rules.
///
/// `email` must already be normalized via [`normalize_email`]; the password
/// is trimmed here before evaluation.
pub fn validate_credentials(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = evaluate(EMAIL_RULES, email);
    errors.extend(evaluate(PASSWORD_RULES, password.trim()));
    errors
}

/// Validate a new password on its own (changePassword).
pub fn validate_password(password: &str) -> Vec<FieldError> {
    evaluate(PASSWORD_RULES, password.trim())
}

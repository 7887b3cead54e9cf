use crate::validation::FieldError;

/// Domain-level error kinds raised from deep in the request pipeline.
///
/// Every kind maps to exactly one HTTP outcome; the api crate performs that
/// translation in a single place.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// One or more field rules failed. Carries the full ordered list.
    #[error("Validation failed ({} field error(s))", .0.len())]
    Validation(Vec<FieldError>),

    /// A business precondition failed (duplicate email, unknown user, wrong
    /// password). The message is deliberately generic so the response does
    /// not reveal which precondition failed.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matched.
    #[error("Not found")]
    NotFound,

    /// The backing store is unreachable. Distinct from a missing row.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Anything unexpected.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// The uniform message for failed business preconditions.
    pub fn bad_request() -> Self {
        AuthError::BadRequest("Bad Request Error".to_string())
    }
}

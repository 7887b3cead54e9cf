use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use signet_core::error::AuthError;
use signet_core::validation::FieldError;
use signet_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`AuthError`] for domain errors and converts store failures.
/// Implements [`IntoResponse`] as the single place where error kinds are
/// translated to HTTP statuses and the `{errors: [{field?, message}]}` body
/// shape — handlers never format error JSON themselves.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The uniform business-precondition failure (unknown user, wrong
    /// password). Deliberately does not reveal which precondition failed.
    pub fn bad_request() -> Self {
        AppError::Auth(AuthError::bad_request())
    }

    /// A precondition failure with a specific, documented message.
    pub fn bad_request_message(message: &str) -> Self {
        AppError::Auth(AuthError::BadRequest(message.to_string()))
    }

    /// One or more validation rules failed.
    pub fn validation(errors: Vec<FieldError>) -> Self {
        AppError::Auth(AuthError::Validation(errors))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let auth = match err {
            // Race safety net: the backend's unique index rejected an insert
            // that passed the handler's pre-check. Same user-visible outcome
            // as the pre-check catching it.
            StoreError::DuplicateEmail => {
                AuthError::BadRequest("This Email Has been used".to_string())
            }
            StoreError::NotFound => AuthError::bad_request(),
            StoreError::Unavailable(msg) => AuthError::StoreUnavailable(msg),
        };
        AppError::Auth(auth)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Auth(err) = self;

        let (status, errors) = match err {
            AuthError::Validation(entries) => (StatusCode::BAD_REQUEST, entries),
            AuthError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, vec![FieldError::bare(&message)])
            }
            AuthError::NotFound => (
                StatusCode::NOT_FOUND,
                vec![FieldError::bare("Not Found")],
            ),
            AuthError::StoreUnavailable(msg) => {
                tracing::error!(error = %msg, "Store unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec![FieldError::bare("Internal Server Error")],
                )
            }
            AuthError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec![FieldError::bare("Internal Server Error")],
                )
            }
        };

        let body = json!({ "errors": errors });
        (status, axum::Json(body)).into_response()
    }
}

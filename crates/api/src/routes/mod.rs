pub mod health;
pub mod users;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /users/currentuser      GET     current session identity
/// /users/signup           POST    create account, open session
/// /users/signin           POST    authenticate, open session
/// /users/signout          POST    clear session
/// /users/changePassword   POST    replace password (requires session)
/// /users/deleteUser       DELETE  remove account, clear session
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/users", users::router())
}

/// Fallback for any unmatched route: 404 with the standard error shape.
pub async fn not_found() -> AppError {
    AppError::Auth(signet_core::error::AuthError::NotFound)
}

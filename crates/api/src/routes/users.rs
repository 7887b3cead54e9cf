//! Route definitions for the `/users` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/currentuser", get(users::current_user))
        .route("/signup", post(users::signup))
        .route("/signin", post(users::signin))
        .route("/signout", post(users::signout))
        .route("/changePassword", post(users::change_password))
        .route("/deleteUser", delete(users::delete_user))
}

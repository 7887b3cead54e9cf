//! Handlers for the `/users` resource (signup, signin, signout,
//! currentuser, changePassword, deleteUser).
//!
//! Each endpoint is a short deterministic pipeline: validate, hit the store
//! and the password/session primitives, set or clear the session cookie.
//! Failed business preconditions surface as the uniform generic bad-request
//! message so responses do not reveal whether an account exists.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use signet_core::error::AuthError;
use signet_core::types::DbId;
use signet_core::validation::{normalize_email, validate_credentials, validate_password};
use signet_db::models::UserSummary;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{self, Claims};
use crate::error::{AppError, AppResult};
use crate::middleware::current_user::CurrentUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/signup` and `POST /users/signin`.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /users/changePassword`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    /// The new password, subject to the full complexity rules.
    pub password: String,
}

/// Request body for `DELETE /users/deleteUser`.
#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub email: Option<String>,
}

/// Response body for `DELETE /users/deleteUser`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/users/signup
///
/// Validate, confirm the email is unused, hash, insert, and open a session.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<Credentials>,
) -> AppResult<(StatusCode, CookieJar, Json<UserSummary>)> {
    let email = normalize_email(&input.email);
    let errors = validate_credentials(&email, &input.password);
    if !errors.is_empty() {
        return Err(AppError::validation(errors));
    }

    if state.store.find_by_email(&email).await?.is_some() {
        return Err(AppError::bad_request_message("This Email Has been used"));
    }

    let hash = hash_password(input.password.trim())
        .map_err(|e| internal(format!("Password hashing error: {e}")))?;

    // The unique index backstops the read-then-write race above; a concurrent
    // duplicate insert comes back as the same "email in use" outcome.
    let user = state.store.insert(&email, &hash).await?;

    let jar = open_session(jar, &state, user.id, &user.email)?;
    Ok((StatusCode::CREATED, jar, Json(user.summary())))
}

/// POST /api/users/signin
///
/// Validate, look the user up, verify the password, and open a session.
pub async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<Credentials>,
) -> AppResult<(CookieJar, Json<UserSummary>)> {
    let email = normalize_email(&input.email);
    let errors = validate_credentials(&email, &input.password);
    if !errors.is_empty() {
        return Err(AppError::validation(errors));
    }

    let user = state
        .store
        .find_by_email(&email)
        .await?
        .ok_or_else(AppError::bad_request)?;

    if !verify_password(input.password.trim(), &user.password_hash) {
        return Err(AppError::bad_request());
    }

    let jar = open_session(jar, &state, user.id, &user.email)?;
    Ok((jar, Json(user.summary())))
}

/// POST /api/users/signout
///
/// Clear the session cookie unconditionally.
pub async fn signout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    (jar.add(session::removal_cookie()), Json(json!({})))
}

/// GET /api/users/currentuser
///
/// Echo the identity attached by the session extractor; `null` when
/// anonymous.
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Json<Value> {
    Json(json!({ "currentUser": claims }))
}

/// POST /api/users/changePassword
///
/// Validate the new password, then verify the caller's old password and
/// replace it. The store is never touched when the new password fails
/// the complexity rules.
pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<Json<UserSummary>> {
    let errors = validate_password(&input.password);
    if !errors.is_empty() {
        return Err(AppError::validation(errors));
    }

    // Identity comes from the session, not the body; anonymous callers get
    // the same generic outcome as an unknown user.
    let claims = claims.ok_or_else(AppError::bad_request)?;

    let user = state
        .store
        .find_by_email(&claims.email)
        .await?
        .ok_or_else(AppError::bad_request)?;

    if !verify_password(input.old_password.trim(), &user.password_hash) {
        return Err(AppError::bad_request());
    }

    let hash = hash_password(input.password.trim())
        .map_err(|e| internal(format!("Password hashing error: {e}")))?;

    let summary = state.store.update(user.id, &user.email, &hash).await?;
    Ok(Json(summary))
}

/// DELETE /api/users/deleteUser
///
/// Delete by email (idempotent at the store) and clear the session cookie.
pub async fn delete_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<DeleteUserRequest>,
) -> AppResult<(CookieJar, Json<DeleteResponse>)> {
    let email = input
        .email
        .as_deref()
        .map(normalize_email)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::bad_request_message("The user does not exist"))?;

    state.store.delete_by_email(&email).await?;

    Ok((
        jar.add(session::removal_cookie()),
        Json(DeleteResponse {
            success: true,
            message: "User removed",
        }),
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue a session token for the user and add its cookie to the jar.
///
/// A new session fully replaces any existing one.
fn open_session(jar: CookieJar, state: &AppState, id: DbId, email: &str) -> AppResult<CookieJar> {
    let claims = Claims {
        id,
        email: email.to_string(),
    };
    let token = session::issue(&claims, &state.config.session)
        .map_err(|e| internal(format!("Token issuance error: {e}")))?;
    Ok(jar.add(session::session_cookie(token, &state.config.session)))
}

fn internal(message: String) -> AppError {
    AppError::Auth(AuthError::Internal(message))
}

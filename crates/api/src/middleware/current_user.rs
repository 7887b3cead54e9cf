//! Session-cookie identity extractor for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::auth::session::{self, Claims, SESSION_COOKIE};
use crate::state::AppState;

/// The caller's identity, derived from the inbound session cookie.
///
/// Resolution fails open: a missing cookie or an invalid/tampered token
/// yields `CurrentUser(None)` (anonymous) and the request proceeds — this
/// extractor never rejects a request. Handlers that require an identity
/// decide for themselves what anonymous means.
///
/// ```ignore
/// async fn my_handler(CurrentUser(claims): CurrentUser) -> AppResult<Json<()>> {
///     if let Some(claims) = claims {
///         tracing::debug!(user_id = claims.id, "authenticated request");
///     }
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<Claims>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let claims = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| session::verify(cookie.value(), &state.config.session));
        Ok(CurrentUser(claims))
    }
}

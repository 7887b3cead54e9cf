//! User entity model and response projection.

use serde::Serialize;
use signet_core::types::DbId;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash — never serialize this to API responses.
/// Use [`UserSummary`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// The `{id, email}` projection safe for responses.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UserSummary {
    pub id: DbId,
    pub email: String,
}

//! The user store seam: a trait over single-round-trip queries against the
//! `users` table, plus the PostgreSQL implementation.
//!
//! Handlers only ever see the trait, so tests can substitute an in-memory
//! store and the service treats the relational backend as an opaque query
//! executor. No operation spans more than one statement.

use async_trait::async_trait;
use signet_core::types::DbId;

use crate::models::{User, UserSummary};
use crate::DbPool;

/// Errors surfaced by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend rejected an insert on the email unique index. Safety net
    /// for the read-then-write race; the handler has already checked.
    #[error("Email already in use")]
    DuplicateEmail,

    /// An update targeted a row that no longer exists.
    #[error("No matching user row")]
    NotFound,

    /// The backend is unreachable or failed. Never silently retried.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            // PostgreSQL unique constraint violation: error code 23505.
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                StoreError::DuplicateEmail
            }
            _ => {
                tracing::error!(error = %err, "Database error");
                StoreError::Unavailable(err.to_string())
            }
        }
    }
}

/// CRUD over the user entity.
///
/// Emails passed in are expected to be normalized already (trimmed,
/// lowercased).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Single-row lookup by email. `Ok(None)` means no such user;
    /// connectivity failures surface as [`StoreError::Unavailable`].
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Persist a new row. The backend's unique index reports a duplicate as
    /// [`StoreError::DuplicateEmail`] even when the caller pre-checked.
    async fn insert(&self, email: &str, password_hash: &str) -> Result<User, StoreError>;

    /// Full replace of the mutable fields. Returns the post-update
    /// projection; the password hash is never echoed back.
    async fn update(
        &self,
        id: DbId,
        email: &str,
        password_hash: &str,
    ) -> Result<UserSummary, StoreError>;

    /// Idempotent delete: removing a non-existent email succeeds silently.
    async fn delete_by_email(&self, email: &str) -> Result<(), StoreError>;

    /// Cheap reachability probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// The production [`UserStore`] backed by a sqlx PostgreSQL pool.
#[derive(Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash)
             VALUES ($1, $2)
             RETURNING id, email, password_hash",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn update(
        &self,
        id: DbId,
        email: &str,
        password_hash: &str,
    ) -> Result<UserSummary, StoreError> {
        let summary = sqlx::query_as::<_, UserSummary>(
            "UPDATE users SET email = $2, password_hash = $3
             WHERE id = $1
             RETURNING id, email",
        )
        .bind(id)
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)?;
        Ok(summary)
    }

    async fn delete_by_email(&self, email: &str) -> Result<(), StoreError> {
        // Zero rows affected is not an error.
        sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

//! Persistence seam for user records.
//!
//! `AppState` holds an `Arc<dyn UserStore>`; production wires in
//! [`PgUserStore`], tests swap in an in-memory double.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::user::User;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a user with the given email and returns the stored row.
    /// Email uniqueness is enforced by the backing store.
    async fn create_user(&self, email: &str) -> Result<User>;

    /// Deletes every user.
    async fn reset_users(&self) -> Result<()>;
}

/// PostgreSQL-backed [`UserStore`].
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(&self, email: &str) -> Result<User> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (id, created_at, updated_at, email)
            VALUES (gen_random_uuid(), NOW(), NOW(), $1)
            RETURNING id, created_at, updated_at, email
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .with_context(|| format!("Failed to create user '{email}'"))?;

        Ok(user)
    }

    async fn reset_users(&self) -> Result<()> {
        let deleted = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .context("Failed to delete users")?
            .rows_affected();

        tracing::info!(deleted, "Deleted all users");
        Ok(())
    }
}

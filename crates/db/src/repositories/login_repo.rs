//! Repository for the `logins` table.

use sqlx::SqlitePool;

/// Credential lookups. Passwords are compared as stored.
pub struct LoginRepo;

impl LoginRepo {
    /// Whether a login row matches both username and password.
    pub async fn exists(
        pool: &SqlitePool,
        username: &str,
        password: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT 1 FROM logins WHERE username = ?1 AND password = ?2 LIMIT 1")
                .bind(username)
                .bind(password)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }
}

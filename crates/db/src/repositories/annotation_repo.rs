//! Repository for the `annotations` table.

use chrono::Utc;
use clipfix_core::annotation::ResolvedEntry;
use sqlx::SqlitePool;

use crate::models::annotation::Annotation;

/// Column list for annotations queries.
const COLUMNS: &str = "oid, username, fix_text, confirmed, updated_at";

/// Upsert and lookup of per-user corrections.
pub struct AnnotationRepo;

impl AnnotationRepo {
    /// Insert the user's row for an item, or overwrite text, flag and
    /// timestamp of the existing one. Rows of other users are untouched.
    pub async fn upsert(
        pool: &SqlitePool,
        entry: &ResolvedEntry,
    ) -> Result<Annotation, sqlx::Error> {
        let query = format!(
            "INSERT INTO annotations (oid, username, fix_text, confirmed, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT (oid, username) DO UPDATE SET
                fix_text = excluded.fix_text,
                confirmed = excluded.confirmed,
                updated_at = excluded.updated_at
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(&entry.oid)
            .bind(&entry.username)
            .bind(&entry.fix_text)
            .bind(entry.confirmed)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find one user's row for an item.
    pub async fn find(
        pool: &SqlitePool,
        oid: &str,
        username: &str,
    ) -> Result<Option<Annotation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM annotations WHERE oid = ?1 AND username = ?2");
        sqlx::query_as::<_, Annotation>(&query)
            .bind(oid)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Number of distinct users who have saved a row for an item.
    pub async fn count_annotators(pool: &SqlitePool, oid: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM annotations WHERE oid = ?1")
            .bind(oid)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

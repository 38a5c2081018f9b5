//! Annotation merger.
//!
//! Writes a batch of corrections as per-user upserts, in batch order. Each
//! row is atomic on its own; the batch is not. The first store failure stops
//! the batch and rows written before it stay written.

use clipfix_core::annotation::{resolve_entry, EntryResolution, MergeReport};
use clipfix_db::repositories::AnnotationRepo;
use clipfix_db::DbPool;
use serde_json::Value;

/// A store failure part-way through a batch.
#[derive(Debug, thiserror::Error)]
#[error("annotation batch aborted after {saved} saved entries: {source}")]
pub struct MergeError {
    /// Rows committed before the failure.
    pub saved: usize,
    pub source: sqlx::Error,
}

/// Upserts correction batches keyed by `(item, user)`.
pub struct AnnotationMerger<'a> {
    pool: &'a DbPool,
}

impl<'a> AnnotationMerger<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Save every valid entry of `batch`; entries without a user of their own
    /// are attributed to `default_user`.
    pub async fn save(&self, batch: &[Value], default_user: &str) -> Result<MergeReport, MergeError> {
        let mut report = MergeReport::default();

        for (index, raw) in batch.iter().enumerate() {
            match resolve_entry(raw, default_user) {
                EntryResolution::Valid(entry) => {
                    AnnotationRepo::upsert(self.pool, &entry)
                        .await
                        .map_err(|source| MergeError {
                            saved: report.saved,
                            source,
                        })?;
                    tracing::debug!(oid = %entry.oid, username = %entry.username, "Annotation saved");
                    report.record_saved(index, entry.oid);
                }
                EntryResolution::Skipped { id, reason } => {
                    tracing::debug!(index, ?id, ?reason, "Skipping batch entry");
                    report.record_skipped(index, id, reason);
                }
            }
        }

        Ok(report)
    }
}

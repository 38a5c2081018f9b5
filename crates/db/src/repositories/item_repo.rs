//! Repository for the `items` table and its eligibility query.

use clipfix_core::eligibility::{EligibilityFilter, ItemCandidate, PLACEHOLDER_TEXT};
use sqlx::SqlitePool;

use crate::models::item::EligibleItemRow;

/// Eligible items for one user, ascending by `oid`.
///
/// Parameters:
/// 1. requesting user (NULL for anonymous, which never joins a row)
/// 2. placeholder source text
/// 3. annotator quota
/// 4. owner override
/// 5. hide confirmed
/// 6. limit
/// 7. offset
const ELIGIBLE_ITEMS_QUERY: &str = "\
    SELECT i.oid, i.stage_audio_path, i.source_text, \
           own.fix_text AS saved_fix_text, own.confirmed AS saved_confirmed \
    FROM items i \
    LEFT JOIN annotations own \
           ON own.oid = i.oid AND own.username = ?1 \
    LEFT JOIN (SELECT oid, COUNT(*) AS cnt FROM annotations GROUP BY oid) tally \
           ON tally.oid = i.oid \
    WHERE i.source_text IS NOT NULL \
      AND TRIM(i.source_text) <> '' \
      AND UPPER(TRIM(i.source_text)) <> ?2 \
      AND (COALESCE(tally.cnt, 0) < ?3 OR (?4 AND own.oid IS NOT NULL)) \
      AND (NOT ?5 OR own.confirmed IS NULL OR own.confirmed = 0) \
    ORDER BY i.oid ASC \
    LIMIT ?6 OFFSET ?7";

/// Read access to the item reference data.
pub struct ItemRepo;

impl ItemRepo {
    /// Run the eligibility query for one listing request.
    pub async fn list_eligible(
        pool: &SqlitePool,
        filter: &EligibilityFilter,
    ) -> Result<Vec<ItemCandidate>, sqlx::Error> {
        let rows = sqlx::query_as::<_, EligibleItemRow>(ELIGIBLE_ITEMS_QUERY)
            .bind(filter.username.as_deref())
            .bind(PLACEHOLDER_TEXT)
            .bind(filter.quota)
            .bind(filter.owner_override)
            .bind(filter.hide_confirmed)
            .bind(filter.page.limit)
            .bind(filter.page.offset)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(ItemCandidate::from).collect())
    }
}

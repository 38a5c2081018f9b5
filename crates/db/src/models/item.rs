//! Item listing rows.

use clipfix_core::eligibility::ItemCandidate;
use sqlx::FromRow;

/// A row of the eligibility query: the item joined with the requesting
/// user's own annotation, if any.
#[derive(Debug, Clone, FromRow)]
pub struct EligibleItemRow {
    pub oid: String,
    pub stage_audio_path: Option<String>,
    pub source_text: Option<String>,
    pub saved_fix_text: Option<String>,
    pub saved_confirmed: Option<bool>,
}

impl From<EligibleItemRow> for ItemCandidate {
    fn from(row: EligibleItemRow) -> Self {
        Self {
            oid: row.oid,
            stage_audio_path: row.stage_audio_path,
            source_text: row.source_text,
            saved_fix_text: row.saved_fix_text,
            saved_confirmed: row.saved_confirmed,
        }
    }
}

//! Annotation model.

use clipfix_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `annotations` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    #[serde(rename = "id")]
    pub oid: String,
    pub username: String,
    pub fix_text: String,
    pub confirmed: bool,
    pub updated_at: Timestamp,
}

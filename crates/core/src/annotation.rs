//! Correction batch entries and their per-entry outcomes.
//!
//! A batch is resolved entry by entry: each entry either becomes a
//! [`ResolvedEntry`] ready to be upserted under `(oid, username)`, or is
//! skipped with a [`SkipReason`]. One bad entry never rejects the batch.

use serde::Serialize;
use serde_json::Value;

use crate::types::ItemOid;

/// Width of the `oid` column in the annotation store.
pub const MAX_OID_LEN: usize = 32;

/// Width of the `username` column in the annotation store.
pub const MAX_USERNAME_LEN: usize = 64;

/// A batch entry that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub oid: ItemOid,
    /// May be empty when neither the entry nor the envelope names a user.
    pub username: String,
    pub fix_text: String,
    pub confirmed: bool,
}

/// Why an entry was not written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NotAnObject,
    MissingId,
    IdTooLong,
    UsernameTooLong,
}

/// Result of resolving one raw batch entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryResolution {
    Valid(ResolvedEntry),
    Skipped {
        id: Option<ItemOid>,
        reason: SkipReason,
    },
}

/// What happened to one entry of a saved batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryOutcome {
    Saved,
    Skipped { reason: SkipReason },
}

/// Per-entry line of a [`MergeReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryResult {
    /// Position of the entry in the submitted batch.
    pub index: usize,
    pub id: Option<ItemOid>,
    #[serde(flatten)]
    pub outcome: EntryOutcome,
}

/// Summary of a saved batch: rows written plus every entry's outcome in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub saved: usize,
    pub results: Vec<EntryResult>,
}

impl MergeReport {
    pub fn record_saved(&mut self, index: usize, oid: ItemOid) {
        self.saved += 1;
        self.results.push(EntryResult {
            index,
            id: Some(oid),
            outcome: EntryOutcome::Saved,
        });
    }

    pub fn record_skipped(&mut self, index: usize, id: Option<ItemOid>, reason: SkipReason) {
        self.results.push(EntryResult {
            index,
            id,
            outcome: EntryOutcome::Skipped { reason },
        });
    }

    pub fn skipped(&self) -> usize {
        self.results.len() - self.saved
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a raw JSON batch entry against the envelope's default user.
///
/// Accepted keys: `id` (falling back to `id_$oid`), `fixText` (falling back
/// to `fix_text`), `confirmed`, and an optional per-entry `username`.
pub fn resolve_entry(entry: &Value, default_user: &str) -> EntryResolution {
    let Some(fields) = entry.as_object() else {
        return EntryResolution::Skipped {
            id: None,
            reason: SkipReason::NotAnObject,
        };
    };

    let oid = ["id", "id_$oid"]
        .iter()
        .filter_map(|key| fields.get(*key).and_then(scalar_text))
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty());

    let Some(oid) = oid else {
        return EntryResolution::Skipped {
            id: None,
            reason: SkipReason::MissingId,
        };
    };
    if oid.chars().count() > MAX_OID_LEN {
        return EntryResolution::Skipped {
            id: Some(oid),
            reason: SkipReason::IdTooLong,
        };
    }

    let username = fields
        .get("username")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| default_user.trim())
        .to_string();
    if username.chars().count() > MAX_USERNAME_LEN {
        return EntryResolution::Skipped {
            id: Some(oid),
            reason: SkipReason::UsernameTooLong,
        };
    }

    let fix_text = ["fixText", "fix_text"]
        .iter()
        .filter_map(|key| fields.get(*key).and_then(scalar_text))
        .find(|s| !s.is_empty())
        .unwrap_or_default();

    let confirmed = fields.get("confirmed").is_some_and(is_truthy);

    EntryResolution::Valid(ResolvedEntry {
        oid,
        username,
        fix_text,
        confirmed,
    })
}

/// Text form of a string or number value; other JSON types have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Loose truthiness for the `confirmed` flag: clients send booleans, 0/1 or
/// strings.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

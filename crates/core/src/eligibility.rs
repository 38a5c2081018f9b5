//! Item eligibility and listing enrichment.
//!
//! An item is offered to annotators while fewer than [`ANNOTATION_QUOTA`]
//! distinct users have saved a row for it. The count only grows, so once an
//! item reaches the quota it is closed for good. The filtering itself runs in
//! SQL (see `ItemRepo::list_eligible`); this module owns the constants, the
//! request-side filter and the per-row presentation rules.

use serde::Serialize;

use crate::pagination::Page;
use crate::types::ItemOid;

/// Number of distinct annotators after which an item stops being distributed.
pub const ANNOTATION_QUOTA: i64 = 3;

/// Recognized text the ingestion process writes when recognition produced nothing.
/// Compared case-insensitively after trimming.
pub const PLACEHOLDER_TEXT: &str = "NONE";

/// Query-string values accepted as "on" for boolean listing flags.
const TRUTHY_FLAGS: [&str; 3] = ["1", "true", "yes"];

/// Parse a boolean-ish query value (`1`, `true`, `yes`, any case).
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(|v| v.trim().to_ascii_lowercase())
        .is_some_and(|v| TRUTHY_FLAGS.contains(&v.as_str()))
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Everything the eligibility query needs to know about one listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityFilter {
    /// Requesting user, `None` for anonymous listings (no backfill).
    pub username: Option<String>,
    pub page: Page,
    /// Drop items the requesting user already confirmed.
    pub hide_confirmed: bool,
    pub quota: i64,
    /// Keep at-quota items visible to users who already have a row for them.
    pub owner_override: bool,
}

impl EligibilityFilter {
    /// Build a filter; a blank username is treated as anonymous.
    pub fn new(username: Option<&str>, page: Page, hide_confirmed: bool) -> Self {
        let username = username
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string);
        Self {
            username,
            page,
            hide_confirmed,
            quota: ANNOTATION_QUOTA,
            owner_override: false,
        }
    }

    pub fn with_owner_override(mut self, owner_override: bool) -> Self {
        self.owner_override = owner_override;
        self
    }
}

// ---------------------------------------------------------------------------
// Enrichment
// ---------------------------------------------------------------------------

/// An eligible item as loaded from the store, joined with the requesting
/// user's own saved row (if any).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCandidate {
    pub oid: ItemOid,
    pub stage_audio_path: Option<String>,
    pub source_text: Option<String>,
    pub saved_fix_text: Option<String>,
    pub saved_confirmed: Option<bool>,
}

/// An item as presented to the annotation client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedItem {
    pub id: ItemOid,
    /// Same value as `id`; older clients post it back under this key.
    #[serde(rename = "id_$oid")]
    pub oid: ItemOid,
    pub name: String,
    pub audio: String,
    pub stage_audio_path: String,
    pub input_text: String,
    pub fix_text: String,
    pub confirmed: bool,
}

impl EnrichedItem {
    /// Present a candidate. `position` is the 1-based rank of the item in the
    /// whole listing (page offset included), used for unnamed clips.
    pub fn from_candidate(candidate: ItemCandidate, position: i64, asset_base: &str) -> Self {
        let stage_audio_path = candidate.stage_audio_path.unwrap_or_default();
        let input_text = candidate.source_text.unwrap_or_default();
        let fix_text = display_text(&input_text, candidate.saved_fix_text.as_deref());

        Self {
            id: candidate.oid.clone(),
            oid: candidate.oid,
            name: display_name(&stage_audio_path, position),
            audio: audio_url(asset_base, &stage_audio_path),
            stage_audio_path,
            input_text,
            fix_text,
            confirmed: candidate.saved_confirmed.unwrap_or(false),
        }
    }
}

/// File name of the clip, or `audio#N` when the path has none.
pub fn display_name(stage_audio_path: &str, position: i64) -> String {
    stage_audio_path
        .trim()
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("audio#{position}"))
}

/// Public URL of the clip on the asset host. Empty when there is no path.
pub fn audio_url(asset_base: &str, stage_audio_path: &str) -> String {
    let path = stage_audio_path.trim();
    if path.is_empty() {
        return String::new();
    }
    format!(
        "{}/{}",
        asset_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// The user's saved correction wins over the recognized text unless it is empty.
pub fn display_text(input_text: &str, saved_fix_text: Option<&str>) -> String {
    match saved_fix_text {
        Some(saved) if !saved.is_empty() => saved.to_string(),
        _ => input_text.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://assets.example.com";

    fn candidate(oid: &str) -> ItemCandidate {
        ItemCandidate {
            oid: oid.to_string(),
            stage_audio_path: Some("/clips/2024/42.wav".to_string()),
            source_text: Some("hello".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn flag_accepts_truthy_spellings() {
        for raw in ["1", "true", "TRUE", "Yes", " yes "] {
            assert!(parse_flag(Some(raw)), "{raw} should be truthy");
        }
    }

    #[test]
    fn flag_rejects_everything_else() {
        for raw in ["0", "false", "no", "", "on", "y"] {
            assert!(!parse_flag(Some(raw)), "{raw} should be falsy");
        }
        assert!(!parse_flag(None));
    }

    #[test]
    fn blank_username_is_anonymous() {
        let filter = EligibilityFilter::new(Some("   "), Page::default(), true);
        assert_eq!(filter.username, None);
        assert_eq!(filter.quota, ANNOTATION_QUOTA);
        assert!(!filter.owner_override);

        let filter = EligibilityFilter::new(Some(" alice "), Page::default(), false);
        assert_eq!(filter.username.as_deref(), Some("alice"));
    }

    #[test]
    fn name_is_last_path_segment() {
        assert_eq!(display_name("/clips/2024/42.wav", 1), "42.wav");
        assert_eq!(display_name(r"D:\audio\7.mp3", 1), "7.mp3");
        assert_eq!(display_name("plain.ogg", 1), "plain.ogg");
    }

    #[test]
    fn name_falls_back_to_position() {
        assert_eq!(display_name("", 4), "audio#4");
        assert_eq!(display_name("/clips/", 9), "audio#9");
    }

    #[test]
    fn url_joins_with_single_slash() {
        assert_eq!(
            audio_url(BASE, "/clips/a.wav"),
            "https://assets.example.com/clips/a.wav"
        );
        assert_eq!(
            audio_url("https://assets.example.com/", "clips/a.wav"),
            "https://assets.example.com/clips/a.wav"
        );
        assert_eq!(audio_url(BASE, ""), "");
    }

    #[test]
    fn saved_text_overrides_recognized_text() {
        assert_eq!(display_text("hello", Some("Hello.")), "Hello.");
        assert_eq!(display_text("hello", Some("")), "hello");
        assert_eq!(display_text("hello", None), "hello");
    }

    #[test]
    fn enrich_without_saved_row() {
        let item = EnrichedItem::from_candidate(candidate("42"), 1, BASE);
        assert_eq!(item.id, "42");
        assert_eq!(item.oid, "42");
        assert_eq!(item.name, "42.wav");
        assert_eq!(item.audio, "https://assets.example.com/clips/2024/42.wav");
        assert_eq!(item.fix_text, "hello");
        assert_eq!(item.input_text, "hello");
        assert!(!item.confirmed);
    }

    #[test]
    fn enrich_backfills_saved_state() {
        let mut c = candidate("42");
        c.saved_fix_text = Some("Hello.".to_string());
        c.saved_confirmed = Some(true);

        let item = EnrichedItem::from_candidate(c, 1, BASE);
        assert_eq!(item.fix_text, "Hello.");
        assert_eq!(item.input_text, "hello");
        assert!(item.confirmed);
    }

    #[test]
    fn enriched_item_serializes_client_keys() {
        let json = serde_json::to_value(EnrichedItem::from_candidate(candidate("42"), 1, BASE))
            .unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["id_$oid"], "42");
        assert_eq!(json["stageAudioPath"], "/clips/2024/42.wav");
        assert_eq!(json["inputText"], "hello");
        assert_eq!(json["fixText"], "hello");
        assert_eq!(json["confirmed"], false);
    }
}

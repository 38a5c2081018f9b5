//! Helpers for serving local audio files: content types, byte ranges and
//! HTTP date handling for conditional requests.

use chrono::{DateTime, Utc};

/// Largest slice served for an open-ended range request (1 MiB).
pub const MAX_RANGE_CHUNK: u64 = 1024 * 1024;

/// Format used by `Last-Modified` / `If-Modified-Since`.
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Guess a Content-Type from a file extension.
pub fn content_type_for_path(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "flac" => "audio/flac",
        "webm" => "audio/webm",
        "amr" => "audio/amr",
        "mp4" => "video/mp4",
        "json" => "application/json",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

// ---------------------------------------------------------------------------
// Byte ranges
// ---------------------------------------------------------------------------

/// A single `Range: bytes=` specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRange {
    /// `bytes=START-` or `bytes=START-END`.
    From { start: u64, end: Option<u64> },
    /// `bytes=-N`: the last N bytes.
    Suffix(u64),
}

/// Parse a `Range: bytes=...` header value. Multi-range requests are not
/// supported and yield `None`, as does anything malformed.
pub fn parse_range_header(range: &str) -> Option<ByteRange> {
    let range = range.trim().strip_prefix("bytes=")?;
    let (start, end) = range.split_once('-')?;

    if start.is_empty() {
        return end.parse::<u64>().ok().map(ByteRange::Suffix);
    }

    let start = start.parse::<u64>().ok()?;
    let end = if end.is_empty() {
        None
    } else {
        Some(end.parse::<u64>().ok()?)
    };
    Some(ByteRange::From { start, end })
}

/// Resolve a range against the file size into an inclusive `(start, end)`.
///
/// Returns `None` when the range is unsatisfiable.
pub fn resolve_range(range: ByteRange, file_size: u64) -> Option<(u64, u64)> {
    if file_size == 0 {
        return None;
    }
    let last = file_size - 1;

    match range {
        ByteRange::From { start, end } => {
            let end = end
                .map(|e| e.min(last))
                .unwrap_or_else(|| start.saturating_add(MAX_RANGE_CHUNK - 1).min(last));
            (start <= end).then_some((start, end))
        }
        ByteRange::Suffix(0) => None,
        ByteRange::Suffix(len) => Some((file_size.saturating_sub(len), last)),
    }
}

// ---------------------------------------------------------------------------
// HTTP dates
// ---------------------------------------------------------------------------

/// Render a timestamp as an IMF-fixdate (`Sun, 06 Nov 1994 08:49:37 GMT`).
pub fn format_http_date(at: DateTime<Utc>) -> String {
    at.format(HTTP_DATE_FORMAT).to_string()
}

/// Parse an IMF-fixdate header value.
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Whether a file last modified at `last_modified` is unchanged relative to an
/// `If-Modified-Since` header. HTTP dates carry whole seconds only.
pub fn is_not_modified(last_modified: DateTime<Utc>, if_modified_since: &str) -> bool {
    parse_http_date(if_modified_since)
        .is_some_and(|since| last_modified.timestamp() <= since.timestamp())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn audio_content_types() {
        assert_eq!(content_type_for_path("/a/b/clip.WAV"), "audio/wav");
        assert_eq!(content_type_for_path("clip.mp3"), "audio/mpeg");
        assert_eq!(content_type_for_path("clip.m4a"), "audio/mp4");
        assert_eq!(content_type_for_path("noext"), "application/octet-stream");
    }

    #[test]
    fn parses_ranges() {
        assert_eq!(
            parse_range_header("bytes=0-99"),
            Some(ByteRange::From {
                start: 0,
                end: Some(99)
            })
        );
        assert_eq!(
            parse_range_header("bytes=100-"),
            Some(ByteRange::From {
                start: 100,
                end: None
            })
        );
        assert_eq!(parse_range_header("bytes=-20"), Some(ByteRange::Suffix(20)));
        assert_eq!(parse_range_header("bytes=0-1,4-5"), None);
        assert_eq!(parse_range_header("items=0-1"), None);
    }

    #[test]
    fn resolves_ranges_against_size() {
        let from = |start, end| ByteRange::From { start, end };

        assert_eq!(resolve_range(from(0, Some(99)), 50), Some((0, 49)));
        assert_eq!(resolve_range(from(10, None), 50), Some((10, 49)));
        assert_eq!(resolve_range(from(50, None), 50), None);
        assert_eq!(resolve_range(from(20, Some(10)), 50), None);
        assert_eq!(resolve_range(ByteRange::Suffix(20), 50), Some((30, 49)));
        assert_eq!(resolve_range(ByteRange::Suffix(500), 50), Some((0, 49)));
        assert_eq!(resolve_range(ByteRange::Suffix(0), 50), None);
        assert_eq!(resolve_range(from(0, None), 0), None);
    }

    #[test]
    fn open_range_is_capped() {
        let size = MAX_RANGE_CHUNK * 3;
        assert_eq!(
            resolve_range(ByteRange::From { start: 0, end: None }, size),
            Some((0, MAX_RANGE_CHUNK - 1))
        );
    }

    #[test]
    fn http_date_round_trip_and_comparison() {
        let at = Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap();
        let rendered = format_http_date(at);
        assert_eq!(rendered, "Sun, 06 Nov 1994 08:49:37 GMT");
        assert_eq!(parse_http_date(&rendered), Some(at));

        assert!(is_not_modified(at, &rendered));
        assert!(!is_not_modified(at + chrono::Duration::seconds(1), &rendered));
        assert!(!is_not_modified(at, "yesterday"));
    }
}

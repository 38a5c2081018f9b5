//! Offset/limit pagination for the item listing.
//!
//! Raw query values arrive as strings. A value that does not parse resets the
//! whole page to its defaults rather than rejecting the request.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of items per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 30;

/// Maximum number of items per page.
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Largest accepted offset; keeps `offset + limit` inside `i64`.
pub const MAX_PAGE_OFFSET: i64 = i64::MAX - MAX_PAGE_LIMIT;

/// A clamped page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

/// Build a [`Page`] from raw `limit` / `offset` query strings.
///
/// Absent values take their defaults. If either present value is not an
/// integer (an empty string included), both fall back to the defaults.
pub fn parse_page(limit: Option<&str>, offset: Option<&str>) -> Page {
    let parse = |raw: Option<&str>| -> Result<Option<i64>, ()> {
        match raw.map(str::trim) {
            None => Ok(None),
            Some(s) => s.parse::<i64>().map(Some).map_err(|_| ()),
        }
    };

    match (parse(limit), parse(offset)) {
        (Ok(limit), Ok(offset)) => Page {
            limit: clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
            offset: clamp_offset(offset),
        },
        _ => Page::default(),
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to `0..=MAX_PAGE_OFFSET`.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).clamp(0, MAX_PAGE_OFFSET)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

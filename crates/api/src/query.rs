//! Query parameter types for API handlers.
//!
//! Values are kept as raw strings and interpreted leniently by the core
//! helpers, so a malformed number resets to defaults instead of rejecting
//! the request.

use serde::Deserialize;

/// Query parameters for `GET /items`.
#[derive(Debug, Default, Deserialize)]
pub struct ItemListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub username: Option<String>,
    /// Short alias of `username`.
    pub user: Option<String>,
    #[serde(rename = "hideConfirmed")]
    pub hide_confirmed: Option<String>,
}

/// Query parameters naming the acting user (`?username=` or `?user=`).
#[derive(Debug, Default, Deserialize)]
pub struct UserParams {
    pub username: Option<String>,
    pub user: Option<String>,
}

/// Prefer `username`, fall back to `user`; blank values count as absent.
fn pick_user<'a>(username: Option<&'a str>, user: Option<&'a str>) -> Option<&'a str> {
    [username, user]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|u| !u.is_empty())
}

impl ItemListParams {
    pub fn requesting_user(&self) -> Option<&str> {
        pick_user(self.username.as_deref(), self.user.as_deref())
    }
}

impl UserParams {
    pub fn requesting_user(&self) -> Option<&str> {
        pick_user(self.username.as_deref(), self.user.as_deref())
    }
}

/// Query parameters for `GET /audio`.
#[derive(Debug, Default, Deserialize)]
pub struct AudioParams {
    pub path: Option<String>,
}

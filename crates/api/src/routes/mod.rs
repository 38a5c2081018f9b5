pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                      database reachability
/// /login                       credential check (POST)
/// /items                       eligible items for a user (GET)
/// /audio                       stream a local clip by path (GET)
/// /annotations                 save a correction batch (POST)
/// /annotations/{oid}           one user's saved row (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/login", post(handlers::auth::login))
        .route("/items", get(handlers::items::list_items))
        .route("/audio", get(handlers::audio::stream_audio))
        .route("/annotations", post(handlers::annotations::save_annotations))
        .route("/annotations/{oid}", get(handlers::annotations::get_annotation))
}

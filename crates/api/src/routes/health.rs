use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Whether the database answered.
    pub ok: bool,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<&'static str>,
    /// Connection error when the database is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// GET /health -- 200 when the database is reachable, 503 otherwise.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match clipfix_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                ok: true,
                version: env!("CARGO_PKG_VERSION"),
                db: Some("connected"),
                detail: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    ok: false,
                    version: env!("CARGO_PKG_VERSION"),
                    db: None,
                    detail: Some(e.to_string()),
                }),
            )
        }
    }
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

//! Handlers for the `/annotations` resource.
//!
//! `POST /annotations` saves a batch of corrections through the
//! [`AnnotationMerger`]; `GET /annotations/{oid}` returns one user's saved
//! row directly, independent of the item's eligibility.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use clipfix_core::annotation::MergeReport;
use clipfix_core::eligibility::ANNOTATION_QUOTA;
use clipfix_core::error::CoreError;
use clipfix_db::models::annotation::Annotation;
use clipfix_db::repositories::AnnotationRepo;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::AnnotationMerger;
use crate::error::{AppError, AppResult};
use crate::query::UserParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Batch envelope for `POST /annotations`.
///
/// Entries stay raw JSON so that each one can be validated, and skipped, on
/// its own.
#[derive(Debug, Deserialize)]
pub struct SaveAnnotationsRequest {
    /// Default annotator for entries that do not name one.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub items: Option<Value>,
}

/// A user's saved row plus how many annotators the item has in total.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationDetail {
    #[serde(flatten)]
    pub annotation: Annotation,
    pub annotators: i64,
    pub quota: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/annotations
///
/// Returns `{ saved, results }`. Malformed entries are reported as skipped;
/// a store failure aborts the remaining entries with a 500.
pub async fn save_annotations(
    State(state): State<AppState>,
    payload: Result<Json<SaveAnnotationsRequest>, JsonRejection>,
) -> AppResult<Json<MergeReport>> {
    let Json(input) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected annotation payload");
        AppError::BadRequest("invalid payload".into())
    })?;

    let batch = match input.items {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(AppError::BadRequest("invalid payload".into())),
    };
    let default_user = input.username.unwrap_or_default();

    let report = AnnotationMerger::new(&state.pool)
        .save(&batch, &default_user)
        .await
        .map_err(|e| {
            tracing::error!(saved = e.saved, batch_len = batch.len(), "Annotation batch aborted");
            AppError::Database(e.source)
        })?;

    tracing::info!(
        username = %default_user.trim(),
        saved = report.saved,
        skipped = report.skipped(),
        "Annotation batch saved"
    );

    Ok(Json(report))
}

/// GET /api/annotations/{oid}?username=
///
/// The caller's own saved row for an item, even once the item has reached
/// its annotator quota.
pub async fn get_annotation(
    State(state): State<AppState>,
    Path(oid): Path<String>,
    Query(params): Query<UserParams>,
) -> AppResult<Json<DataResponse<AnnotationDetail>>> {
    let username = params
        .requesting_user()
        .ok_or_else(|| AppError::BadRequest("missing username".into()))?;

    let annotation = AnnotationRepo::find(&state.pool, &oid, username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Annotation",
                id: oid.clone(),
            })
        })?;
    let annotators = AnnotationRepo::count_annotators(&state.pool, &oid).await?;

    Ok(Json(DataResponse {
        data: AnnotationDetail {
            annotation,
            annotators,
            quota: ANNOTATION_QUOTA,
        },
    }))
}

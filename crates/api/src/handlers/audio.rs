//! Handler for `GET /audio`.
//!
//! Streams a local audio file by path with HTTP range and `If-Modified-Since`
//! support. The database is not involved.

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header::{self, HeaderMap};
use axum::http::StatusCode;
use axum::response::Response;
use chrono::{DateTime, Utc};
use clipfix_core::error::CoreError;
use clipfix_core::media::{
    content_type_for_path, format_http_date, is_not_modified, parse_range_header, resolve_range,
};
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::error::{AppError, AppResult};
use crate::query::AudioParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn file_not_found(path: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "AudioFile",
        id: path.to_string(),
    })
}

fn io_error(e: std::io::Error) -> AppError {
    AppError::InternalError(e.to_string())
}

fn build_error(e: axum::http::Error) -> AppError {
    AppError::InternalError(e.to_string())
}

/// Reject paths that resolve outside the configured root.
async fn ensure_within_root(path: &Path, root: &Path, raw: &str) -> AppResult<()> {
    let resolved = tokio::fs::canonicalize(path)
        .await
        .map_err(|_| file_not_found(raw))?;
    let root: PathBuf = tokio::fs::canonicalize(root).await.map_err(io_error)?;

    if !resolved.starts_with(&root) {
        tracing::warn!(path = %raw, "Audio path outside configured root");
        return Err(AppError::Core(CoreError::Forbidden(
            "path is outside the audio root".into(),
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/audio?path=
///
/// Full file (200), a single byte range (206 / 416), or 304 when the client's
/// copy is current.
pub async fn stream_audio(
    State(state): State<AppState>,
    Query(params): Query<AudioParams>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let raw_path = params.path.unwrap_or_default();
    if raw_path.is_empty() {
        return Err(AppError::BadRequest("missing path".into()));
    }
    let path = Path::new(&raw_path);

    if let Some(root) = &state.config.audio_root {
        ensure_within_root(path, root, &raw_path).await?;
    }

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|_| file_not_found(&raw_path))?;
    if !metadata.is_file() {
        return Err(file_not_found(&raw_path));
    }

    let file_size = metadata.len();
    let content_type = content_type_for_path(&raw_path);
    let last_modified: Option<DateTime<Utc>> = metadata.modified().ok().map(DateTime::from);

    // Conditional request.
    if let (Some(modified), Some(since)) = (
        last_modified,
        headers
            .get(header::IF_MODIFIED_SINCE)
            .and_then(|v| v.to_str().ok()),
    ) {
        if is_not_modified(modified, since) {
            return Response::builder()
                .status(StatusCode::NOT_MODIFIED)
                .header(header::LAST_MODIFIED, format_http_date(modified))
                .body(Body::empty())
                .map_err(build_error);
        }
    }

    let mut builder = Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(header::ACCEPT_RANGES, "bytes");
    if let Some(modified) = last_modified {
        builder = builder.header(header::LAST_MODIFIED, format_http_date(modified));
    }

    // Range request.
    let range = headers
        .get(header::RANGE)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_range_header);

    if let Some(range) = range {
        let Some((start, end)) = resolve_range(range, file_size) else {
            return Response::builder()
                .status(StatusCode::RANGE_NOT_SATISFIABLE)
                .header(header::CONTENT_RANGE, format!("bytes */{file_size}"))
                .body(Body::empty())
                .map_err(build_error);
        };

        let length = end - start + 1;
        let mut file = tokio::fs::File::open(path).await.map_err(io_error)?;
        file.seek(std::io::SeekFrom::Start(start))
            .await
            .map_err(io_error)?;
        let stream = ReaderStream::new(file.take(length));

        return builder
            .status(StatusCode::PARTIAL_CONTENT)
            .header(header::CONTENT_LENGTH, length.to_string())
            .header(
                header::CONTENT_RANGE,
                format!("bytes {start}-{end}/{file_size}"),
            )
            .body(Body::from_stream(stream))
            .map_err(build_error);
    }

    // No usable Range header: serve the full file.
    let file = tokio::fs::File::open(path).await.map_err(io_error)?;
    let stream = ReaderStream::new(file);

    builder
        .status(StatusCode::OK)
        .header(header::CONTENT_LENGTH, file_size.to_string())
        .body(Body::from_stream(stream))
        .map_err(build_error)
}

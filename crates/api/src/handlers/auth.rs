//! Handler for `POST /login`.
//!
//! A credential existence check: no session or token is issued.

use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use clipfix_core::credentials::{normalize_credentials, INVALID_CREDENTIALS};
use clipfix_core::error::CoreError;
use clipfix_db::repositories::LoginRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Login body, accepted as JSON or as an urlencoded form.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
}

impl<S> FromRequest<S> for LoginRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(input) = Form::<LoginRequest>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(input)
        } else {
            let Json(input) = Json::<LoginRequest>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(input)
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Succeeds when a login row matches both fields. Unknown users and wrong
/// passwords get the same 401.
pub async fn login(
    State(state): State<AppState>,
    input: LoginRequest,
) -> AppResult<Json<LoginResponse>> {
    let creds = normalize_credentials(input.username.as_deref(), input.password.as_deref())?;

    if !LoginRepo::exists(&state.pool, &creds.username, &creds.password).await? {
        tracing::info!(username = %creds.username, "Login rejected");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    tracing::info!(username = %creds.username, "Login accepted");
    Ok(Json(LoginResponse { ok: true }))
}

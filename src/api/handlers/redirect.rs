//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the link by code
/// 2. Append a click row and bump `totalClicks` / `lastClicked`
/// 3. Return 302 Found with the target in `Location`
///
/// Click bookkeeping finishes before the response is sent. If it fails the
/// visitor is still redirected and the failure is logged.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the lookup fails.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.redirect_service.resolve_and_redirect(&code).await?;

    let location = HeaderValue::try_from(target.target_url).map_err(|_| {
        AppError::internal("Stored target URL is not a valid header", json!({ "code": code }))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

//! Handlers for link management endpoints (list, create, read, delete, clicks).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::clicks::ClickHistoryResponse;
use crate::api::dto::links::{CreateLinkRequest, DeleteLinkResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "targetUrl": "https://example.com",
///   "customCode": "promo24"   // optional, 6-8 letters or digits
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON, an invalid URL or an invalid code.
/// Returns 409 Conflict if the custom code is already taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.target_url, payload.custom_code)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Returns a single link with its counters.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}

/// Deletes a link and its click history.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Response
///
/// ```json
/// { "success": true }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(DeleteLinkResponse { success: true }))
}

/// Returns the raw click rows of a link, newest first.
///
/// # Endpoint
///
/// `GET /api/links/{code}/clicks`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn link_clicks_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ClickHistoryResponse>, AppError> {
    let history = state.redirect_service.click_history(&code).await?;

    Ok(Json(history.into()))
}

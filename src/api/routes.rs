//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, health_handler,
    link_clicks_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /links`               - List links, newest first
/// - `POST   /links`               - Create a link
/// - `GET    /links/{code}`        - Fetch one link
/// - `DELETE /links/{code}`        - Delete a link and its clicks
/// - `GET    /links/{code}/clicks` - Raw click history of a link
/// - `GET    /health`              - Database connectivity check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .route("/links/{code}/clicks", get(link_clicks_handler))
        .route("/health", get(health_handler))
}

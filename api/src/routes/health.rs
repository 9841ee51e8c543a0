use crate::response::ApiResponse;
use axum::{Json, Router, response::IntoResponse, routing::get};
use common::state::AppState;

/// Builds the `/health` route group: a single `GET /health` endpoint for
/// uptime checks, load balancers, or deployment monitoring.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Returns a simple success response to indicate the API is running.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "success": true,
///   "data": "OK",
///   "message": "Health check passed"
/// }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}

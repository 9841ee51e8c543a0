use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::response::ApiResponse;
use common::state::AppState;
use db::models::course::Model as Course;

/// DELETE /api/courses/{course_id}
///
/// Delete a course. Enrollment and assignment memberships referencing it
/// are pruned by the storage layer (cascade), so no dangling references
/// remain on students or faculty.
///
/// ### Responses
/// - `200 OK` → message `"Course deleted"`
/// - `404 Not Found`
/// - `500 Internal Server Error`
pub async fn delete_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    match Course::delete_by_id(app_state.db(), course_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Course deleted")),
        ),
        Err(e) if e.is_not_found() => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error(e.to_string())),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        ),
    }
}

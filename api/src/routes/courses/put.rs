use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::courses::common::{CourseRequest, CourseResponse};
use common::{format_validation_errors, state::AppState};
use db::models::course::Model as Course;

/// PUT /api/courses/{course_id}
///
/// Edit a course. The full course body is required, same validation rules
/// as creation.
///
/// ### Responses
/// - `200 OK` → updated course, message `"Course updated successfully"`
/// - `400 Bad Request` (validation failure)
/// - `404 Not Found`
/// - `500 Internal Server Error`
pub async fn edit_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Json(req): Json<CourseRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<CourseResponse>::error(
                format_validation_errors(&validation_errors),
            )),
        );
    }

    match Course::edit(
        app_state.db(),
        course_id,
        &req.name,
        &req.description,
        req.credits,
    )
    .await
    {
        Ok(course) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course updated successfully",
            )),
        ),
        Err(e) if e.is_not_found() => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<CourseResponse>::error(e.to_string())),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<CourseResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

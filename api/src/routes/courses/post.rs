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
use db::DomainError;
use db::models::course::Model as Course;
use db::models::student_course::Model as Enrollment;

/// POST /api/courses
///
/// Create a new course.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Databases",
///   "description": "Relational systems",
///   "credits": 4
/// }
/// ```
///
/// ### Validation Rules
/// * `name`: required, at least 3 characters
/// * `description`: required, at least 5 characters
/// * `credits`: required, positive integer
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "name": "Databases",
///     "description": "Relational systems",
///     "credits": 4,
///     "created_at": "2025-07-14T18:00:00Z",
///     "updated_at": "2025-07-14T18:00:00Z"
///   },
///   "message": "Course created successfully"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure)
/// - `500 Internal Server Error`
pub async fn create_course(
    State(app_state): State<AppState>,
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

    match Course::create(app_state.db(), &req.name, &req.description, req.credits).await {
        Ok(course) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course created successfully",
            )),
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

/// POST /api/courses/{course_id}/enroll/{student_id}
///
/// Enroll a student in this course. Any authenticated caller may use this
/// (the student-initiated variant under `/students` is student-gated).
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Student enrolled successfully"
/// }
/// ```
///
/// - `400 Bad Request` (already enrolled)
/// ```json
/// {
///   "success": false,
///   "message": "Student already enrolled in this course"
/// }
/// ```
///
/// - `404 Not Found` (student or course absent; the student lookup runs
///   first)
/// - `500 Internal Server Error`
pub async fn enroll_student(
    State(app_state): State<AppState>,
    Path((course_id, student_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    match Enrollment::enroll(app_state.db(), student_id, course_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success(
                (),
                "Student enrolled successfully",
            )),
        ),
        Err(DomainError::AlreadyEnrolled) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Student already enrolled in this course",
            )),
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

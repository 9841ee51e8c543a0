use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::students::common::{StudentRequest, StudentSummary};
use common::{format_validation_errors, state::AppState};
use db::DomainError;
use db::models::student::Model as Student;
use db::models::student_course::Model as Enrollment;

/// POST /api/students
///
/// Create a student record directly (admin bookkeeping; registration with
/// `role: "student"` creates one automatically). The course set starts
/// empty.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ann",
///   "email": "ann@x.edu"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` → message `"Student created successfully"`
/// - `400 Bad Request` (validation failure or duplicate email)
/// - `500 Internal Server Error`
pub async fn create_student(
    State(app_state): State<AppState>,
    Json(req): Json<StudentRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<StudentSummary>::error(
                format_validation_errors(&validation_errors),
            )),
        );
    }

    match Student::create(app_state.db(), &req.name, &req.email, None).await {
        Ok(student) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                StudentSummary::from(student),
                "Student created successfully",
            )),
        ),
        Err(DomainError::EmailTaken) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<StudentSummary>::error(
                "A student with this email already exists",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<StudentSummary>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// POST /api/students/{course_id}/enroll/{student_id}
///
/// Self-service enrollment, student role only (enforced by the
/// route-level guard). Same ledger operation as the course-initiated
/// variant, so the student lookup runs first there too.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Enrolled in course successfully"
/// }
/// ```
///
/// - `400 Bad Request` (already enrolled)
/// ```json
/// {
///   "success": false,
///   "message": "Already enrolled in this course"
/// }
/// ```
///
/// - `401 Unauthorized` / `403 Forbidden` (missing token / wrong role)
/// - `404 Not Found` (student or course absent)
/// - `500 Internal Server Error`
pub async fn enroll(
    State(app_state): State<AppState>,
    Path((course_id, student_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    match Enrollment::enroll(app_state.db(), student_id, course_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success(
                (),
                "Enrolled in course successfully",
            )),
        ),
        Err(DomainError::AlreadyEnrolled) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("Already enrolled in this course")),
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

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::faculty::common::{FacultyRequest, FacultyResponse};
use common::{format_validation_errors, state::AppState};
use db::DomainError;
use db::models::faculty::Model as Faculty;
use db::models::faculty_course::Model as Assignment;

/// POST /api/faculty
///
/// Create a faculty record with no assigned courses.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Dr. Li",
///   "email": "li@x.edu",
///   "department": "Mathematics"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` → message `"Faculty created successfully"`
/// - `400 Bad Request` (validation failure or duplicate email)
/// - `500 Internal Server Error`
pub async fn create_faculty(
    State(app_state): State<AppState>,
    Json(req): Json<FacultyRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<FacultyResponse>::error(
                format_validation_errors(&validation_errors),
            )),
        );
    }

    match Faculty::create(app_state.db(), &req.name, &req.email, &req.department).await {
        Ok(member) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                FacultyResponse::from(member),
                "Faculty created successfully",
            )),
        ),
        Err(DomainError::EmailTaken) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<FacultyResponse>::error(
                "A faculty member with this email already exists",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<FacultyResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// POST /api/faculty/{faculty_id}/assign/{course_id}
///
/// Assign a course to a faculty member. Admin only (enforced by the
/// route-level guard). The faculty lookup runs before the course lookup,
/// mirroring the enrollment order.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Course assigned to faculty successfully"
/// }
/// ```
///
/// - `400 Bad Request` (already assigned)
/// ```json
/// {
///   "success": false,
///   "message": "Course already assigned to this faculty"
/// }
/// ```
///
/// - `401 Unauthorized` / `403 Forbidden` (missing token / wrong role)
/// - `404 Not Found` (faculty or course absent)
/// - `500 Internal Server Error`
pub async fn assign_course(
    State(app_state): State<AppState>,
    Path((faculty_id, course_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    match Assignment::assign(app_state.db(), faculty_id, course_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success(
                (),
                "Course assigned to faculty successfully",
            )),
        ),
        Err(DomainError::AlreadyAssigned) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Course already assigned to this faculty",
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

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use db::models::course::Model as Course;
    use db::test_utils::setup_test_db;
    use serde_json::Value;

    async fn body_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_assign_twice_reports_conflict() {
        let state = AppState::new(setup_test_db().await);
        let member = Faculty::create(state.db(), "Dr. Li", "li@x.edu", "Mathematics")
            .await
            .unwrap();
        let course = Course::create(state.db(), "Linear Algebra", "Matrices", 4)
            .await
            .unwrap();

        let first = assign_course(State(state.clone()), Path((member.id, course.id)))
            .await
            .into_response();
        assert_eq!(first.status(), StatusCode::OK);

        let second = assign_course(State(state), Path((member.id, course.id)))
            .await
            .into_response();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        let json = body_json(second).await;
        assert_eq!(json["message"], "Course already assigned to this faculty");
    }

    #[tokio::test]
    async fn test_assign_unknown_ids_report_faculty_first() {
        let state = AppState::new(setup_test_db().await);

        let response = assign_course(State(state), Path((42, 42)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Faculty not found");
    }
}

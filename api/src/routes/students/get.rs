use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::response::ApiResponse;
use crate::routes::students::common::StudentResponse;
use common::state::AppState;
use db::models::student::Model as Student;

/// GET /api/students
///
/// List all students, each with its enrolled courses embedded.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "name": "Ann",
///       "email": "ann@x.edu",
///       "courses": [ { "id": 3, "name": "Databases", "credits": 4, ... } ]
///     }
///   ],
///   "message": "Students fetched successfully"
/// }
/// ```
/// - `500 Internal Server Error`
pub async fn get_students(State(app_state): State<AppState>) -> impl IntoResponse {
    match Student::get_all_with_courses(app_state.db()).await {
        Ok(students) => {
            let response: Vec<StudentResponse> =
                students.into_iter().map(StudentResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Students fetched successfully")),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<StudentResponse>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

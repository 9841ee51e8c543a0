use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::response::ApiResponse;
use crate::routes::faculty::common::FacultyResponse;
use common::state::AppState;
use db::models::faculty::Model as Faculty;

/// GET /api/faculty
///
/// List all faculty members, each with their assigned courses embedded.
///
/// ### Responses
/// - `200 OK` → `data` is an array of faculty members
/// - `500 Internal Server Error`
pub async fn get_faculty(State(app_state): State<AppState>) -> impl IntoResponse {
    match Faculty::get_all_with_courses(app_state.db()).await {
        Ok(members) => {
            let response: Vec<FacultyResponse> =
                members.into_iter().map(FacultyResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Faculty fetched successfully")),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<FacultyResponse>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::response::ApiResponse;
use crate::routes::courses::common::CourseResponse;
use crate::routes::students::common::StudentSummary;
use common::state::AppState;
use db::models::course::Model as Course;
use db::models::student_course::Model as Enrollment;

/// GET /api/courses
///
/// List the whole course catalogue.
///
/// ### Responses
/// - `200 OK` → `data` is an array of courses
/// - `500 Internal Server Error`
pub async fn get_courses(State(app_state): State<AppState>) -> impl IntoResponse {
    match Course::get_all(app_state.db()).await {
        Ok(courses) => {
            let response: Vec<CourseResponse> =
                courses.into_iter().map(CourseResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Courses fetched successfully")),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<CourseResponse>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/courses/{course_id}
///
/// Get a single course by ID.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found`
/// ```json
/// {
///   "success": false,
///   "message": "Course not found"
/// }
/// ```
/// - `500 Internal Server Error`
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    match Course::get_by_id(app_state.db(), course_id).await {
        Ok(Some(course)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<CourseResponse>::error("Course not found")),
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

#[derive(Debug, Deserialize)]
pub struct CourseSearchParams {
    pub name: Option<String>,
    pub credits: Option<i32>,
}

/// GET /api/courses/search?name=&credits=
///
/// Search the catalogue by partial name and/or exact credit count. Both
/// parameters are optional; no criteria returns everything.
pub async fn search_courses(
    State(app_state): State<AppState>,
    Query(params): Query<CourseSearchParams>,
) -> impl IntoResponse {
    match Course::search(app_state.db(), params.name.as_deref(), params.credits).await {
        Ok(courses) => {
            let response: Vec<CourseResponse> =
                courses.into_iter().map(CourseResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Courses fetched successfully")),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<CourseResponse>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/courses/{course_id}/students
///
/// List the students enrolled in a course. Admin or faculty only (enforced
/// by the route-level guard).
///
/// ### Responses
/// - `200 OK` → `data` is an array of students
/// - `403 Forbidden` (wrong role)
/// - `404 Not Found` (no such course)
/// - `500 Internal Server Error`
pub async fn get_course_students(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    match Enrollment::students_for_course(app_state.db(), course_id).await {
        Ok(students) => {
            let response: Vec<StudentSummary> =
                students.into_iter().map(StudentSummary::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Students fetched successfully")),
            )
        }
        Err(e) if e.is_not_found() => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Vec<StudentSummary>>::error(e.to_string())),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<StudentSummary>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

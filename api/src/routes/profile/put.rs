use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::profile::common::{ProfileResponse, UpdateProfileRequest};
use common::{format_validation_errors, state::AppState};
use db::DomainError;
use db::models::user::Model as User;

/// PUT /api/profile/me
///
/// Edit the caller's own profile. Both fields are optional; absent fields
/// keep their current value.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ann B.",
///   "email": "ann.b@x.edu"
/// }
/// ```
///
/// ### Responses
/// - `200 OK` → updated profile, message `"Profile updated successfully"`
/// - `400 Bad Request` (validation failure or email already in use)
/// - `401 Unauthorized` (missing or invalid token)
/// - `404 Not Found`
/// - `500 Internal Server Error`
pub async fn update_profile(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<ProfileResponse>::error(
                format_validation_errors(&validation_errors),
            )),
        );
    }

    match User::update_profile(
        app_state.db(),
        claims.sub,
        req.name.as_deref(),
        req.email.as_deref(),
    )
    .await
    {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ProfileResponse::from(user),
                "Profile updated successfully",
            )),
        ),
        Err(DomainError::EmailTaken) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<ProfileResponse>::error(
                "A user with this email already exists",
            )),
        ),
        Err(e) if e.is_not_found() => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<ProfileResponse>::error(e.to_string())),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<ProfileResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

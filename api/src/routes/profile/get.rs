use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::EntityTrait;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::profile::common::ProfileResponse;
use common::state::AppState;
use db::models::user::Entity as UserEntity;

/// GET /api/profile/me
///
/// View the caller's own profile, resolved from the token's user ID.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "name": "Ann",
///     "email": "ann@x.edu",
///     "role": "student",
///     "created_at": "2025-07-14T18:00:00Z",
///     "updated_at": "2025-07-14T18:00:00Z"
///   },
///   "message": "Profile fetched successfully"
/// }
/// ```
/// - `401 Unauthorized` (missing or invalid token)
/// - `404 Not Found` (account deleted since the token was issued)
/// - `500 Internal Server Error`
pub async fn get_profile(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> impl IntoResponse {
    match UserEntity::find_by_id(claims.sub).one(app_state.db()).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ProfileResponse::from(user),
                "Profile fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<ProfileResponse>::error("User not found")),
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

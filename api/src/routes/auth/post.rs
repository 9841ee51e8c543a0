use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use common::{format_validation_errors, state::AppState};
use db::DomainError;
use db::models::student::Model as Student;
use db::models::user::{Model as User, Role};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    pub role: Role,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct AuthResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
    pub expires_at: String,
}

impl AuthResponse {
    fn new(user: &User, token: String, expires_at: String) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            token,
            expires_at,
        }
    }
}

/// POST /api/auth/register
///
/// Register a new account. A student registration also creates a linked
/// student profile with an empty course set.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ann",
///   "email": "ann@x.edu",
///   "password": "pw123",
///   "role": "student"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "name": "Ann",
///     "email": "ann@x.edu",
///     "role": "student",
///     "token": "jwt_token_here",
///     "expires_at": "2025-07-14T11:00:00Z"
///   },
///   "message": "User registered successfully"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure or duplicate email)
/// ```json
/// {
///   "success": false,
///   "message": "User already exists"
/// }
/// ```
///
/// - `500 Internal Server Error`
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AuthResponse>::error(
                format_validation_errors(&validation_errors),
            )),
        );
    }

    let db = app_state.db();

    let user = match User::create(db, &req.name, &req.email, &req.password, req.role).await {
        Ok(user) => user,
        Err(DomainError::EmailTaken) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<AuthResponse>::error("User already exists")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<AuthResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    if user.role == Role::Student {
        match Student::create(db, &user.name, &user.email, Some(user.id)).await {
            Ok(_) => {}
            Err(DomainError::EmailTaken) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<AuthResponse>::error(
                        "A student with this email already exists",
                    )),
                );
            }
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<AuthResponse>::error(format!(
                        "Database error: {}",
                        e
                    ))),
                );
            }
        }
    }

    let (token, expires_at) = generate_jwt(user.id, user.role);
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            AuthResponse::new(&user, token, expires_at),
            "User registered successfully",
        )),
    )
}

/// POST /api/auth/login
///
/// Authenticate an existing account and issue a JWT.
///
/// Unknown email and wrong password answer identically, so the endpoint
/// never reveals which emails are registered.
///
/// ### Request Body
/// ```json
/// {
///   "email": "ann@x.edu",
///   "password": "pw123"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK` — same payload shape as register, message `"Login successful"`
/// - `400 Bad Request`
/// ```json
/// {
///   "success": false,
///   "message": "Invalid credentials"
/// }
/// ```
/// - `500 Internal Server Error`
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AuthResponse>::error(
                format_validation_errors(&validation_errors),
            )),
        );
    }

    match User::verify_credentials(app_state.db(), &req.email, &req.password).await {
        Ok(user) => {
            let (token, expires_at) = generate_jwt(user.id, user.role);
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    AuthResponse::new(&user, token, expires_at),
                    "Login successful",
                )),
            )
        }
        Err(DomainError::InvalidCredentials) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AuthResponse>::error("Invalid credentials")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<AuthResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Claims;
    use axum::body::to_bytes;
    use axum::http::Response;
    use common::config::AppConfig;
    use db::models::student_course::Model as Enrollment;
    use db::test_utils::setup_test_db;
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
    use serde_json::Value;

    fn init_test_config() {
        // SAFETY: test-only; every test module sets the same values, so
        // concurrent initialization is idempotent.
        unsafe {
            std::env::set_var("DATABASE_PATH", "data/test.db");
            std::env::set_var(
                "JWT_SECRET",
                "test_secret_key_for_jwt_generation_and_validation",
            );
            std::env::set_var("JWT_DURATION_MINUTES", "60");
        }
        AppConfig::get();
    }

    async fn test_state() -> AppState {
        init_test_config();
        AppState::new(setup_test_db().await)
    }

    fn register_req(email: &str, role: Role) -> RegisterRequest {
        RegisterRequest {
            name: "Ann".into(),
            email: email.into(),
            password: "pw123".into(),
            role,
        }
    }

    async fn body_json(response: Response<axum::body::Body>) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_register_issues_token() {
        let state = test_state().await;

        let response = register(
            State(state),
            Json(register_req("ann@x.edu", Role::Student)),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        let token = json["data"]["token"].as_str().unwrap();

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(AppConfig::get().jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();
        assert_eq!(decoded.claims.role, Role::Student);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_rejected() {
        let state = test_state().await;

        let first = register(
            State(state.clone()),
            Json(register_req("ann@x.edu", Role::Student)),
        )
        .await
        .into_response();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = register(
            State(state),
            Json(register_req("ann@x.edu", Role::Faculty)),
        )
        .await
        .into_response();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);

        let json = body_json(second).await;
        assert_eq!(json["message"], "User already exists");
    }

    #[tokio::test]
    async fn test_register_student_creates_linked_profile() {
        let state = test_state().await;

        register(
            State(state.clone()),
            Json(register_req("ann@x.edu", Role::Student)),
        )
        .await
        .into_response();

        let students = db::models::student::Model::get_all_with_courses(state.db())
            .await
            .unwrap();
        assert_eq!(students.len(), 1);
        let (profile, courses) = &students[0];
        assert_eq!(profile.email, "ann@x.edu");
        assert!(profile.user_id.is_some());
        assert!(courses.is_empty());

        // An admin registration must not create one.
        register(
            State(state.clone()),
            Json(register_req("boss@x.edu", Role::Admin)),
        )
        .await
        .into_response();
        let students = db::models::student::Model::get_all_with_courses(state.db())
            .await
            .unwrap();
        assert_eq!(students.len(), 1);

        // The example flow: the new student can enroll right away.
        let course = db::models::course::Model::create(state.db(), "Databases", "Intro", 4)
            .await
            .unwrap();
        Enrollment::enroll(state.db(), profile.id, course.id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_register_invalid_email_is_400() {
        let state = test_state().await;

        let response = register(
            State(state),
            Json(register_req("not-an-email", Role::Student)),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_role_claim_matches_stored_role() {
        let state = test_state().await;

        register(
            State(state.clone()),
            Json(register_req("dean@x.edu", Role::Faculty)),
        )
        .await
        .into_response();

        let response = login(
            State(state),
            Json(LoginRequest {
                email: "dean@x.edu".into(),
                password: "pw123".into(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let token = json["data"]["token"].as_str().unwrap();
        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(AppConfig::get().jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();
        assert_eq!(decoded.claims.role, Role::Faculty);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let state = test_state().await;

        register(
            State(state.clone()),
            Json(register_req("ann@x.edu", Role::Student)),
        )
        .await
        .into_response();

        let wrong_password = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "ann@x.edu".into(),
                password: "wrong".into(),
            }),
        )
        .await
        .into_response();

        let unknown_email = login(
            State(state),
            Json(LoginRequest {
                email: "ghost@x.edu".into(),
                password: "pw123".into(),
            }),
        )
        .await
        .into_response();

        assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
        assert_eq!(unknown_email.status(), StatusCode::BAD_REQUEST);

        let a = body_json(wrong_password).await;
        let b = body_json(unknown_email).await;
        assert_eq!(a, b);
        assert_eq!(a["message"], "Invalid credentials");
    }
}

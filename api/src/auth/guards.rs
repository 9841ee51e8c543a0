use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use axum::{
    Json,
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::user::Role;

// --- Role Based Access Guards ---

#[derive(serde::Serialize, Default)]
pub struct Empty;

/// Helper to extract, validate user from the request and insert the claims
/// back into the request extensions for downstream handlers.
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), (StatusCode, Json<ApiResponse<Empty>>)> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|(status, msg)| (status, Json(ApiResponse::error(msg))))?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Basic guard to ensure the request is authenticated.
pub async fn allow_authenticated(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, _user) = extract_and_insert_authuser(req).await?;

    Ok(next.run(req).await)
}

/// Base guard every role-gated route goes through: authenticate first, then
/// check membership in the required role set. An empty set admits any
/// authenticated user.
async fn allow_roles(
    req: Request<Body>,
    next: Next,
    required_roles: &[Role],
    failure_msg: &str,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    if required_roles.is_empty() || required_roles.contains(&user.0.role) {
        Ok(next.run(req).await)
    } else {
        Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error(failure_msg)),
        ))
    }
}

/// Admin-only guard.
pub async fn allow_admin(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_roles(req, next, &[Role::Admin], "Admin access required").await
}

/// Guard for staff routes: admins and faculty.
pub async fn allow_staff(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_roles(
        req,
        next,
        &[Role::Admin, Role::Faculty],
        "Admin or faculty access required",
    )
    .await
}

/// Guard for student-only routes.
pub async fn allow_student(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_roles(req, next, &[Role::Student], "Student access required").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Claims, generate_jwt};
    use axum::{
        Router,
        http::header::AUTHORIZATION,
        middleware::from_fn,
        routing::get,
    };
    use common::config::AppConfig;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use tower::ServiceExt;

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

    async fn handler() -> &'static str {
        "reached"
    }

    fn admin_gated() -> Router {
        Router::new()
            .route("/", get(handler))
            .route_layer(from_fn(allow_admin))
    }

    fn request(token: Option<&str>) -> Request<Body> {
        let builder = Request::builder().uri("/");
        let builder = match token {
            Some(t) => builder.header(AUTHORIZATION, format!("Bearer {t}")),
            None => builder,
        };
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_is_401() {
        init_test_config();

        let response = admin_gated().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_role_is_403() {
        init_test_config();

        let (token, _) = generate_jwt(7, Role::Student);
        let response = admin_gated().oneshot(request(Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_correct_role_reaches_handler() {
        init_test_config();

        let (token, _) = generate_jwt(7, Role::Admin);
        let response = admin_gated().oneshot(request(Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_staff_guard_admits_both_roles() {
        init_test_config();

        let app = || {
            Router::new()
                .route("/", get(handler))
                .route_layer(from_fn(allow_staff))
        };

        for role in [Role::Admin, Role::Faculty] {
            let (token, _) = generate_jwt(7, role);
            let response = app().oneshot(request(Some(&token))).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let (token, _) = generate_jwt(7, Role::Student);
        let response = app().oneshot(request(Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_empty_role_set_admits_any_authenticated() {
        init_test_config();

        let app = Router::new().route("/", get(handler)).route_layer(from_fn(
            |req, next| allow_roles(req, next, &[], "unreachable"),
        ));

        let (token, _) = generate_jwt(7, Role::Student);
        let response = app.oneshot(request(Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_expired_token_is_401() {
        init_test_config();

        // Hand-craft a token whose TTL has already elapsed.
        let expired = Claims {
            sub: 7,
            role: Role::Admin,
            exp: (chrono::Utc::now() - chrono::Duration::minutes(5)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &expired,
            &EncodingKey::from_secret(AppConfig::get().jwt_secret.as_bytes()),
        )
        .unwrap();

        let response = admin_gated().oneshot(request(Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Token has expired");
    }

    #[tokio::test]
    async fn test_garbage_token_is_401() {
        init_test_config();

        let response = admin_gated()
            .oneshot(request(Some("not.a.jwt")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Invalid token");
    }
}

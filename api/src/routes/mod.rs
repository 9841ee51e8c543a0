//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by resource, each protected by the appropriate
//! access-control middleware:
//! - `/health` → liveness check (public)
//! - `/auth` → registration and login (public)
//! - `/courses` → course catalogue, rosters, and enrollment
//! - `/students` → student records and student-initiated enrollment
//! - `/faculty` → faculty records and course assignment (admin)
//! - `/profile` → the caller's own account (authenticated)

use axum::Router;
use common::state::AppState;

pub mod auth;
pub mod courses;
pub mod faculty;
pub mod health;
pub mod profile;
pub mod students;

/// Builds the complete application router for all HTTP endpoints.
///
/// Role gating happens per-route inside each group; only the groups that
/// are uniformly protected carry a group-level layer.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/auth", auth::auth_routes())
        .nest("/courses", courses::courses_routes())
        .nest("/students", students::students_routes())
        .nest("/faculty", faculty::faculty_routes())
        .nest("/profile", profile::profile_routes())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::routes;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use common::{config::AppConfig, state::AppState};
    use db::models::course::Model as Course;
    use db::test_utils::setup_test_db;
    use serde_json::{Value, json};
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

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        let builder = match token {
            Some(t) => builder.header(header::AUTHORIZATION, format!("Bearer {t}")),
            None => builder,
        };
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    /// The whole registration-to-enrollment flow over the real router:
    /// register a student, enroll with the issued token, and watch the
    /// second attempt bounce.
    #[tokio::test]
    async fn test_register_then_enroll_then_conflict() {
        init_test_config();
        let state = AppState::new(setup_test_db().await);
        let app = || routes(state.clone());

        let course = Course::create(state.db(), "Databases", "Relational systems", 4)
            .await
            .unwrap();

        let response = app()
            .oneshot(json_request(
                "POST",
                "/auth/register",
                None,
                json!({
                    "name": "Ann",
                    "email": "ann@x.edu",
                    "password": "pw123",
                    "role": "student"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let registered = body_json(response).await;
        let token = registered["data"]["token"].as_str().unwrap().to_owned();

        let student_id = db::models::student::Model::get_all_with_courses(state.db())
            .await
            .unwrap()[0]
            .0
            .id;
        let enroll_uri = format!("/students/{}/enroll/{}", course.id, student_id);

        // No token → 401 before the handler runs.
        let response = app()
            .oneshot(json_request("POST", &enroll_uri, None, json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app()
            .oneshot(json_request("POST", &enroll_uri, Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Enrolled in course successfully");

        let response = app()
            .oneshot(json_request("POST", &enroll_uri, Some(&token), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Already enrolled in this course");
    }

    /// Role gating across the router: a student token may not list a
    /// course roster, a faculty token may.
    #[tokio::test]
    async fn test_roster_requires_staff_role() {
        init_test_config();
        let state = AppState::new(setup_test_db().await);
        let app = || routes(state.clone());

        let course = Course::create(state.db(), "Databases", "Relational systems", 4)
            .await
            .unwrap();
        let roster_uri = format!("/courses/{}/students", course.id);

        let register = |email: &str, role: &str| {
            json_request(
                "POST",
                "/auth/register",
                None,
                json!({
                    "name": "Someone",
                    "email": email,
                    "password": "pw123",
                    "role": role
                }),
            )
        };

        let student = body_json(app().oneshot(register("s@x.edu", "student")).await.unwrap()).await;
        let faculty = body_json(app().oneshot(register("f@x.edu", "faculty")).await.unwrap()).await;

        let student_token = student["data"]["token"].as_str().unwrap();
        let faculty_token = faculty["data"]["token"].as_str().unwrap();

        let request = |token: &str| {
            Request::builder()
                .uri(roster_uri.as_str())
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap()
        };

        let response = app().oneshot(request(student_token)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app().oneshot(request(faculty_token)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

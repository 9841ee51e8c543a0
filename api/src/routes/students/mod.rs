//! # Students Routes Module
//!
//! Defines and wires up routes for the `/api/students` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (list students with their courses)
//! - `post.rs` — POST handlers (create a student, self-service enrollment)

use crate::auth::guards::allow_student;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use ::common::state::AppState;

use get::get_students;
use post::{create_student, enroll};

pub mod common;
pub mod get;
pub mod post;

/// Builds the `/students` route group.
///
/// - `GET  /students` → list all students with embedded courses
/// - `POST /students` → create a student record
/// - `POST /students/{course_id}/enroll/{student_id}` → enroll
///   (role: student)
pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students))
        .route("/", post(create_student))
        .route(
            "/{course_id}/enroll/{student_id}",
            post(enroll).route_layer(from_fn(allow_student)),
        )
}

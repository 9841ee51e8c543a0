//! # Courses Routes Module
//!
//! Defines and wires up routes for the `/api/courses` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (catalogue, single course, search, roster)
//! - `post.rs` — POST handlers (create course, enroll a student)
//! - `put.rs` — PUT handlers (edit course)
//! - `delete.rs` — DELETE handlers (remove course)

use crate::auth::guards::{allow_authenticated, allow_staff};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use ::common::state::AppState;

use delete::delete_course;
use get::{get_course, get_course_students, get_courses, search_courses};
use post::{create_course, enroll_student};
use put::edit_course;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/courses` route group.
///
/// - `GET    /courses`                  → list the catalogue
/// - `GET    /courses/search`           → search by name and/or credits
/// - `GET    /courses/{course_id}`      → get a single course
/// - `POST   /courses`                  → create a course
/// - `PUT    /courses/{course_id}`      → edit a course
/// - `DELETE /courses/{course_id}`      → delete a course
/// - `GET    /courses/{course_id}/students` → roster (admin or faculty)
/// - `POST   /courses/{course_id}/enroll/{student_id}` → enroll (any
///   authenticated user)
pub fn courses_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_courses))
        .route("/search", get(search_courses))
        .route("/{course_id}", get(get_course))
        .route("/", post(create_course))
        .route("/{course_id}", put(edit_course))
        .route("/{course_id}", delete(delete_course))
        .route(
            "/{course_id}/students",
            get(get_course_students).route_layer(from_fn(allow_staff)),
        )
        .route(
            "/{course_id}/enroll/{student_id}",
            post(enroll_student).route_layer(from_fn(allow_authenticated)),
        )
}

//! # Faculty Routes Module
//!
//! Defines and wires up routes for the `/api/faculty` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (list faculty with their courses)
//! - `post.rs` — POST handlers (create a member, assign a course)

use crate::auth::guards::allow_admin;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use ::common::state::AppState;

use get::get_faculty;
use post::{assign_course, create_faculty};

pub mod common;
pub mod get;
pub mod post;

/// Builds the `/faculty` route group.
///
/// - `GET  /faculty` → list all faculty with embedded courses
/// - `POST /faculty` → create a faculty record
/// - `POST /faculty/{faculty_id}/assign/{course_id}` → assign a course
///   (role: admin)
pub fn faculty_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_faculty))
        .route("/", post(create_faculty))
        .route(
            "/{faculty_id}/assign/{course_id}",
            post(assign_course).route_layer(from_fn(allow_admin)),
        )
}

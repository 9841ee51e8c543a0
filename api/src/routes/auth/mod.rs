//! # Auth Routes Module
//!
//! Wires up the public `/api/auth` endpoint group: registration and login.

use axum::{Router, routing::post};
use common::state::AppState;

pub mod post;

use post::{login, register};

/// Builds the `/auth` route group.
///
/// - `POST /auth/register` → create an account, issue a token
/// - `POST /auth/login` → verify credentials, issue a token
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

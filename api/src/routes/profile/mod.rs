//! # Profile Routes Module
//!
//! Defines and wires up routes for the `/api/profile` endpoint group. All
//! routes operate on the caller's own account, identified by the token.

use crate::auth::guards::allow_authenticated;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, put},
};
use ::common::state::AppState;

use get::get_profile;
use put::update_profile;

pub mod common;
pub mod get;
pub mod put;

/// Builds the `/profile` route group.
///
/// - `GET /profile/me` → view own profile
/// - `PUT /profile/me` → edit own profile (name, email)
///
/// Both require a valid token; any role is accepted.
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_profile))
        .route("/me", put(update_profile))
        .route_layer(from_fn(allow_authenticated))
}

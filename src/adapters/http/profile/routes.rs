//! HTTP routes for profile endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_profile, get_profile, list_session_profiles};
use crate::adapters::http::ApiState;

/// Profile routes, mounted at `/api/profiles`.
///
/// - `POST /` - Generate and store a profile
/// - `GET /:session_id` - List a session's profiles, newest first
/// - `GET /profile/:id` - Fetch one profile
pub fn profile_routes() -> Router<ApiState> {
    Router::new()
        .route("/", post(create_profile))
        .route("/profile/:id", get(get_profile))
        .route("/:session_id", get(list_session_profiles))
}

//! HTTP routes for session endpoints.

use axum::{routing::get, Router};

use super::handlers::get_session_stats;
use crate::adapters::http::ApiState;

/// Session routes, mounted at `/api/sessions`.
pub fn session_routes() -> Router<ApiState> {
    Router::new().route("/:session_id/stats", get(get_session_stats))
}

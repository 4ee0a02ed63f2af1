//! HTTP handlers for session endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_profile_error;
use crate::adapters::http::profile::invalid_session;
use crate::adapters::http::ApiState;
use crate::application::handlers::profile::GetSessionStatsQuery;
use crate::domain::foundation::SessionId;

use super::dto::SessionStatsResponse;

/// GET /api/sessions/:session_id/stats - Per-session statistics
pub async fn get_session_stats(
    State(state): State<ApiState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(e) => return invalid_session(e.to_string()),
    };

    match state
        .session_stats
        .handle(GetSessionStatsQuery { session_id })
        .await
    {
        Ok(stats) => {
            let response = SessionStatsResponse {
                success: true,
                stats,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_profile_error(e, state.verbose_errors),
    }
}

//! HTTP handlers for profile endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_profile_error, ApiJson, ErrorResponse};
use crate::adapters::http::ApiState;
use crate::application::handlers::profile::{
    CreateProfileCommand, GetProfileQuery, ListSessionProfilesQuery,
};
use crate::domain::foundation::{ProfileId, SessionId};

use super::dto::{
    CreateProfileRequest, CreateProfileResponse, ProfileListResponse, ProfileResponse,
};

/// POST /api/profiles - Generate and store a profile
pub async fn create_profile(
    State(state): State<ApiState>,
    ApiJson(req): ApiJson<CreateProfileRequest>,
) -> Response {
    let session_id = match req.session_id.filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => match raw.parse::<SessionId>() {
            Ok(id) => Some(id),
            Err(e) => return invalid_session(e.to_string()),
        },
    };

    let cmd = CreateProfileCommand {
        session_id,
        energy_centers: req.energy_centers,
    };

    match state.create_profile.handle(cmd).await {
        Ok(result) => {
            let record = result.record;
            let response = CreateProfileResponse {
                success: true,
                session_id: record.session_id().to_string(),
                profile_id: record.id().to_string(),
                profile: record.generated_profile().clone(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_profile_error(e, state.verbose_errors),
    }
}

/// GET /api/profiles/:session_id - List a session's stored profiles
pub async fn list_session_profiles(
    State(state): State<ApiState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(e) => return invalid_session(e.to_string()),
    };

    let query = ListSessionProfilesQuery {
        session_id: session_id.clone(),
    };

    match state.list_profiles.handle(query).await {
        Ok(records) => {
            let response = ProfileListResponse {
                success: true,
                session_id: session_id.to_string(),
                profiles: records.into_iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_profile_error(e, state.verbose_errors),
    }
}

/// GET /api/profiles/profile/:id - Fetch one stored profile
pub async fn get_profile(State(state): State<ApiState>, Path(id): Path<String>) -> Response {
    // An id that is not a UUID cannot name a stored profile.
    let profile_id = match id.parse::<ProfileId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found("Profile not found")),
            )
                .into_response()
        }
    };

    match state.get_profile.handle(GetProfileQuery { profile_id }).await {
        Ok(record) => {
            let response = ProfileResponse {
                success: true,
                profile: record.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_profile_error(e, state.verbose_errors),
    }
}

pub(crate) fn invalid_session(reason: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!("Invalid session ID: {}", reason))),
    )
        .into_response()
}

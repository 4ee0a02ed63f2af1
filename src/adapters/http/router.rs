//! Top-level API router.

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::health::health;
use super::profile::profile_routes;
use super::session::session_routes;
use crate::application::handlers::profile::{
    CreateProfileHandler, GetProfileHandler, GetSessionStatsHandler, ListSessionProfilesHandler,
};
use crate::config::{FeatureFlags, ServerConfig};
use crate::ports::{ProfileReader, ProfileRepository};

/// Handlers shared by every route.
#[derive(Clone)]
pub struct ApiState {
    pub create_profile: Arc<CreateProfileHandler>,
    pub get_profile: Arc<GetProfileHandler>,
    pub list_profiles: Arc<ListSessionProfilesHandler>,
    pub session_stats: Arc<GetSessionStatsHandler>,
    /// Expose storage error details in 500 responses.
    pub verbose_errors: bool,
}

impl ApiState {
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        reader: Arc<dyn ProfileReader>,
        max_profiles: u32,
        verbose_errors: bool,
    ) -> Self {
        Self {
            create_profile: Arc::new(CreateProfileHandler::new(repository.clone())),
            get_profile: Arc::new(GetProfileHandler::new(repository)),
            list_profiles: Arc::new(ListSessionProfilesHandler::new(reader.clone(), max_profiles)),
            session_stats: Arc::new(GetSessionStatsHandler::new(reader)),
            verbose_errors,
        }
    }
}

/// Routes without middleware.
///
/// - `GET /api/` - Service banner
/// - `/api/profiles/...` - See [`profile_routes`]
/// - `/api/sessions/:session_id/stats` - See [`session_routes`]
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/api", get(health))
        .route("/api/", get(health))
        .nest("/api/profiles", profile_routes())
        .nest("/api/sessions", session_routes())
        .with_state(state)
}

/// The full application: routes plus request timeout, CORS and, when
/// enabled, HTTP tracing.
pub fn api_router(state: ApiState, server: &ServerConfig, features: &FeatureFlags) -> Router {
    let router = api_routes(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()));

    if features.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// No configured origins, or `*`, allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let values: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(values))
}

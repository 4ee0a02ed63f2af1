//! Integration tests for the profile REST API.
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot` over the
//! in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use energy_profile::adapters::http::{api_router, api_routes, ApiState};
use energy_profile::adapters::InMemoryProfileStore;
use energy_profile::config::{FeatureFlags, ServerConfig};
use energy_profile::domain::energy::{Chakra, EnergyCenter, EnergyCenters};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with_limit(max_profiles: u32) -> Router {
    let store = Arc::new(InMemoryProfileStore::new());
    api_routes(ApiState::new(store.clone(), store, max_profiles, false))
}

fn app() -> Router {
    app_with_limit(50)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

async fn post_raw(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

fn create_body(session_id: &str, centers: &EnergyCenters) -> Value {
    json!({ "sessionId": session_id, "energyCenters": centers })
}

fn sample_centers() -> EnergyCenters {
    EnergyCenters {
        root: EnergyCenter::new(60, 70, 30),
        sacral: EnergyCenter::new(55, 65, 25),
        solar_plexus: EnergyCenter::new(75, 80, 20),
        heart: EnergyCenter::new(85, 90, 15),
        throat: EnergyCenter::new(70, 75, 25),
        third_eye: EnergyCenter::new(80, 85, 10),
        crown: EnergyCenter::new(90, 95, 5),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn root_reports_service_banner() {
    let (status, body) = get(&app(), "/api/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Law of One Profile Generator API");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn create_list_get_stats_round_trip() {
    let app = app();
    let centers = sample_centers();

    let (status, created) = post_json(
        &app,
        "/api/profiles",
        create_body("test-session-123", &centers),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["success"], true);
    assert_eq!(created["sessionId"], "test-session-123");
    assert_eq!(created["profile"]["overallBalance"], 80);
    assert_eq!(created["profile"]["overallLevel"], "Developing Soul");
    assert_eq!(created["profile"]["dominantChakra"], "Crown Dominant");
    let profile_id = created["profileId"].as_str().unwrap().to_string();

    let (status, listed) = get(&app, "/api/profiles/test-session-123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["success"], true);
    assert_eq!(listed["sessionId"], "test-session-123");
    let profiles = listed["profiles"].as_array().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0]["id"], profile_id.as_str());
    assert_eq!(profiles[0]["energyCenters"]["heart"]["balance"], 90);
    assert_eq!(profiles[0]["generatedProfile"], created["profile"]);

    let (status, fetched) = get(&app, &format!("/api/profiles/profile/{}", profile_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["profile"]["sessionId"], "test-session-123");
    assert_eq!(fetched["profile"]["createdAt"], fetched["profile"]["updatedAt"]);

    let (status, stats) = get(&app, "/api/sessions/test-session-123/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["stats"]["profileCount"], 1);
    assert_eq!(stats["stats"]["firstVisit"], fetched["profile"]["createdAt"]);
    assert_eq!(stats["stats"]["lastVisit"], fetched["profile"]["createdAt"]);
}

#[tokio::test]
async fn strong_root_case_end_to_end() {
    let centers = EnergyCenters::default().with(Chakra::Root, EnergyCenter::new(80, 70, 10));
    let (status, created) = post_json(&app(), "/api/profiles", create_body("s", &centers)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["profile"]["dominantChakra"], "Root Dominant");
    let traits = created["profile"]["personality"]["traits"].as_array().unwrap();
    assert!(traits.contains(&json!(
        "You have a strong foundation and feel secure in your physical existence."
    )));
}

#[tokio::test]
async fn missing_session_id_is_generated() {
    let app = app();
    let (status, created) = post_json(
        &app,
        "/api/profiles",
        json!({ "energyCenters": EnergyCenters::default() }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let session_id = created["sessionId"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(session_id).is_ok());

    let (_, listed) = get(&app, &format!("/api/profiles/{}", session_id)).await;
    assert_eq!(listed["profiles"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_session_id_is_treated_as_missing() {
    let (status, created) = post_json(
        &app(),
        "/api/profiles",
        create_body("", &EnergyCenters::default()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!created["sessionId"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_values_are_422() {
    let app = app();
    let centers = EnergyCenters::default().with(Chakra::Heart, EnergyCenter::new(150, 50, 30));
    let (status, body) = post_json(&app, "/api/profiles", create_body("s", &centers)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body["message"].as_str().unwrap().contains("heart.frequency"));

    let (_, stats) = get(&app, "/api/sessions/s/stats").await;
    assert_eq!(stats["stats"]["profileCount"], 0);
}

#[tokio::test]
async fn negative_values_are_422() {
    let centers = EnergyCenters::default().with(Chakra::Crown, EnergyCenter::new(50, 50, -1));
    let (status, _) = post_json(&app(), "/api/profiles", create_body("s", &centers)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_center_is_422() {
    let mut centers = serde_json::to_value(EnergyCenters::default()).unwrap();
    centers.as_object_mut().unwrap().remove("thirdEye");
    let (status, body) = post_json(
        &app(),
        "/api/profiles",
        json!({ "sessionId": "s", "energyCenters": centers }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn fractional_value_is_422() {
    let mut centers = serde_json::to_value(EnergyCenters::default()).unwrap();
    centers["root"]["balance"] = json!(50.5);
    let (status, _) = post_json(
        &app(),
        "/api/profiles",
        json!({ "sessionId": "s", "energyCenters": centers }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_client_error_with_envelope() {
    let (status, body) = post_raw(&app(), "/api/profiles", "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn overlong_session_id_is_400() {
    let long = "x".repeat(129);
    let (status, body) = post_json(
        &app(),
        "/api/profiles",
        create_body(&long, &EnergyCenters::default()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = get(&app(), &format!("/api/sessions/{}/stats", long)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn url_reserved_session_ids_are_400() {
    let app = app();
    for raw in ["team#1", "a?b", "a/b", "50%"] {
        let (status, body) = post_json(
            &app,
            "/api/profiles",
            create_body(raw, &EnergyCenters::default()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {:?}", raw);
        assert_eq!(body["success"], false);
    }

    // Percent-decoded path segments go through the same check.
    let (status, _) = get(&app, "/api/profiles/a%2Fb").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = get(&app, "/api/sessions/team%231/stats").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_profile_is_404() {
    let app = app();
    let (status, body) = get(
        &app,
        &format!("/api/profiles/profile/{}", uuid::Uuid::new_v4()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Profile not found");

    let (status, _) = get(&app, "/api/profiles/profile/not-a-uuid").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_session_stats_are_empty() {
    let (status, body) = get(&app(), "/api/sessions/never-seen/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "stats": { "profileCount": 0, "firstVisit": null, "lastVisit": null }
        })
    );
}

#[tokio::test]
async fn unknown_session_history_is_empty() {
    let (status, body) = get(&app(), "/api/profiles/never-seen").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profiles"], json!([]));
}

#[tokio::test]
async fn history_is_newest_first_and_capped() {
    let app = app_with_limit(3);
    let mut ids = Vec::new();
    for balance in [10, 20, 30, 40] {
        let centers = EnergyCenters::uniform(EnergyCenter::new(50, balance, 30));
        let (_, created) = post_json(&app, "/api/profiles", create_body("capped", &centers)).await;
        ids.push(created["profileId"].as_str().unwrap().to_string());
        // distinct creation timestamps
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let (_, listed) = get(&app, "/api/profiles/capped").await;
    let listed_ids: Vec<&str> = listed["profiles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(listed_ids, vec![ids[3].as_str(), ids[2].as_str(), ids[1].as_str()]);

    let (_, stats) = get(&app, "/api/sessions/capped/stats").await;
    assert_eq!(stats["stats"]["profileCount"], 4);
}

#[tokio::test]
async fn sessions_are_isolated() {
    let app = app();
    post_json(&app, "/api/profiles", create_body("alpha", &EnergyCenters::default())).await;
    post_json(&app, "/api/profiles", create_body("beta", &EnergyCenters::default())).await;

    let (_, alpha) = get(&app, "/api/profiles/alpha").await;
    assert_eq!(alpha["profiles"].as_array().unwrap().len(), 1);
    assert_eq!(alpha["profiles"][0]["sessionId"], "alpha");
}

#[tokio::test]
async fn full_router_serves_with_middleware() {
    let store = Arc::new(InMemoryProfileStore::new());
    let app = api_router(
        ApiState::new(store.clone(), store, 50, false),
        &ServerConfig::default(),
        &FeatureFlags::default(),
    );

    let (status, body) = get(&app, "/api/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "1.0.0");
}

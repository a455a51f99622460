//! Integration tests for HTTP handlers
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use application::{
    ApplicationError, ChatService, EcoRouteService, PredictionService,
    ports::{
        DirectionsFailure, DirectionsPort, GeocodeFailure, GeocodingPort, InferencePort,
        InferenceResult, RouteLeg, RouteLogStorePort, TipsPort, TravelProfile, UsageStorePort,
    },
};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use domain::{ChatMessage, Coordinate};
use infrastructure::MemoryStore;
use presentation_http::{routes::create_router, state::AppState};
use serde_json::{Value, json};

/// Geocoder that resolves everything except "Atlantis"
struct StubGeocoder;

#[async_trait]
impl GeocodingPort for StubGeocoder {
    async fn geocode(&self, place: &str) -> Result<Coordinate, GeocodeFailure> {
        if place == "Atlantis" {
            return Err(GeocodeFailure::NotFound(place.to_string()));
        }
        Ok(Coordinate::new_unchecked(13.405, 52.52))
    }
}

#[derive(Clone, Copy)]
enum DirectionsBehavior {
    AllSucceed,
    Unauthorized,
    AllFailLocally,
}

/// Directions provider with scripted behavior
struct StubDirections(DirectionsBehavior);

#[async_trait]
impl DirectionsPort for StubDirections {
    async fn directions(
        &self,
        _from: Coordinate,
        _to: Coordinate,
        profile: TravelProfile,
    ) -> Result<RouteLeg, DirectionsFailure> {
        match self.0 {
            DirectionsBehavior::AllSucceed => Ok(match profile {
                TravelProfile::Driving => RouteLeg {
                    distance_m: 10_000.0,
                    duration_s: 1_200.0,
                },
                TravelProfile::Cycling => RouteLeg {
                    distance_m: 9_500.0,
                    duration_s: 2_400.0,
                },
                TravelProfile::Walking => RouteLeg {
                    distance_m: 7_000.0,
                    duration_s: 5_100.0,
                },
            }),
            DirectionsBehavior::Unauthorized => {
                Err(DirectionsFailure::Unauthorized("invalid key".to_string()))
            },
            DirectionsBehavior::AllFailLocally => {
                Err(DirectionsFailure::Unavailable("timeout".to_string()))
            },
        }
    }
}

#[derive(Clone, Copy)]
enum InferenceBehavior {
    Reply,
    RateLimited,
}

/// Inference engine with scripted behavior
struct StubInference(InferenceBehavior);

#[async_trait]
impl InferencePort for StubInference {
    async fn advise(
        &self,
        _system_prompt: &str,
        _messages: &[ChatMessage],
    ) -> Result<InferenceResult, ApplicationError> {
        match self.0 {
            InferenceBehavior::Reply => Ok(InferenceResult {
                content: "Try switching to LED bulbs.".to_string(),
                model: "stub-model".to_string(),
                tokens_used: Some(42),
                latency_ms: 10,
            }),
            InferenceBehavior::RateLimited => Err(ApplicationError::RateLimited),
        }
    }

    async fn is_healthy(&self) -> bool {
        true
    }

    fn current_model(&self) -> String {
        "stub-model".to_string()
    }
}

fn server_with(directions: DirectionsBehavior, inference: InferenceBehavior) -> TestServer {
    let store = Arc::new(MemoryStore::new());
    let usage_store: Arc<dyn UsageStorePort> = store.clone();
    let route_log_store: Arc<dyn RouteLogStorePort> = store.clone();
    let tips: Arc<dyn TipsPort> = store;

    let inference: Arc<dyn InferencePort> = Arc::new(StubInference(inference));

    let state = AppState {
        eco_route_service: Arc::new(EcoRouteService::new(
            Arc::new(StubGeocoder),
            Arc::new(StubDirections(directions)),
        )),
        prediction_service: PredictionService::new(),
        chat_service: Arc::new(ChatService::new(inference, Arc::clone(&usage_store))),
        usage_store,
        route_log_store,
        tips,
    };

    TestServer::new(create_router(state)).expect("test server")
}

fn default_server() -> TestServer {
    server_with(DirectionsBehavior::AllSucceed, InferenceBehavior::Reply)
}

#[tokio::test]
async fn eco_route_returns_full_option_set() {
    let server = default_server();

    let response = server
        .post("/api/eco/route")
        .json(&json!({"origin": "Berlin", "destination": "Potsdam"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["origin"], "Berlin");
    assert_eq!(body["destination"], "Potsdam");
    assert!(body["timestamp"].is_string());

    let routes = body["routes"].as_array().expect("routes array");
    assert_eq!(routes.len(), 5);
    assert_eq!(routes[0]["name"], "Drive (Gas Car)");
    assert_eq!(routes[0]["type"], "car");
    assert_eq!(routes[4]["name"], "Public Transit");
    assert!(
        routes
            .iter()
            .any(|r| r["recommended"].as_bool() == Some(true))
    );
}

#[tokio::test]
async fn eco_route_empty_origin_is_bad_request() {
    let server = default_server();

    let response = server
        .post("/api/eco/route")
        .json(&json!({"origin": "  ", "destination": "Potsdam"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn eco_route_unknown_place_is_bad_request() {
    let server = default_server();

    let response = server
        .post("/api/eco/route")
        .json(&json!({"origin": "Atlantis", "destination": "Berlin"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .contains("Atlantis")
    );
}

#[tokio::test]
async fn eco_route_unauthorized_provider_is_service_unavailable() {
    let server = server_with(DirectionsBehavior::Unauthorized, InferenceBehavior::Reply);

    let response = server
        .post("/api/eco/route")
        .json(&json!({"origin": "Berlin", "destination": "Potsdam"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["code"], "service_unavailable");
}

#[tokio::test]
async fn eco_route_without_any_route_is_bad_gateway() {
    let server = server_with(DirectionsBehavior::AllFailLocally, InferenceBehavior::Reply);

    let response = server
        .post("/api/eco/route")
        .json(&json!({"origin": "Berlin", "destination": "Potsdam"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["code"], "bad_gateway");
}

#[tokio::test]
async fn prediction_returns_expected_value() {
    let server = default_server();

    let response = server
        .post("/api/predictions/energy")
        .json(&json!({"temperature": 20.0, "day": 3, "usage_prev": 40.0}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["predicted_usage"], 47.0);
    assert_eq!(body["confidence"], 0.92);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn prediction_rejects_invalid_day() {
    let server = default_server();

    let response = server
        .post("/api/predictions/energy")
        .json(&json!({"temperature": 20.0, "day": 32, "usage_prev": 40.0}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn usage_history_is_seeded_for_demo_user() {
    let server = default_server();

    let response = server.get("/api/usage/history/demo").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let records: Vec<Value> = response.json();
    assert_eq!(records.len(), 30);
    assert_eq!(records[0]["user_id"], "demo");
}

#[tokio::test]
async fn usage_history_is_empty_for_unknown_user() {
    let server = default_server();

    let response = server.get("/api/usage/history/nobody").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let records: Vec<Value> = response.json();
    assert!(records.is_empty());
}

#[tokio::test]
async fn added_usage_record_appears_in_history() {
    let server = default_server();

    let response = server
        .post("/api/usage")
        .json(&json!({
            "user_id": "u1",
            "date": "2024-02-01",
            "energy_kwh": 41.0,
            "water_liters": 230.0
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.get("/api/usage/history/u1").await;
    let records: Vec<Value> = response.json();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["energy_kwh"], 41.0);
}

#[tokio::test]
async fn negative_usage_is_rejected() {
    let server = default_server();

    let response = server
        .post("/api/usage")
        .json(&json!({
            "user_id": "u1",
            "date": "2024-02-01",
            "energy_kwh": -1.0
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn route_log_round_trip() {
    let server = default_server();

    let response = server
        .post("/api/routes/log")
        .json(&json!({
            "user_id": "u1",
            "origin": "New York",
            "destination": "Boston",
            "picked_route": "Public Transit",
            "saved_co2_kg": 52.2,
            "distance_km": 346.0,
            "duration_min": 312
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let created: Value = response.json();
    assert!(created["id"].is_string());
    assert!(created["timestamp"].is_string());

    let response = server.get("/api/routes/history/u1").await;
    let logs: Vec<Value> = response.json();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["picked_route"], "Public Transit");
}

#[tokio::test]
async fn daily_tips_are_served() {
    let server = default_server();

    let response = server.get("/api/tips/daily").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let tips: Vec<Value> = response.json();
    assert_eq!(tips.len(), 10);
    assert!(tips[0]["impact"].is_string());
}

#[tokio::test]
async fn chat_returns_assistant_reply() {
    let server = default_server();

    let response = server
        .post("/api/chat")
        .json(&json!({
            "messages": [{"role": "user", "content": "How do I save energy?"}],
            "user_id": "demo"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Try switching to LED bulbs.");
    assert_eq!(body["model"], "stub-model");
    assert_eq!(body["tokens"], 42);
}

#[tokio::test]
async fn chat_with_empty_conversation_is_bad_request() {
    let server = default_server();

    let response = server.post("/api/chat").json(&json!({"messages": []})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_rate_limit_maps_to_429() {
    let server = server_with(DirectionsBehavior::AllSucceed, InferenceBehavior::RateLimited);

    let response = server
        .post("/api/chat")
        .json(&json!({
            "messages": [{"role": "user", "content": "hi"}]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn health_check_is_ok() {
    let server = default_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn readiness_reports_assistant_status() {
    let server = default_server();

    let response = server.get("/ready").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["assistant"]["healthy"], true);
    assert_eq!(body["assistant"]["model"], "stub-model");
}

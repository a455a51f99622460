//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Eco route comparison
        .route("/api/eco/route", post(handlers::eco_route::compare_routes))
        // Energy prediction
        .route(
            "/api/predictions/energy",
            post(handlers::predictions::predict_energy),
        )
        // Consumption history
        .route(
            "/api/usage/history/{user_id}",
            get(handlers::usage::usage_history),
        )
        .route("/api/usage", post(handlers::usage::add_usage_record))
        // Route history
        .route(
            "/api/routes/history/{user_id}",
            get(handlers::route_logs::route_history),
        )
        .route("/api/routes/log", post(handlers::route_logs::add_route_log))
        // Sustainability tips
        .route("/api/tips/daily", get(handlers::tips::daily_tips))
        // AI assistant
        .route("/api/chat", post(handlers::chat::chat))
        // Attach state
        .with_state(state)
}

//! EcoVision HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{
    ChatService, EcoRouteService, PredictionService,
    ports::{DirectionsPort, GeocodingPort, InferencePort, RouteLogStorePort, TipsPort, UsageStorePort},
};
use infrastructure::{AppConfig, MemoryStore, OpenAiInferenceAdapter, RoutingAdapter};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecovision_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🌱 EcoVision v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        routing_key_configured = !config.routing.api_key.is_empty(),
        assistant_key_configured = !config.assistant.api_key.is_empty(),
        "Configuration loaded"
    );

    // Provider adapters
    let routing_adapter = Arc::new(
        RoutingAdapter::new(&config.routing, &config.geocoding)
            .map_err(|e| anyhow::anyhow!("Failed to initialize routing clients: {e}"))?,
    );
    let geocoding: Arc<dyn GeocodingPort> = routing_adapter.clone();
    let directions: Arc<dyn DirectionsPort> = routing_adapter;

    let inference: Arc<dyn InferencePort> = Arc::new(
        OpenAiInferenceAdapter::new(config.assistant.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize inference: {e}"))?,
    );

    // Storage
    let store = Arc::new(MemoryStore::new());
    let usage_store: Arc<dyn UsageStorePort> = store.clone();
    let route_log_store: Arc<dyn RouteLogStorePort> = store.clone();
    let tips: Arc<dyn TipsPort> = store;

    // Services
    let eco_route_service = Arc::new(EcoRouteService::new(geocoding, directions));
    let chat_service = Arc::new(ChatService::new(inference, Arc::clone(&usage_store)));

    let state = AppState {
        eco_route_service,
        prediction_service: PredictionService::new(),
        chat_service,
        usage_store,
        route_log_store,
        tips,
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }

    info!(
        "Waiting up to {}s for in-flight requests",
        timeout.as_secs()
    );
}

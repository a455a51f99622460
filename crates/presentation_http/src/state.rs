//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ChatService, EcoRouteService, PredictionService,
    ports::{RouteLogStorePort, TipsPort, UsageStorePort},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Route comparison service
    pub eco_route_service: Arc<EcoRouteService>,
    /// Energy usage predictor
    pub prediction_service: PredictionService,
    /// Sustainability assistant service
    pub chat_service: Arc<ChatService>,
    /// Consumption record store
    pub usage_store: Arc<dyn UsageStorePort>,
    /// Chosen-route history store
    pub route_log_store: Arc<dyn RouteLogStorePort>,
    /// Tip catalogue
    pub tips: Arc<dyn TipsPort>,
}

//! Application services

mod chat_service;
mod eco_route_service;
mod prediction_service;

pub use chat_service::ChatService;
pub use eco_route_service::{EcoRouteError, EcoRouteService};
pub use prediction_service::{Prediction, PredictionService};

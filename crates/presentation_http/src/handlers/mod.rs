//! HTTP handlers

pub mod chat;
pub mod eco_route;
pub mod health;
pub mod predictions;
pub mod route_logs;
pub mod tips;
pub mod usage;

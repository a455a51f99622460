//! Infrastructure layer for EcoVision
//!
//! Configuration loading and adapters that implement the application ports
//! over the routing integration, the inference engine, and in-memory storage.

pub mod adapters;
pub mod config;
pub mod demo_data;

pub use adapters::{MemoryStore, OpenAiInferenceAdapter, RoutingAdapter};
pub use config::{AppConfig, ServerConfig};

//! AI inference core for EcoVision
//!
//! Provides the [`InferenceEngine`] abstraction and an OpenAI-compatible
//! chat-completions client used by the sustainability assistant.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use openai::OpenAiChatEngine;
pub use ports::{
    InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage,
};

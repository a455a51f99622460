//! Chat handlers

use axum::{Json, extract::State};
use domain::ChatMessage;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Conversation so far, newest last
    pub messages: Vec<ChatMessage>,
    /// Optional user whose metrics personalize the advice
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Assistant reply
    pub message: String,
    /// Model used
    pub model: String,
    /// Tokens used (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<u32>,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

/// Handle a chat request
#[instrument(skip(state, request), fields(message_count = request.messages.len()))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let result = state
        .chat_service
        .advise(&request.messages, request.user_id.as_deref())
        .await?;

    Ok(Json(ChatResponse {
        message: result.content,
        model: result.model,
        tokens: result.tokens_used,
        latency_ms: result.latency_ms,
    }))
}

//! OpenAI-compatible chat-completions client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};

/// Chat-completions client for OpenAI-compatible providers
#[derive(Debug)]
pub struct OpenAiChatEngine {
    client: Client,
    config: InferenceConfig,
}

impl OpenAiChatEngine {
    /// Create a new engine with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("EcoVision/1.0")
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn map_send_error(&self, err: &reqwest::Error) -> InferenceError {
        if err.is_timeout() {
            InferenceError::Timeout(self.config.timeout_secs)
        } else if err.is_connect() {
            InferenceError::ConnectionFailed(err.to_string())
        } else {
            InferenceError::RequestFailed(err.to_string())
        }
    }
}

#[async_trait]
impl InferenceEngine for OpenAiChatEngine {
    #[instrument(skip(self, request), fields(message_count = request.messages.len()))]
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError> {
        if self.config.api_key.is_empty() {
            return Err(InferenceError::Unauthorized(
                "API key not configured".to_string(),
            ));
        }

        let body = WireRequest {
            model: request
                .model
                .unwrap_or_else(|| self.config.model.clone()),
            messages: request.messages,
            max_completion_tokens: request
                .max_completion_tokens
                .unwrap_or(self.config.max_completion_tokens),
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        debug!(model = %body.model, "Requesting chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(InferenceError::Unauthorized(format!("HTTP {status}")));
            },
            StatusCode::TOO_MANY_REQUESTS => return Err(InferenceError::RateLimited),
            status if status.is_server_error() => {
                return Err(InferenceError::ServerError(format!("HTTP {status}")));
            },
            status if !status.is_success() => {
                return Err(InferenceError::RequestFailed(format!("HTTP {status}")));
            },
            _ => {},
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let choice = wire
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::InvalidResponse("no choices returned".to_string()))?;

        Ok(InferenceResponse {
            content: choice.message.content.unwrap_or_default(),
            model: wire.model,
            usage: wire.usage,
            finish_reason: choice.finish_reason,
        })
    }

    async fn is_healthy(&self) -> bool {
        if self.config.api_key.is_empty() {
            return false;
        }
        let url = format!("{}/models", self.config.base_url);
        match self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

/// Request body in OpenAI wire format
#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<InferenceMessage>,
    max_completion_tokens: u32,
}

/// Response body in OpenAI wire format
#[derive(Debug, Deserialize)]
struct WireResponse {
    model: String,
    choices: Vec<WireChoice>,
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_response_parsing() {
        let json = r#"{
            "model": "gpt-5",
            "choices": [{
                "message": { "role": "assistant", "content": "Use LED bulbs." },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 120, "completion_tokens": 18, "total_tokens": 138 }
        }"#;
        let wire: WireResponse = serde_json::from_str(json).expect("parse");
        assert_eq!(wire.model, "gpt-5");
        assert_eq!(
            wire.choices[0].message.content.as_deref(),
            Some("Use LED bulbs.")
        );
        assert_eq!(wire.usage.map(|u| u.total_tokens), Some(138));
    }

    #[test]
    fn wire_response_without_usage() {
        let json = r#"{"model": "gpt-5", "choices": []}"#;
        let wire: WireResponse = serde_json::from_str(json).expect("parse");
        assert!(wire.choices.is_empty());
        assert!(wire.usage.is_none());
    }

    #[tokio::test]
    async fn missing_api_key_is_unauthorized_without_network() {
        let engine = OpenAiChatEngine::new(InferenceConfig::default()).expect("engine");
        let err = engine
            .generate(InferenceRequest::with_system("sys", &[]))
            .await
            .expect_err("should fail");
        assert!(matches!(err, InferenceError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn missing_api_key_is_unhealthy() {
        let engine = OpenAiChatEngine::new(InferenceConfig::default()).expect("engine");
        assert!(!engine.is_healthy().await);
    }
}

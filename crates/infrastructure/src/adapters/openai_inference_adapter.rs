//! OpenAI inference adapter - implements InferencePort using ai_core

use std::time::Instant;

use ai_core::{InferenceConfig, InferenceEngine, InferenceError, InferenceRequest, OpenAiChatEngine};
use application::{
    ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use domain::ChatMessage;
use tracing::{debug, instrument};

/// Shown when the provider returns an empty completion
const EMPTY_COMPLETION_FALLBACK: &str =
    "I apologize, but I couldn't generate a response. Please try again.";

/// Adapter for OpenAI-compatible inference providers
#[derive(Debug)]
pub struct OpenAiInferenceAdapter {
    engine: OpenAiChatEngine,
}

impl OpenAiInferenceAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let engine = OpenAiChatEngine::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { engine })
    }

    fn map_error(err: InferenceError) -> ApplicationError {
        match err {
            InferenceError::Unauthorized(msg) => ApplicationError::NotAuthorized(msg),
            InferenceError::RateLimited => ApplicationError::RateLimited,
            InferenceError::Timeout(secs) => {
                ApplicationError::Timeout(format!("inference after {secs}s"))
            },
            InferenceError::ConnectionFailed(msg) | InferenceError::ServerError(msg) => {
                ApplicationError::ExternalService(msg)
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for OpenAiInferenceAdapter {
    #[instrument(skip(self, system_prompt, messages), fields(message_count = messages.len()))]
    async fn advise(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let request = InferenceRequest::with_system(system_prompt, messages);
        let response = self
            .engine
            .generate(request)
            .await
            .map_err(Self::map_error)?;

        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(
            model = %response.model,
            tokens = ?response.usage.map(|u| u.total_tokens),
            latency_ms,
            "Inference completed"
        );

        let content = if response.content.is_empty() {
            EMPTY_COMPLETION_FALLBACK.to_string()
        } else {
            response.content
        };

        Ok(InferenceResult {
            content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.engine.is_healthy().await
    }

    fn current_model(&self) -> String {
        self.engine.model().to_string()
    }
}

//! Chat service - sustainability assistant conversations

use std::{fmt, sync::Arc};

use domain::ChatMessage;
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult, UsageStorePort},
};

const SYSTEM_PROMPT: &str = "You are EcoVision AI, a friendly and knowledgeable sustainability assistant.
Your goal is to help users reduce their environmental impact through practical, actionable advice.

Key responsibilities:
- Provide personalized sustainability tips based on user data
- Explain complex environmental concepts in simple terms
- Encourage positive environmental actions without being preachy
- Be supportive and celebrate progress
- Offer specific, measurable suggestions when possible

Guidelines:
- Keep responses concise (2-3 paragraphs max)
- Use encouraging, positive language
- Reference specific numbers when relevant
- Suggest concrete next steps";

/// Service for handling assistant conversations
pub struct ChatService {
    inference: Arc<dyn InferencePort>,
    usage_store: Arc<dyn UsageStorePort>,
}

impl fmt::Debug for ChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatService").finish_non_exhaustive()
    }
}

impl ChatService {
    /// Create a new chat service
    pub fn new(inference: Arc<dyn InferencePort>, usage_store: Arc<dyn UsageStorePort>) -> Self {
        Self {
            inference,
            usage_store,
        }
    }

    /// Generate sustainability advice for a conversation
    ///
    /// When a user id is given, the user's latest consumption metrics are
    /// appended to the system prompt so the advice can reference them.
    #[instrument(skip(self, messages), fields(message_count = messages.len()))]
    pub async fn advise(
        &self,
        messages: &[ChatMessage],
        user_id: Option<&str>,
    ) -> Result<InferenceResult, ApplicationError> {
        if messages.is_empty() {
            return Err(ApplicationError::Domain(
                domain::DomainError::ValidationError("messages must not be empty".to_string()),
            ));
        }

        let mut system = SYSTEM_PROMPT.to_string();
        if let Some(user_id) = user_id {
            if let Some(context) = self.user_context(user_id).await? {
                system.push_str(&context);
            }
        }

        let result = self.inference.advise(&system, messages).await?;

        debug!(
            model = %result.model,
            tokens = ?result.tokens_used,
            latency_ms = result.latency_ms,
            "Chat response generated"
        );

        Ok(result)
    }

    /// Render the latest usage record as a system prompt fragment
    async fn user_context(&self, user_id: &str) -> Result<Option<String>, ApplicationError> {
        let records = self.usage_store.records_for(user_id).await?;
        let Some(latest) = records.last() else {
            return Ok(None);
        };

        let mut context = String::from("\n\nUser's Current Metrics:");
        context.push_str(&format!(
            "\n- Energy usage: {:.1} kWh/day",
            latest.energy_kwh
        ));
        if let Some(water) = latest.water_liters {
            context.push_str(&format!("\n- Water usage: {water:.0} liters/day"));
        }
        if let Some(co2) = latest.co2_kg {
            context.push_str(&format!("\n- CO₂ emissions: {co2:.1} kg/day"));
        }
        Ok(Some(context))
    }

    /// Check if the underlying inference backend is healthy
    pub async fn is_healthy(&self) -> bool {
        self.inference.is_healthy().await
    }

    /// Get the current model name
    pub fn current_model(&self) -> String {
        self.inference.current_model()
    }
}

//! Configuration for the inference engine

use serde::{Deserialize, Serialize};

/// Configuration for the OpenAI-compatible inference provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the chat-completions API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (opaque credential supplied externally)
    #[serde(default)]
    pub api_key: String,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Cap on generated tokens, keeps responses concise
    #[serde(default = "default_max_completion_tokens")]
    pub max_completion_tokens: u32,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-5".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_max_completion_tokens() -> u32 {
    500
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            max_completion_tokens: default_max_completion_tokens(),
        }
    }
}

impl InferenceConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-5");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_completion_tokens, 500);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn testing_config_sets_key_and_short_timeout() {
        let config = InferenceConfig::for_testing();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn deserializes_partial_config() {
        let json = r#"{"api_key": "sk-abc", "model": "gpt-4o-mini"}"#;
        let config: InferenceConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.api_key, "sk-abc");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
    }
}

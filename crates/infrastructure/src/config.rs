//! Application configuration
//!
//! Layered config: built-in defaults, an optional `config.toml`, then
//! `ECOVISION__*` environment overrides. The provider credentials can also
//! be supplied through the conventional `OPENROUTE_API_KEY` and
//! `OPENAI_API_KEY` environment variables.

use ai_core::InferenceConfig;
use integration_routing::{NominatimConfig, RoutingConfig};
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means permissive (development mode)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Seconds to wait for in-flight requests on shutdown
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_shutdown_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: default_shutdown_timeout_secs(),
        }
    }
}

/// Root application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Directions provider configuration
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Geocoding provider configuration
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Assistant inference configuration
    #[serde(default)]
    pub assistant: InferenceConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional file, and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            // Nested overrides, e.g. ECOVISION__SERVER__PORT=8080
            .add_source(
                config::Environment::with_prefix("ECOVISION")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut app_config: Self = builder.build()?.try_deserialize()?;

        // Conventional credential variables take effect when the layered
        // sources left the keys empty
        if app_config.routing.api_key.is_empty() {
            if let Ok(key) = std::env::var("OPENROUTE_API_KEY") {
                app_config.routing.api_key = key;
            }
        }
        if app_config.assistant.api_key.is_empty() {
            if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                app_config.assistant.api_key = key;
            }
        }

        Ok(app_config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        self.routing.validate()?;
        if self.geocoding.base_url.is_empty() {
            return Err("geocoding.base_url must not be empty".to_string());
        }
        if self.server.host.is_empty() {
            return Err("server.host must not be empty".to_string());
        }
        Ok(())
    }
}

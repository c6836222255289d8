use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PpeError, Result};

/// Top-level configuration for the PPE Marts service.
///
/// Loaded from `~/.ppemarts/config.toml` by default. Every section has
/// defaults, so an empty or partial file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PpeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl PpeConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PpeConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Reject values the services cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.recommendation.limit == 0 {
            return Err(PpeError::Config(
                "recommendation.limit must be at least 1".to_string(),
            ));
        }
        if self.assistant.timeout_secs == 0 {
            return Err(PpeError::Config(
                "assistant.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.assistant.max_message_length == Some(0) {
            return Err(PpeError::Config(
                "assistant.max_message_length must be at least 1 when set".to_string(),
            ));
        }
        if self.calculator.max_workers == 0 || self.calculator.max_work_days == 0 {
            return Err(PpeError::Config(
                "calculator bounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// General process settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Address the HTTP server binds to.
    pub host: String,
    /// HTTP server port.
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3030,
        }
    }
}

/// Chat-completion settings for the safety assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Name of the environment variable holding the API key. When the
    /// variable is unset or empty the canned fallback replies are used.
    pub api_key_env: String,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    pub model: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    pub temperature: f32,
    /// Timeout for one completion call.
    pub timeout_secs: u64,
    /// Longest accepted user message, in characters. Unset means any length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_message_length: Option<usize>,
    /// Forward only this many of the most recent history turns. Unset
    /// forwards the whole history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_history_turns: Option<usize>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 500,
            temperature: 0.7,
            timeout_secs: 15,
            max_message_length: None,
            max_history_turns: None,
        }
    }
}

/// What the recommender returns when no keyword matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackMode {
    /// A uniform random sample of the catalog.
    #[default]
    RandomSample,
    /// No recommendations at all.
    Empty,
}

/// Product recommendation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Maximum products per response.
    pub limit: usize,
    pub fallback: FallbackMode,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            limit: 4,
            fallback: FallbackMode::RandomSample,
        }
    }
}

/// Bounds applied to calculator input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub max_workers: u32,
    pub max_work_days: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_workers: 100_000,
            max_work_days: 366,
        }
    }
}

/// HTTP server limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Requests per second accepted on the API routes.
    pub rate_limit_per_sec: u64,
    /// Maximum request body size.
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rate_limit_per_sec: 50,
            body_limit_bytes: 64 * 1024,
        }
    }
}

//! Configuration management for suggestcheck
//!
//! Every field has a default, so an empty (or absent) configuration runs the
//! smoke test against the stock local Ollama endpoint. A TOML file can
//! override any subset of the settings.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Default generation endpoint (Ollama's non-chat completion API)
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:11434/api/generate";

/// Default model identifier sent in the request payload
pub const DEFAULT_MODEL: &str = "llama3.1:8b";

/// Upper bound for the request timeout
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub checks: ChecksConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Generation endpoint settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    1.0
}

fn default_timeout() -> u64 {
    30
}

/// Settings for the suggestion check
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChecksConfig {
    /// Prior chat text interpolated into the suggestion prompt
    #[serde(default = "default_conversation_context")]
    pub conversation_context: String,
    /// Tokens that must not appear in generated suggestions (case-insensitive)
    #[serde(default = "default_forbidden_keywords")]
    pub forbidden_keywords: Vec<String>,
    /// Treat a forbidden keyword hit as a failure instead of a warning
    #[serde(default)]
    pub fail_on_forbidden_keywords: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            conversation_context: default_conversation_context(),
            forbidden_keywords: default_forbidden_keywords(),
            fail_on_forbidden_keywords: false,
        }
    }
}

fn default_conversation_context() -> String {
    crate::prompt::CONVERSATION_CONTEXT.to_string()
}

fn default_forbidden_keywords() -> Vec<String> {
    ["translation", "translate", "translated"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Observability configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// stdout carries the report, so keep stderr quiet unless asked
fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::AppResult<Self> {
        let path_display = path.as_ref().display().to_string();

        // Phase 1: Read file (preserves io::Error context)
        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            crate::error::AppError::ConfigFileRead {
                path: path_display.clone(),
                source,
            }
        })?;

        // Phase 2: Parse TOML (preserves toml::de::Error context)
        let config: Self = toml::from_str(&content).map_err(|source| {
            crate::error::AppError::ConfigParseFailed {
                path: path_display.clone(),
                source,
            }
        })?;

        // Phase 3: Validate parsed config
        config
            .validate()
            .map_err(|e| crate::error::AppError::ConfigValidationFailed {
                path: path_display,
                reason: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.as_ref().display(),
            endpoint = %config.endpoint.url,
            model = %config.endpoint.model,
            "Loaded configuration file"
        );

        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to built-in defaults
    pub fn load(path: Option<&str>) -> crate::error::AppResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!("No configuration file given, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration after parsing
    ///
    /// Called by `from_file()` and `from_str()`; call it explicitly when a
    /// `Config` is assembled by hand.
    pub fn validate(&self) -> crate::error::AppResult<()> {
        let endpoint = &self.endpoint;

        if !endpoint.url.starts_with("http://") && !endpoint.url.starts_with("https://") {
            return Err(crate::error::AppError::Config(format!(
                "endpoint.url '{}' must start with 'http://' or 'https://'.",
                endpoint.url
            )));
        }

        if endpoint.model.trim().is_empty() {
            return Err(crate::error::AppError::Config(
                "endpoint.model must not be empty.".to_string(),
            ));
        }

        // Standard LLM sampling range
        if !endpoint.temperature.is_finite()
            || endpoint.temperature < 0.0
            || endpoint.temperature > 2.0
        {
            return Err(crate::error::AppError::Config(format!(
                "endpoint.temperature {} must be a finite number between 0.0 and 2.0.",
                endpoint.temperature
            )));
        }

        if endpoint.timeout_seconds == 0 {
            return Err(crate::error::AppError::Config(format!(
                "endpoint.timeout_seconds must be greater than 0, got {}",
                endpoint.timeout_seconds
            )));
        }
        if endpoint.timeout_seconds > MAX_TIMEOUT_SECONDS {
            return Err(crate::error::AppError::Config(format!(
                "endpoint.timeout_seconds cannot exceed {} seconds, got {}",
                MAX_TIMEOUT_SECONDS, endpoint.timeout_seconds
            )));
        }

        // An empty keyword matches every response
        if let Some(index) = self
            .checks
            .forbidden_keywords
            .iter()
            .position(|k| k.trim().is_empty())
        {
            return Err(crate::error::AppError::Config(format!(
                "checks.forbidden_keywords[{}] must not be empty.",
                index
            )));
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = crate::error::AppError;

    fn from_str(toml_str: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(toml_str).map_err(|source| {
            crate::error::AppError::ConfigParseFailed {
                path: "<string>".to_string(),
                source,
            }
        })?;

        config.validate()?;
        Ok(config)
    }
}

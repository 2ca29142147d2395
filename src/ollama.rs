//! Client for Ollama's `/api/generate` endpoint
//!
//! One request, one response: streaming is always disabled so the whole
//! completion arrives as a single JSON object.

use crate::config::EndpointConfig;
use crate::error::GenerationError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body of a generation request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub temperature: f64,
}

impl GenerateRequest {
    /// Non-streaming request for `prompt` using the endpoint's model and temperature
    pub fn new(endpoint: &EndpointConfig, prompt: String) -> Self {
        Self {
            model: endpoint.model.clone(),
            prompt,
            stream: false,
            temperature: endpoint.temperature,
        }
    }
}

/// Body of a successful generation response
///
/// Only `response` matters to the checks; the rest is kept for logging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

/// Upper bound for establishing the TCP connection
pub const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect timeout for a request timeout: half of it, capped at `MAX_CONNECT_TIMEOUT`
pub fn connect_timeout(timeout_seconds: u64) -> Duration {
    (Duration::from_secs(timeout_seconds) / 2).min(MAX_CONNECT_TIMEOUT)
}

/// HTTP client bound to a single generation endpoint
pub struct OllamaClient {
    http: reqwest::Client,
    url: String,
    timeout_seconds: u64,
}

impl OllamaClient {
    /// Build a client whose every request is bounded by the endpoint timeout
    ///
    /// The connect phase gets a shorter bound so a silent host is reported
    /// as unreachable rather than as a slow generation.
    pub fn new(endpoint: &EndpointConfig) -> crate::error::AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(endpoint.timeout_seconds))
            .connect_timeout(connect_timeout(endpoint.timeout_seconds))
            .build()
            .map_err(|e| {
                crate::error::AppError::Internal(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            url: endpoint.url.clone(),
            timeout_seconds: endpoint.timeout_seconds,
        })
    }

    /// `host:port` of the endpoint, for operator-facing messages
    pub fn authority(&self) -> String {
        match reqwest::Url::parse(&self.url) {
            Ok(url) => match (url.host_str(), url.port_or_known_default()) {
                (Some(host), Some(port)) => format!("{}:{}", host, port),
                (Some(host), None) => host.to_string(),
                _ => self.url.clone(),
            },
            Err(_) => self.url.clone(),
        }
    }

    /// Send one generation request
    ///
    /// Anything but HTTP 200 is an error carrying the raw body.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerationError> {
        tracing::debug!(
            endpoint = %self.url,
            model = %request.model,
            prompt_length = request.prompt.len(),
            temperature = request.temperature,
            "Sending generation request"
        );

        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %self.url, error = %e, "Generation request failed");
                GenerationError::from_transport(&self.url, self.timeout_seconds, e)
            })?;

        let status = response.status();
        tracing::debug!(endpoint = %self.url, status = %status, "Generation response received");

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::from_body_read(&self.url, self.timeout_seconds, e))?;

        if status != StatusCode::OK {
            tracing::warn!(
                endpoint = %self.url,
                status = %status,
                body_length = body.len(),
                "Generation endpoint returned non-200 status"
            );
            return Err(GenerationError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| GenerationError::InvalidBody {
                endpoint: self.url.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            endpoint = %self.url,
            model = ?parsed.model,
            created_at = ?parsed.created_at,
            done = ?parsed.done,
            has_response = parsed.response.is_some(),
            "Parsed generation response"
        );

        Ok(parsed)
    }
}

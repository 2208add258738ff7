//! Ollama client configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Local Ollama endpoint used when no override is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Model requested when no override is configured
pub const DEFAULT_MODEL: &str = "phi3";

/// Upper bound in seconds on one generation request; single attempt, no retry
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the Ollama generation client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl OllamaConfig {
    /// Create configuration from environment variables.
    ///
    /// `OLLAMA_BASE_URL` and `OLLAMA_MODEL` are both optional; the defaults
    /// point at a phi3 model on a local instance.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self::new(base_url, model)
    }

    /// Create configuration with explicit values
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL)
    }
}

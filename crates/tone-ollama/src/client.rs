//! Ollama client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use tone_core::{Error, ModelReply, Result, TextGenerator};

use crate::config::OllamaConfig;

/// Client for a locally hosted Ollama generation endpoint.
///
/// One awaited `POST /api/generate` per call, full (non-streamed) response,
/// no retry. Every outcome comes back as a [`ModelReply`]; the only failable
/// operation is constructing the client itself.
pub struct OllamaClient {
    config: OllamaConfig,
    client: Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

impl OllamaClient {
    /// Default model served by the local instance
    pub const PHI3: &'static str = "phi3";

    /// Create a new Ollama client from configuration
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| Error::Configuration(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new Ollama client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(OllamaConfig::from_env())
    }

    /// Set the model to use for generation
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Perform one generation request.
    async fn perform_generate(&self, prompt: &str) -> ModelReply {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        let url = format!("{}/api/generate", self.config.base_url);
        debug!(model = %self.config.model, url = %url, "sending generation request");

        let response = match self.client.post(&url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "generation request never completed");
                return ModelReply::Unreachable(describe_transport_fault(&e));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "generation response body could not be read");
                return ModelReply::Unreachable(describe_transport_fault(&e));
            }
        };

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "generation service answered with an error status");
            return ModelReply::HttpError {
                status: status.as_u16(),
                body,
            };
        }

        parse_body(&body)
    }
}

/// Assemble a reply from a 200 response body.
///
/// The service may answer with a single object or a sequence of chunk
/// objects; anything else passes through as the raw body text.
fn parse_body(body: &str) -> ModelReply {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(chunks)) => ModelReply::Text(
            chunks
                .iter()
                .filter_map(|chunk| chunk.get("response").and_then(Value::as_str))
                .collect(),
        ),
        Ok(Value::Object(fields)) => ModelReply::Text(
            fields
                .get("response")
                .and_then(Value::as_str)
                .unwrap_or("No response found")
                .to_string(),
        ),
        Ok(_) | Err(_) => ModelReply::RawBody(body.to_string()),
    }
}

fn describe_transport_fault(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed, is Ollama running? ({})", e)
    } else {
        e.to_string()
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> ModelReply {
        self.perform_generate(prompt).await
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_unstreamed() {
        let request = GenerateRequest {
            model: "phi3",
            prompt: "Rewrite this email",
            stream: false,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"phi3\""));
        assert!(json.contains("\"prompt\":\"Rewrite this email\""));
        assert!(json.contains("\"stream\":false"));
    }

    #[test]
    fn single_object_body_yields_response_field() {
        let reply = parse_body(r#"{"response":"ok","done":true}"#);
        assert_eq!(reply, ModelReply::Text("ok".to_string()));
    }

    #[test]
    fn object_without_response_field_yields_placeholder() {
        let reply = parse_body(r#"{"done":true}"#);
        assert_eq!(reply, ModelReply::Text("No response found".to_string()));
    }

    #[test]
    fn chunk_sequence_concatenates_in_order() {
        let body = r#"[{"response":"Dear "},{"response":"team,"},{"done":true}]"#;
        assert_eq!(parse_body(body), ModelReply::Text("Dear team,".to_string()));
    }

    #[test]
    fn unparseable_body_passes_through_raw() {
        let reply = parse_body("model warming up, try again");
        assert_eq!(
            reply,
            ModelReply::RawBody("model warming up, try again".to_string())
        );
    }

    #[test]
    fn scalar_json_body_passes_through_raw() {
        assert_eq!(parse_body("42"), ModelReply::RawBody("42".to_string()));
    }

    #[test]
    fn with_model_overrides_the_default() {
        let client = OllamaClient::new(OllamaConfig::default())
            .unwrap()
            .with_model("phi3:mini");
        assert_eq!(client.model_id(), "phi3:mini");
    }
}

//! Text generation trait and reply types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of one generation request.
///
/// Every failure mode is a value, not an error: the generate contract never
/// fails in type, so the presentation layer can always render something
/// inline. The tag lets later stages branch on what actually happened
/// instead of sniffing marker prefixes out of display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelReply {
    /// Text assembled from a well-formed service response
    Text(String),
    /// Status 200 but the body was not the expected JSON; passed through raw
    RawBody(String),
    /// The service answered with a non-200 status
    HttpError { status: u16, body: String },
    /// The request never completed (connection refused, timeout, DNS)
    Unreachable(String),
}

impl ModelReply {
    /// True for replies that never carried generated text.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ModelReply::HttpError { .. } | ModelReply::Unreachable(_)
        )
    }

    /// Generated text when the reply carries any, raw bodies included.
    pub fn text(&self) -> Option<&str> {
        match self {
            ModelReply::Text(text) | ModelReply::RawBody(text) => Some(text),
            _ => None,
        }
    }

    /// Render the reply for inline display: success text as-is, failures as
    /// marker-prefixed strings carrying the status code or fault description.
    pub fn render(&self) -> String {
        match self {
            ModelReply::Text(text) | ModelReply::RawBody(text) => text.clone(),
            ModelReply::HttpError { status, body } => {
                format!("Error: {} - {}", status, body)
            }
            ModelReply::Unreachable(fault) => {
                format!("Error: generation service unreachable ({})", fault)
            }
        }
    }
}

/// Trait for services that turn a prompt into text (e.g. a local Ollama
/// instance).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one generation request.
    ///
    /// Infallible by contract: transport and service failures come back as
    /// [`ModelReply`] variants, never as errors.
    async fn generate(&self, prompt: &str) -> ModelReply;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_renders_verbatim() {
        let reply = ModelReply::Text("Dear team,".to_string());
        assert_eq!(reply.render(), "Dear team,");
        assert!(!reply.is_failure());
    }

    #[test]
    fn raw_body_renders_verbatim() {
        let reply = ModelReply::RawBody("not json at all".to_string());
        assert_eq!(reply.render(), "not json at all");
        assert_eq!(reply.text(), Some("not json at all"));
    }

    #[test]
    fn http_error_renders_with_status() {
        let reply = ModelReply::HttpError {
            status: 500,
            body: "internal".to_string(),
        };
        assert!(reply.is_failure());
        assert_eq!(reply.text(), None);

        let rendered = reply.render();
        assert!(rendered.starts_with("Error:"));
        assert!(rendered.contains("500"));
    }

    #[test]
    fn unreachable_renders_with_fault() {
        let reply = ModelReply::Unreachable("connection refused".to_string());
        assert!(reply.is_failure());

        let rendered = reply.render();
        assert!(rendered.starts_with("Error:"));
        assert!(rendered.contains("connection refused"));
    }
}

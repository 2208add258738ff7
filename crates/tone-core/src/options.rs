//! Per-analysis options

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Models the generation service is allowed to run
pub const SUPPORTED_MODELS: &[&str] = &["phi3"];

/// Options for a single analysis run.
///
/// Built once per invocation and passed by value into the pipeline; no
/// ambient mutable state sits behind it. Each branch toggle is independent
/// of the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Model identifier sent to the generation service
    pub model: String,
    /// Run the sentiment branch
    pub show_sentiment: bool,
    /// Run the polite-rewrite branch
    pub show_rewrite: bool,
    /// Run the professionalism-score branch
    pub show_score: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            model: SUPPORTED_MODELS[0].to_string(),
            show_sentiment: true,
            show_rewrite: true,
            show_score: true,
        }
    }
}

impl AnalysisOptions {
    /// Set the model, rejecting identifiers outside the allow-list.
    pub fn with_model(mut self, model: &str) -> Result<Self> {
        self.model = model.to_string();
        self.validate()?;
        Ok(self)
    }

    /// Check the options before a run; the model must be on the allow-list.
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_MODELS.contains(&self.model.as_str()) {
            return Err(Error::Configuration(format!(
                "unsupported model '{}', expected one of: {}",
                self.model,
                SUPPORTED_MODELS.join(", ")
            )));
        }
        Ok(())
    }

    /// True when at least one branch is enabled.
    pub fn any_enabled(&self) -> bool {
        self.show_sentiment || self.show_rewrite || self.show_score
    }
}

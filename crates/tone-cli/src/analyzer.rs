//! Analysis pipeline for a single email

use tracing::debug;

use tone_core::{
    AnalysisOptions, AnalysisReport, Error, ModelReply, ProfessionalismReport, Result,
    TextGenerator, prompt, sentiment,
};

/// Runs the enabled analysis branches for one email.
///
/// Generic over the generator so the pipeline can run against a scripted
/// fake in tests.
pub struct EmailAnalyzer<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> EmailAnalyzer<G> {
    /// Create a new analyzer
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Analyze one email according to `options`.
    ///
    /// Empty input is rejected before any stage runs. The rewrite and score
    /// requests are independent of each other and run concurrently; the
    /// report presents them in a fixed order regardless of which finished
    /// first.
    pub async fn analyze(
        &self,
        email: &str,
        options: &AnalysisOptions,
    ) -> Result<AnalysisReport> {
        let email = email.trim();
        if email.is_empty() {
            return Err(Error::InvalidInput("email text is empty".to_string()));
        }

        options.validate()?;

        debug!(
            model = %options.model,
            sentiment = options.show_sentiment,
            rewrite = options.show_rewrite,
            score = options.show_score,
            "analyzing email"
        );

        let sentiment = options.show_sentiment.then(|| sentiment::analyze(email));

        let (rewrite, rating) = tokio::join!(
            self.generate_if(options.show_rewrite, prompt::polite_rewrite(email)),
            self.generate_if(options.show_score, prompt::professionalism_rating(email)),
        );

        Ok(AnalysisReport {
            email: email.to_string(),
            sentiment,
            rewrite,
            professionalism: rating.map(ProfessionalismReport::from_reply),
        })
    }

    async fn generate_if(&self, enabled: bool, prompt: String) -> Option<ModelReply> {
        if enabled {
            Some(self.generator.generate(&prompt).await)
        } else {
            None
        }
    }
}

//! Aggregate result of one analysis run

use serde::{Deserialize, Serialize};

use crate::llm::ModelReply;
use crate::score::{DEFAULT_SCORE, ProfessionalismTier, extract_score};
use crate::sentiment::SentimentScores;

/// Professionalism rating derived from a score-prompt reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalismReport {
    pub score: i64,
    pub tier: ProfessionalismTier,
    /// The reply the score was derived from, kept for display
    pub reply: ModelReply,
}

impl ProfessionalismReport {
    /// Derive the rating from a generation reply.
    ///
    /// Digits are only read out of replies that carried text; a failed
    /// request rates [`DEFAULT_SCORE`] instead of whatever numbers happen
    /// to appear in an error message.
    pub fn from_reply(reply: ModelReply) -> Self {
        let score = match reply.text() {
            Some(text) => extract_score(text),
            None => DEFAULT_SCORE,
        };

        Self {
            score,
            tier: ProfessionalismTier::from_score(score),
            reply,
        }
    }
}

/// Everything one analysis produced.
///
/// Branches the options disabled stay `None`; nothing here is mutated after
/// the run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The analyzed email text
    pub email: String,
    /// Sentiment branch output, when enabled
    pub sentiment: Option<SentimentScores>,
    /// Polite-rewrite branch output, when enabled
    pub rewrite: Option<ModelReply>,
    /// Professionalism branch output, when enabled
    pub professionalism: Option<ProfessionalismReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_reads_first_digit_run() {
        let report = ProfessionalismReport::from_reply(ModelReply::Text(
            "I would rate this 87.".to_string(),
        ));
        assert_eq!(report.score, 87);
        assert_eq!(report.tier, ProfessionalismTier::High);
    }

    #[test]
    fn digitless_reply_rates_default() {
        let report =
            ProfessionalismReport::from_reply(ModelReply::Text("Highly professional.".to_string()));
        assert_eq!(report.score, DEFAULT_SCORE);
        assert_eq!(report.tier, ProfessionalismTier::Medium);
    }

    #[test]
    fn failed_reply_rates_default_not_status_digits() {
        // A 500 body would otherwise "score" 500; the tag keeps the failure
        // out of the digit scan.
        let report = ProfessionalismReport::from_reply(ModelReply::HttpError {
            status: 500,
            body: "internal server error".to_string(),
        });
        assert_eq!(report.score, DEFAULT_SCORE);
        assert_eq!(report.tier, ProfessionalismTier::Medium);
        assert!(report.reply.is_failure());
    }

    #[test]
    fn unreachable_reply_rates_default() {
        let report = ProfessionalismReport::from_reply(ModelReply::Unreachable(
            "connect error on port 11434".to_string(),
        ));
        assert_eq!(report.score, DEFAULT_SCORE);
    }

    #[test]
    fn raw_body_still_feeds_the_digit_scan() {
        let report = ProfessionalismReport::from_reply(ModelReply::RawBody("92".to_string()));
        assert_eq!(report.score, 92);
        assert_eq!(report.tier, ProfessionalismTier::High);
    }
}

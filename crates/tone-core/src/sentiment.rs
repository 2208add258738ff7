//! Sentiment scoring over the VADER polarity lexicon

use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Discrete sentiment derived from the compound score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Get the display name for this label
    pub fn display_name(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }

    /// Badge color used by the presentation layer
    pub fn badge_color(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "#22c55e",
            SentimentLabel::Neutral => "gray",
            SentimentLabel::Negative => "#ef4444",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Polarity components for one piece of text.
///
/// `negative`, `neutral` and `positive` are proportions summing to 1;
/// `compound` is the normalized overall polarity in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

impl SentimentScores {
    /// Derive the discrete label from the compound score.
    ///
    /// Scores sitting exactly on the +/-0.05 thresholds stay Neutral.
    pub fn label(&self) -> SentimentLabel {
        if self.compound > 0.05 {
            SentimentLabel::Positive
        } else if self.compound < -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Score the polarity of `text` with the VADER lexicon.
///
/// Never fails: empty input and unknown tokens contribute zero polarity,
/// which derives a Neutral label.
pub fn analyze(text: &str) -> SentimentScores {
    let analyzer = SentimentIntensityAnalyzer::new();
    let polarity = analyzer.polarity_scores(text);

    SentimentScores {
        negative: polarity.get("neg").copied().unwrap_or(0.0),
        neutral: polarity.get("neu").copied().unwrap_or(0.0),
        positive: polarity.get("pos").copied().unwrap_or(0.0),
        compound: polarity.get("compound").copied().unwrap_or(0.0),
    }
}

//! Professionalism score extraction and bucketing

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Score assumed when a reply contains no digits at all
pub const DEFAULT_SCORE: i64 = 50;

/// Extract the professionalism score from a model reply.
///
/// The first maximal run of decimal digits wins and is returned unclamped,
/// so a reply of "150" really yields 150. Replies without any digit fall
/// back to [`DEFAULT_SCORE`].
pub fn extract_score(response: &str) -> i64 {
    Regex::new(r"\d+")
        .ok()
        .and_then(|digits| digits.find(response).map(|m| m.as_str().to_string()))
        .and_then(|run| run.parse().ok())
        .unwrap_or(DEFAULT_SCORE)
}

/// Three-way bucketing of the 0-100 score for color-coded display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfessionalismTier {
    High,
    Medium,
    Low,
}

impl ProfessionalismTier {
    /// Bucket a score into its tier.
    ///
    /// Note that the no-digit fallback of 50 lands in Medium; the bucketing
    /// does not special-case it.
    pub fn from_score(score: i64) -> Self {
        if score >= 75 {
            ProfessionalismTier::High
        } else if score >= 50 {
            ProfessionalismTier::Medium
        } else {
            ProfessionalismTier::Low
        }
    }

    /// Get the display name for this tier
    pub fn display_name(&self) -> &'static str {
        match self {
            ProfessionalismTier::High => "High",
            ProfessionalismTier::Medium => "Medium",
            ProfessionalismTier::Low => "Low",
        }
    }

    /// Metric color used by the presentation layer
    pub fn color(&self) -> &'static str {
        match self {
            ProfessionalismTier::High => "#22c55e",
            ProfessionalismTier::Medium => "#f97316",
            ProfessionalismTier::Low => "#ef4444",
        }
    }
}

impl std::fmt::Display for ProfessionalismTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_digit_run_wins() {
        assert_eq!(extract_score("Score: 82/100"), 82);
    }

    #[test]
    fn leading_prose_is_skipped() {
        assert_eq!(extract_score("I would rate this 87."), 87);
    }

    #[test]
    fn no_digits_defaults_to_fifty() {
        assert_eq!(extract_score("no numbers here"), DEFAULT_SCORE);
        assert_eq!(extract_score("Highly professional."), DEFAULT_SCORE);
        assert_eq!(extract_score(""), DEFAULT_SCORE);
    }

    #[test]
    fn score_is_not_clamped() {
        assert_eq!(extract_score("150"), 150);
        assert_eq!(extract_score("I give it 9001 out of 100"), 9001);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(ProfessionalismTier::from_score(75), ProfessionalismTier::High);
        assert_eq!(ProfessionalismTier::from_score(100), ProfessionalismTier::High);
        assert_eq!(ProfessionalismTier::from_score(74), ProfessionalismTier::Medium);
        assert_eq!(ProfessionalismTier::from_score(50), ProfessionalismTier::Medium);
        assert_eq!(ProfessionalismTier::from_score(49), ProfessionalismTier::Low);
        assert_eq!(ProfessionalismTier::from_score(0), ProfessionalismTier::Low);
    }

    #[test]
    fn tier_colors_follow_the_bucket() {
        assert_eq!(ProfessionalismTier::High.color(), "#22c55e");
        assert_eq!(ProfessionalismTier::Medium.color(), "#f97316");
        assert_eq!(ProfessionalismTier::Low.color(), "#ef4444");
    }

    #[test]
    fn default_score_lands_in_medium() {
        // The documented quirk: a reply with no digits rates Medium.
        let tier = ProfessionalismTier::from_score(extract_score("Highly professional."));
        assert_eq!(tier, ProfessionalismTier::Medium);
    }
}

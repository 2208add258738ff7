//! Core types and logic for the email tone checker.
//!
//! This crate holds everything that is pure and service-independent: the
//! sentiment scorer, the professionalism score extractor, the prompt
//! templates, the per-run options, and the reply/report types exchanged
//! between the generation client and the presentation layer.

pub mod error;
pub mod llm;
pub mod options;
pub mod prompt;
pub mod report;
pub mod score;
pub mod sentiment;

pub use error::{Error, Result};
pub use llm::{ModelReply, TextGenerator};
pub use options::{AnalysisOptions, SUPPORTED_MODELS};
pub use report::{AnalysisReport, ProfessionalismReport};
pub use score::{DEFAULT_SCORE, ProfessionalismTier, extract_score};
pub use sentiment::{SentimentLabel, SentimentScores};

//! CLI interface for the email tone checker

mod analyzer;
mod ui;

pub use analyzer::EmailAnalyzer;
pub use ui::{
    display_banner, read_email_from_stdin, render_report, save_rewrite, warn_empty_input,
};

// Re-export core types
pub use tone_core::{Error, Result};

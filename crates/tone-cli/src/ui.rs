//! Terminal presentation for analysis results

use colored::*;
use crossterm::terminal::size;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use tone_core::{
    AnalysisReport, ModelReply, ProfessionalismReport, ProfessionalismTier, Result,
    SentimentLabel, SentimentScores,
};

/// Display startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(58, terminal_width.saturating_sub(4));

    let top_border = format!("┌{}┐", "─".repeat(banner_width - 2));
    let bottom_border = format!("└{}┘", "─".repeat(banner_width - 2));
    let empty_line = format!("│{}│", " ".repeat(banner_width - 2));

    println!();
    println!("{}", top_border.blue());
    println!("{}", empty_line.blue());

    let title_line = format!(
        "│  {}{}│",
        "Tonecheck - Email Tone Checker".blue().bold(),
        " ".repeat(banner_width.saturating_sub(33))
    );
    println!("{}", title_line);

    println!("{}", empty_line.blue());

    let feature_lines = vec![
        "📧 Paste an email, get tone feedback",
        "",
        "Features:",
        "• 🔍 VADER sentiment scoring",
        "• 🧑‍💼 Polite rewrite via a local model",
        "• 📊 0-100 professionalism rating",
        "",
        "v0.1.0 • Powered by Ollama",
    ];

    for line in feature_lines {
        if line.is_empty() {
            println!("{}", empty_line.blue());
        } else {
            let content = if line.starts_with("v0.1.0") {
                format!(
                    "│  {}{}│",
                    line.dimmed(),
                    " ".repeat(banner_width.saturating_sub(line.len() + 4))
                )
            } else {
                format!(
                    "│  {}{}│",
                    line,
                    " ".repeat(banner_width.saturating_sub(line.len() + 4))
                )
            };
            println!("{}", content.blue());
        }
    }

    println!("{}", empty_line.blue());
    println!("{}", bottom_border.blue());
    println!();
}

/// Read the email text from stdin.
///
/// Piped input is consumed whole; interactive input is prompted for and read
/// until end-of-file.
pub fn read_email_from_stdin() -> Result<String> {
    let mut stdin = io::stdin();

    if stdin.is_terminal() {
        println!(
            "{}",
            "Paste your email below, then press Ctrl-D on an empty line:".dimmed()
        );
    }

    let mut email = String::new();
    stdin.read_to_string(&mut email)?;
    Ok(email)
}

/// Surface the blocking empty-input warning.
pub fn warn_empty_input() {
    println!("{} Please enter your email first.", "⚠️".yellow());
}

/// Render a full analysis report, one section per enabled branch.
///
/// Failures render inline in the slot their section's success output would
/// occupy; there is no separate error panel.
pub fn render_report(report: &AnalysisReport) {
    if let Some(scores) = &report.sentiment {
        render_sentiment(scores);
    }

    if let Some(rewrite) = &report.rewrite {
        render_rewrite(&report.email, rewrite);
    }

    if let Some(rating) = &report.professionalism {
        render_professionalism(rating);
    }
}

fn render_sentiment(scores: &SentimentScores) {
    println!();
    println!("{}", "🔍 Sentiment Analysis".bold());

    let label = scores.label();
    let badge = format!("{} {}", label_emoji(label), label);
    let badge = match label {
        SentimentLabel::Positive => badge.green().bold(),
        SentimentLabel::Neutral => badge.dimmed().bold(),
        SentimentLabel::Negative => badge.red().bold(),
    };
    println!("{}", badge);

    match serde_json::to_string_pretty(scores) {
        Ok(json) => println!("{}", json),
        Err(_) => println!("{:?}", scores),
    }
}

fn render_rewrite(original: &str, rewrite: &ModelReply) {
    println!();
    println!("{}", "🧑‍💼 Polite Rewrite".bold());
    println!();
    println!("{}", "Original Email".underline());
    println!("{}", original);
    println!();
    println!("{}", "Polite Rewrite".underline());
    render_reply(rewrite);
}

fn render_professionalism(rating: &ProfessionalismReport) {
    println!();
    println!("{}", "📊 Professionalism Score".bold());

    let metric = format!("{}/100", rating.score);
    let metric = match rating.tier {
        ProfessionalismTier::High => metric.green().bold(),
        ProfessionalismTier::Medium => metric.yellow().bold(),
        ProfessionalismTier::Low => metric.red().bold(),
    };
    println!("{} ({})", metric, rating.tier);

    if rating.reply.is_failure() {
        render_reply(&rating.reply);
    }
}

fn render_reply(reply: &ModelReply) {
    if reply.is_failure() {
        println!("{} {}", "❌".red(), reply.render().red());
    } else {
        println!("{}", reply.render());
    }
}

fn label_emoji(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "😃",
        SentimentLabel::Neutral => "😐",
        SentimentLabel::Negative => "😡",
    }
}

/// Write the rewrite text to `path` so the user can keep it.
pub fn save_rewrite(path: &Path, rewrite: &ModelReply) -> Result<()> {
    fs::write(path, rewrite.render())?;
    println!("{} Saved polite rewrite to {}", "💾".cyan(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_rewrite_writes_rendered_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("polite_email.txt");

        save_rewrite(&path, &ModelReply::Text("Dear team, thank you.".to_string())).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Dear team, thank you."
        );
    }

    #[test]
    fn save_rewrite_keeps_the_error_marker_for_failures() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("polite_email.txt");

        let reply = ModelReply::HttpError {
            status: 503,
            body: "loading".to_string(),
        };
        save_rewrite(&path, &reply).unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.starts_with("Error:"));
        assert!(saved.contains("503"));
    }

    #[test]
    fn emoji_follows_the_label() {
        assert_eq!(label_emoji(SentimentLabel::Positive), "😃");
        assert_eq!(label_emoji(SentimentLabel::Neutral), "😐");
        assert_eq!(label_emoji(SentimentLabel::Negative), "😡");
    }
}

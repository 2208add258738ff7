use anyhow::Result;
use clap::Parser;
use colored::*;
use std::fs;
use std::path::PathBuf;

// Import from our modular crates
use tone_cli::{
    EmailAnalyzer, display_banner, read_email_from_stdin, render_report, save_rewrite,
    warn_empty_input,
};
use tone_core::AnalysisOptions;
use tone_ollama::{OllamaClient, OllamaConfig};

#[derive(Parser)]
#[command(name = "tonecheck")]
#[command(
    about = "Check the tone of an email: sentiment, polite rewrite, professionalism score",
    long_about = None
)]
struct Cli {
    /// Read the email from a file instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Model to ask for the rewrite and the professionalism rating
    #[arg(short, long, default_value = "phi3")]
    model: String,

    /// Skip the sentiment analysis section
    #[arg(long)]
    no_sentiment: bool,

    /// Skip the polite rewrite section
    #[arg(long)]
    no_rewrite: bool,

    /// Skip the professionalism score section
    #[arg(long)]
    no_score: bool,

    /// Write the polite rewrite to a file
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = "polite_email.txt"
    )]
    save: Option<PathBuf>,

    /// Suppress the banner
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    if !cli.quiet {
        display_banner();
    }

    let options = AnalysisOptions {
        show_sentiment: !cli.no_sentiment,
        show_rewrite: !cli.no_rewrite,
        show_score: !cli.no_score,
        ..AnalysisOptions::default()
    }
    .with_model(&cli.model)?;

    if !options.any_enabled() {
        println!(
            "{} All sections are disabled, nothing to analyze.",
            "⚠️".yellow()
        );
        return Ok(());
    }

    let email = match &cli.file {
        Some(path) => fs::read_to_string(path)?,
        None => read_email_from_stdin()?,
    };

    if email.trim().is_empty() {
        warn_empty_input();
        return Ok(());
    }

    let client = OllamaClient::new(OllamaConfig::from_env())?.with_model(options.model.clone());
    let analyzer = EmailAnalyzer::new(client);

    if options.show_rewrite || options.show_score {
        println!("{} Asking the model, this can take a while...", "🤖".blue());
    }

    let report = analyzer.analyze(&email, &options).await?;
    render_report(&report);

    if let Some(path) = &cli.save {
        match &report.rewrite {
            Some(rewrite) => save_rewrite(path, rewrite)?,
            None => println!(
                "{} Nothing to save, the rewrite section was skipped.",
                "⚠️".yellow()
            ),
        }
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    // Noisy HTTP internals stay at warn unless RUST_LOG overrides.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,hyper_util=warn,reqwest=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

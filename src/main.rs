use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use hategate::classifier::{Classifier, FeedbackReportKind, ModerateHatespeechClient};
use hategate::config::Config;
use hategate::handlers::{self, TriggerContext};
use hategate::host::{FixtureHost, TriggerEvent};
use hategate::output::terminal;
use hategate::policy;
use hategate::settings::ConfidencePercent;
use hategate::text;

/// Hategate: hate-speech screening for posts and comments.
///
/// Cleans up user content, scores it with ModerateHatespeech.com, and
/// reports anything above your confidence threshold to the moderators.
#[derive(Parser)]
#[command(name = "hategate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a piece of text and show the decision
    Check {
        /// The text to check
        text: String,

        /// Override the minimum confidence percentage (0-100)
        #[arg(long)]
        min_confidence: Option<ConfidencePercent>,
    },

    /// Tell ModerateHatespeech a previous verdict was wrong
    Feedback {
        /// The previously checked text
        text: String,

        /// false-positive or false-negative
        #[arg(long)]
        kind: FeedbackReportKind,
    },

    /// Show the active moderation settings
    Settings,

    /// Run trigger events through the handlers against fixture content
    Replay {
        /// JSON file with the posts and comments the events refer to
        #[arg(long)]
        fixture: PathBuf,

        /// JSON file with an array of trigger events
        #[arg(long)]
        events: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hategate=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            text,
            min_confidence,
        } => {
            let api_key = config.require_api_key()?;
            let cleaned = text::normalize(Some(&text));
            if cleaned.is_empty() {
                println!("{}", "Nothing to check after cleanup.".dimmed());
                return Ok(());
            }

            let threshold = min_confidence
                .or(config.settings.min_confidence)
                .unwrap_or_default()
                .as_fraction();

            let client = ModerateHatespeechClient::new(&config.api_url)?;
            let result = client.classify(&cleaned, api_key).await?;
            let flagged = policy::meets_threshold(result.score(), threshold);
            terminal::display_verdict(&cleaned, &result, threshold, flagged);
        }

        Commands::Feedback { text, kind } => {
            let api_key = config.require_api_key()?;
            let client = ModerateHatespeechClient::new(&config.api_url)?;
            if handlers::send_feedback(&client, api_key, &text, kind).await? {
                println!("Reported {kind} to ModerateHatespeech.");
            } else {
                println!("{}", "Nothing to report after cleanup.".dimmed());
            }
        }

        Commands::Settings => {
            terminal::display_settings(&config.settings);
            if config.settings.api_key().is_none() {
                println!(
                    "\n{}",
                    "MHS_API_KEY is not set; every check will fail until it is.".yellow()
                );
            }
        }

        Commands::Replay { fixture, events } => {
            let host = FixtureHost::load(&fixture)?;
            let raw = std::fs::read_to_string(&events)
                .with_context(|| format!("Failed to read events {}", events.display()))?;
            let events: Vec<TriggerEvent> =
                serde_json::from_str(&raw).context("Failed to parse trigger events")?;

            let client = ModerateHatespeechClient::new(&config.api_url)?;
            let ctx = TriggerContext {
                settings: &config.settings,
                host: &host,
                classifier: &client,
            };

            info!(count = events.len(), "Replaying trigger events");
            let summary = handlers::replay(&events, &ctx).await;

            terminal::display_reports(&host.reports().await);
            if summary.failed > 0 {
                println!(
                    "{}",
                    format!(
                        "{} of {} events failed (see log).",
                        summary.failed,
                        events.len()
                    )
                    .yellow()
                );
            }
        }
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{error, info};

use mailsort::config::Config;
use mailsort::models::{Email, Strategy};
use mailsort::output::terminal;
use mailsort::pipeline::InferenceService;

/// Mailsort: classify emails into your own topics.
///
/// Compares an email against topic descriptions, or against emails you've
/// already labelled, and reports the closest topic with every score.
#[derive(Parser)]
#[command(name = "mailsort", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an email into one of the stored topics
    Classify {
        /// Email subject line
        #[arg(long, default_value = "")]
        subject: String,

        /// Email body text
        #[arg(long, conflicts_with = "body_file", required_unless_present = "body_file")]
        body: Option<String>,

        /// Read the email body from a file instead
        #[arg(long)]
        body_file: Option<PathBuf>,

        /// Prediction strategy: "topic" or "email" (default from MAILSORT_STRATEGY)
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Store a labelled email for email-to-email prediction
    StoreEmail {
        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long)]
        body: String,

        /// Topic label for this email
        #[arg(long)]
        topic: String,
    },

    /// Add a new topic (existing topics are never overwritten)
    AddTopic {
        #[arg(long)]
        topic: String,

        #[arg(long)]
        description: String,
    },

    /// List topics with a short description preview
    Topics,

    /// Show topics with their descriptions
    PipelineInfo {
        #[arg(long)]
        json: bool,
    },

    /// List feature generators and the features they produce
    Features {
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mailsort=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!(error = %format!("{e:#}"), "Command failed");
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let service = InferenceService::from_config(&config)
        .with_context(|| format!("Failed to open stores in {}", config.data_dir.display()))?;

    match cli.command {
        Commands::Classify {
            subject,
            body,
            body_file,
            strategy,
            json,
        } => {
            let body = match (body, body_file) {
                (Some(body), _) => body,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read email body from {}", path.display()))?,
                (None, None) => anyhow::bail!("Provide --body or --body-file"),
            };

            let strategy = strategy.unwrap_or(config.default_strategy);
            let email = Email::new(subject, body);
            let result = service
                .classify(&email, strategy)
                .context("Classification failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_classification(&result, strategy);
            }
        }

        Commands::StoreEmail {
            subject,
            body,
            topic,
        } => {
            let outcome = service.store_email(&subject, &body, &topic)?;
            terminal::display_outcome(outcome);
        }

        Commands::AddTopic { topic, description } => {
            info!(topic = %topic, "Adding topic");
            let outcome = service.add_topic(&topic, &description)?;
            terminal::display_outcome(outcome);
        }

        Commands::Topics => {
            terminal::display_topics(&service.topics().records());
        }

        Commands::PipelineInfo { json } => {
            let info = service.get_pipeline_info();
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                terminal::display_pipeline_info(&info);
            }
        }

        Commands::Features { json } => {
            let generators = service.available_generators();
            if json {
                let body = serde_json::json!({ "available_generators": generators });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                terminal::display_generators(&generators);
            }
        }
    }

    Ok(())
}

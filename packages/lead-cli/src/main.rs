//! Operator CLI for the lead pipeline.
//!
//! Works on a lead stored as a JSON file with the same camelCase keys the
//! site posts. `validate` and `preview` stay offline; `send` performs the
//! real submission and exits non-zero when the lead is refused or the
//! endpoint fails.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use leads::{validate, LeadClient, LeadForm, LeadPayload, SolutionKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lead")]
#[command(about = "Inspect and submit digihealth4africa leads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a lead file for the required fields
    Validate { file: PathBuf },

    /// Show the formatted message and wire payload without sending
    Preview { file: PathBuf },

    /// Validate a lead file, then submit it
    Send {
        file: PathBuf,

        /// Target endpoint (default: DIGIHEALTH_SUBMIT_URL, then production)
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// List solution categories, or show one category's form
    Catalog { kind: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,leads=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Preview { file } => cmd_preview(&file),
        Commands::Send { file, endpoint } => cmd_send(&file, endpoint).await,
        Commands::Catalog { kind } => cmd_catalog(kind.as_deref()),
    }
}

fn load_lead(file: &Path) -> Result<LeadForm> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", file.display()))
}

fn cmd_validate(file: &Path) -> Result<()> {
    let form = load_lead(file)?;
    let report = validate(&form);

    if report.is_valid() {
        println!("OK: {}", file.display());
        return Ok(());
    }

    for error in &report.errors {
        println!("- {}", error);
    }
    bail!("{} validation error(s) in {}", report.error_count(), file.display());
}

fn cmd_preview(file: &Path) -> Result<()> {
    let form = load_lead(file)?;
    let payload = LeadPayload::from_form(&form);

    println!("--- message ---");
    println!("{}", payload.message);
    println!();
    println!("--- wire payload ---");
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}

async fn cmd_send(file: &Path, endpoint: Option<String>) -> Result<()> {
    let form = load_lead(file)?;

    let report = validate(&form);
    if !report.is_valid() {
        bail!("Lead refused: {}", report);
    }

    let mut client = LeadClient::from_env();
    if let Some(url) = endpoint {
        client = client.with_endpoint(url);
    }

    tracing::info!(endpoint = %client.endpoint(), "Sending lead");
    let outcome = client.submit(&form).await;

    println!("{}", serde_json::to_string_pretty(&outcome)?);

    if !outcome.success {
        bail!("Submission failed, see the log for the cause");
    }
    Ok(())
}

fn cmd_catalog(kind: Option<&str>) -> Result<()> {
    match kind {
        None => {
            for kind in SolutionKind::ALL {
                println!("{:<12} {}", kind.to_string(), kind.title());
            }
        }
        Some(token) => {
            let kind = SolutionKind::from_str(token).with_context(|| {
                let known: Vec<String> =
                    SolutionKind::ALL.iter().map(|k| k.to_string()).collect();
                format!("Known categories: {}", known.join(", "))
            })?;

            println!("{}", kind.title());
            println!("{}", kind.description());
            println!("Action: {}", kind.action());
            println!();
            for field in kind.form_fields() {
                let widget = field.kind.to_string();
                if field.options.is_empty() {
                    println!("  {:<24} {:<10} {}", field.name, widget, field.label);
                } else {
                    println!(
                        "  {:<24} {:<10} {} [{}]",
                        field.name,
                        widget,
                        field.label,
                        field.options.join(" | ")
                    );
                }
            }
        }
    }

    Ok(())
}

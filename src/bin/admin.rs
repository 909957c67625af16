//! CLI administration tool for qr-tracker.
//!
//! Works directly on the JSON data file, so links can be registered and
//! inspected without the HTTP server. Do not run it against a data file
//! that a live server is writing: the server only re-reads the file at startup.
//!
//! # Usage
//!
//! ```bash
//! # Register (or update) a link
//! cargo run --bin qr-admin -- register --qr-id x1 --title Home \
//!     --long-url https://example.com --short-url https://s.ly/x1
//!
//! # Show one link
//! cargo run --bin qr-admin -- stats x1
//!
//! # List all links and totals
//! cargo run --bin qr-admin -- list
//! cargo run --bin qr-admin -- summary
//!
//! # Save the code image
//! cargo run --bin qr-admin -- qr x1 --out x1.png
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_FILE` (default: `data.json`): path of the state file
//! - `LOCK_TIMEOUT_MS` (default: 5000): writer lock wait

use qr_tracker::application::services::{QrService, RegistryService, StatsService};
use qr_tracker::domain::entities::{NewLink, Registration};
use qr_tracker::domain::repositories::LinkStore;
use qr_tracker::infrastructure::imaging::QrPngEncoder;
use qr_tracker::infrastructure::persistence::FileLinkStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing qr-tracker links.
#[derive(Parser)]
#[command(name = "qr-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the JSON state file
    #[arg(long, env = "DATA_FILE", default_value = "data.json")]
    data_file: PathBuf,

    /// Maximum wait for the store writer lock, in milliseconds
    #[arg(long, env = "LOCK_TIMEOUT_MS", default_value_t = 5000)]
    lock_timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new link or update an existing one
    Register {
        /// Link identifier used in /r/{qr_id}
        #[arg(long)]
        qr_id: Option<String>,

        /// Human-readable title
        #[arg(long)]
        title: Option<String>,

        /// Redirect target
        #[arg(long)]
        long_url: Option<String>,

        /// URL encoded into the QR code
        #[arg(long)]
        short_url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics for one link
    Stats {
        qr_id: String,
    },

    /// List all links with click counts
    List,

    /// Show link and click totals
    Summary,

    /// Write the QR code image of a link to a PNG file
    Qr {
        qr_id: String,

        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let store = FileLinkStore::open(&cli.data_file, Duration::from_millis(cli.lock_timeout_ms))
        .await
        .with_context(|| format!("Failed to open {}", cli.data_file.display()))?;
    let store = Arc::new(store);

    match cli.command {
        Commands::Register {
            qr_id,
            title,
            long_url,
            short_url,
            yes,
        } => {
            let new_link = NewLink::new(
                value_or_prompt(qr_id, "QR id")?,
                value_or_prompt(title, "Title")?,
                value_or_prompt(long_url, "Long URL")?,
                value_or_prompt(short_url, "Short URL")?,
            );
            register(store, new_link, yes).await?
        }
        Commands::Stats { qr_id } => show_stats(store, &qr_id).await?,
        Commands::List => list_links(store).await?,
        Commands::Summary => show_summary(store).await?,
        Commands::Qr { qr_id, out } => write_qr(store, &qr_id, out).await?,
    }

    Ok(())
}

/// Returns the provided value or asks for it interactively.
fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()?),
    }
}

/// Registers a link, asking before it overwrites an existing one.
///
/// The click counter of an existing link is kept.
async fn register(store: Arc<FileLinkStore>, new_link: NewLink, skip_confirm: bool) -> Result<()> {
    println!("{}", "📝 Register link".bright_blue().bold());
    println!();

    let new_link = new_link.trimmed();

    println!("  QR id:     {}", new_link.qr_id.cyan());
    println!("  Title:     {}", new_link.title.bright_white());
    println!("  Long URL:  {}", new_link.long_url.bright_white());
    println!("  Short URL: {}", new_link.short_url.bright_white());
    println!();

    let state = store.load().await?;
    if let Some(existing) = state.link(&new_link.qr_id) {
        println!(
            "{}",
            "⚠️  This qr_id is already registered:".yellow().bold()
        );
        println!("  Title:     {}", existing.title.bright_black());
        println!("  Long URL:  {}", existing.long_url.bright_black());
        println!("  Short URL: {}", existing.short_url.bright_black());
        println!(
            "  Clicks:    {} (kept)",
            state.clicks(&new_link.qr_id).to_string().bright_black()
        );
        println!();

        if !skip_confirm {
            let confirmed = Confirm::new()
                .with_prompt("Overwrite this link?")
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }
        }
    }

    let outcome = RegistryService::new(store).register(new_link).await?;

    println!();
    match outcome {
        Registration::Created => println!("{}", "✅ Link created".green().bold()),
        Registration::Updated => println!("{}", "✅ Link updated".green().bold()),
    }
    println!();

    Ok(())
}

async fn show_stats(store: Arc<FileLinkStore>, qr_id: &str) -> Result<()> {
    let stats = StatsService::new(store).get_stats(qr_id).await?;

    println!("{}", "📊 Link statistics".bright_blue().bold());
    println!();
    println!("  QR id:     {}", stats.qr_id.cyan());
    println!("  Title:     {}", stats.title.bright_white());
    println!("  Short URL: {}", stats.short_url.bright_white());
    println!(
        "  Clicks:    {}",
        stats.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists all links ordered by `qr_id`.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   QR id                Title                          Clicks
///   ────────────────────────────────────────────────────────────
///   promo                Spring promo                   12
///   x1                   Home                           3
/// ```
async fn list_links(store: Arc<FileLinkStore>) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let all = StatsService::new(store).list_stats().await?;

    if all.is_empty() {
        println!("{}", "  No links registered".yellow());
        println!();
        println!(
            "  Register one with: {} qr-admin register",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<20} {:<30} {:<10}",
        "QR id".bright_white().bold(),
        "Title".bright_white().bold(),
        "Clicks".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for stats in &all {
        println!(
            "  {:<20} {:<30} {}",
            stats.qr_id.cyan(),
            stats.title,
            stats.clicks.to_string().bright_green()
        );
    }

    println!();
    println!("  Total: {}", all.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn show_summary(store: Arc<FileLinkStore>) -> Result<()> {
    println!("{}", "📊 Summary".bright_blue().bold());
    println!();

    let summary = StatsService::new(store).summary().await?;

    println!(
        "  Links:  {}",
        summary.links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        summary.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn write_qr(store: Arc<FileLinkStore>, qr_id: &str, out: PathBuf) -> Result<()> {
    let image = QrService::new(store, Arc::new(QrPngEncoder::default()))
        .render(qr_id)
        .await?;

    tokio::fs::write(&out, &image.bytes)
        .await
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "{} {} ({} bytes)",
        "✅ QR code written to".green().bold(),
        out.display().to_string().bright_white(),
        image.bytes.len()
    );

    Ok(())
}

//! CLI administration tool for shortlink.
//!
//! Manages short links, shows statistics and checks the database without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every link, newest first
//! cargo run --bin admin -- links list
//!
//! # Shorten a URL, optionally with a custom code
//! cargo run --bin admin -- links create https://example.com --code promo24
//!
//! # Delete a link and its click history
//! cargo run --bin admin -- links delete promo24
//!
//! # Show the click log of one link
//! cargo run --bin admin -- links clicks promo24
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Uses the same variables as the server (`DATABASE_URL` or `DB_*`,
//! `CODE_LENGTH`, `CODE_MAX_ATTEMPTS`, ...).

use shortlink::AppState;
use shortlink::{config, server};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Create a new short link
    Create {
        /// Target URL to shorten
        url: String,

        /// Custom short code (6-8 letters or digits)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete a link and all its clicks
    Delete {
        /// Short code of the link
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the click log of a link
    Clicks {
        /// Short code of the link
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = server::connect_pool(&config).await?;
    let state = AppState::with_code_settings(
        Arc::new(pool),
        config.code_length,
        config.code_max_attempts,
    );

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &state).await?,
        Commands::Stats => handle_stats(&state).await?,
        Commands::Db { action } => handle_db_action(action, &state).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, state: &AppState) -> Result<()> {
    match action {
        LinkAction::List => list_links(state).await?,
        LinkAction::Create { url, code } => create_link(state, url, code).await?,
        LinkAction::Delete { code, yes } => delete_link(state, code, yes).await?,
        LinkAction::Clicks { code } => show_clicks(state, code).await?,
    }

    Ok(())
}

/// Lists all links in a table.
///
/// ```text
/// 🔗 Links
///
///   Code     Clicks   Created            Target
///   ──────────────────────────────────────────────────────────────
///   Ab3xY9   12       2026-01-15 10:30   https://example.com
/// ```
async fn list_links(state: &AppState) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = state.link_service.list_links().await?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin -- links create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<8} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<8} {:<8} {:<18} {}",
            link.code.cyan(),
            link.total_clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.target_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a short link through the same validation path as the API.
async fn create_link(state: &AppState, url: String, code: Option<String>) -> Result<()> {
    println!("{}", "✨ Create Short Link".bright_blue().bold());
    println!();

    let link = state.link_service.create_link(url, code).await?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!("  Code:   {}", link.code.bright_yellow().bold());
    println!("  Target: {}", link.target_url.cyan());
    println!();

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(state: &AppState, code: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short Link".bright_blue().bold());
    println!();

    let link = state.link_service.get_link(&code).await?;

    println!("  Code:   {}", link.code.cyan());
    println!("  Target: {}", link.target_url);
    println!(
        "  Clicks: {}",
        link.total_clicks.to_string().bright_white()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link and its click history?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    state.link_service.delete_link(&code).await?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Prints the click log of a link, newest first.
async fn show_clicks(state: &AppState, code: String) -> Result<()> {
    let history = state.redirect_service.click_history(&code).await?;
    let link = &history.link;

    println!(
        "{} {}",
        "📈 Clicks for".bright_blue().bold(),
        link.code.cyan().bold()
    );
    println!();
    println!("  Target:       {}", link.target_url);
    println!(
        "  Total clicks: {}",
        link.total_clicks.to_string().bright_green().bold()
    );
    match link.last_clicked {
        Some(ts) => println!(
            "  Last clicked: {}",
            ts.format("%Y-%m-%d %H:%M:%S").to_string().bright_white()
        ),
        None => println!("  Last clicked: {}", "never".bright_black()),
    }
    println!();

    for click in &history.clicks {
        println!(
            "  {:<8} {}",
            click.id.to_string().bright_black(),
            click.timestamp.format("%Y-%m-%d %H:%M:%S%.3f")
        );
    }

    if !history.clicks.is_empty() {
        println!();
    }

    Ok(())
}

/// Displays link and click totals.
async fn handle_stats(state: &AppState) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = state.link_service.count_links().await?;
    let clicks_count = state.redirect_service.count_clicks().await?;

    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, state: &AppState) -> Result<()> {
    let pool = state.pool.as_ref();

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

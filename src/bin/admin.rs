//! CLI administration tool for link-shortener.
//!
//! Works directly against PostgreSQL, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Show a stored link
//! cargo run --bin admin -- link show aZ3kP9qL
//!
//! # Create a short link
//! cargo run --bin admin -- link create https://example.com
//! ```
//!
//! # Environment Variables
//!
//! Settings are loaded and validated the same way as for the server (see
//! `link_shortener::config`). The storage backend must be `postgres`.

use link_shortener::application::services::{LinkOperations, LinkService};
use link_shortener::config::{self, Config, StorageBackend};
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::PgLinkRepository;
use link_shortener::server::{MIGRATOR, connect_pool};
use link_shortener::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
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
    /// Inspect and create links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show the record stored under a short id
    Show {
        /// Short id
        id: String,
    },

    /// Shorten a URL
    Create {
        /// URL to shorten
        url: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("admin works on PostgreSQL only; unset STORAGE_BACKEND or set it to 'postgres'");
    }

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool, config: &Config) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));

    match action {
        LinkAction::Show { id } => show_link(repo, &id).await,
        LinkAction::Create { url } => create_link(repo, &url, config).await,
    }
}

/// Prints a stored record.
async fn show_link(repo: Arc<PgLinkRepository>, id: &str) -> Result<()> {
    println!("{}", "🔎 Link".bright_blue().bold());
    println!();

    let record = repo
        .get(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let Some(record) = record else {
        println!("  {}", format!("No link stored under '{}'", id).yellow());
        return Ok(());
    };

    println!("  ID:      {}", record.id.cyan());
    println!("  URL:     {}", record.url.bright_white());
    println!(
        "  Created: {}",
        record
            .created
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!(
        "  Updated: {}",
        record
            .updated
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Shortens a URL through the same service the HTTP API uses.
async fn create_link(repo: Arc<PgLinkRepository>, url: &str, config: &Config) -> Result<()> {
    println!("{}", "✂️  Create Link".bright_blue().bold());
    println!();

    let service = LinkService::new(
        repo,
        Arc::new(RandomCodeGenerator::new(config.code_length)?),
        config.base_url.clone(),
    )
    .with_store_timeout(config.store_timeout());

    let link = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    println!("  ID:    {}", link.id.cyan());
    println!("  Short: {}", link.short_url.bright_yellow().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔌 Checking database connection...".bright_blue());

            let repo = PgLinkRepository::new(Arc::new(pool.clone()));
            if !repo.health_check().await {
                anyhow::bail!("Database did not answer");
            }

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  {}", version.bright_black());
        }
        DbAction::Migrate => {
            println!("{}", "📦 Applying migrations...".bright_blue());

            MIGRATOR
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

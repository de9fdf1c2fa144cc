//! CLI administration tool for link-redirector.
//!
//! Provides commands for inspecting and managing links and for checking the
//! database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Count stored links
//! cargo run --bin admin -- links count
//!
//! # Show a link
//! cargo run --bin admin -- links show 42
//!
//! # Store a link
//! cargo run --bin admin -- links add https://example.com/a
//!
//! # Delete a link (asks for confirmation unless -y)
//! cargo run --bin admin -- links delete 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use link_redirector::api::validation::{validate_link_id, validate_url};
use link_redirector::application::ServiceError;
use link_redirector::application::services::LinkService;
use link_redirector::config::{Config, StorageBackend};
use link_redirector::domain::entities::NewLink;
use link_redirector::infrastructure::persistence::{PgLinkRepository, PgStore};
use link_redirector::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-redirector.
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
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show the number of stored links
    Count,

    /// Show a link by ID
    Show {
        /// Link ID
        link_id: String,
    },

    /// Store a new link
    Add {
        /// Absolute URL to store
        url: String,
    },

    /// Delete a link by ID
    Delete {
        /// Link ID
        link_id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let config = Config::from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("The admin tool requires the postgres storage backend");
    }

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands through the link service.
async fn handle_link_action(action: LinkAction, pool: PgPool) -> Result<()> {
    let store = PgStore::new(Arc::new(pool));
    let service = LinkService::new(Arc::new(PgLinkRepository::new(store)));

    match action {
        LinkAction::Count => {
            let count = service.count().await?;
            println!(
                "  Links: {}",
                count.count.to_string().bright_green().bold()
            );
        }
        LinkAction::Show { link_id } => {
            let link_id = parse_link_id(&link_id)?;
            match service.get(link_id).await {
                Ok(link) => {
                    println!("  ID:      {}", link.link_id.to_string().bright_black());
                    println!("  URL:     {}", link.url.cyan());
                    println!(
                        "  Created: {}",
                        link.date_create.format("%Y-%m-%d %H:%M:%S UTC")
                    );
                }
                Err(ServiceError::LinkNotFound(_)) => {
                    println!("{}", format!("⚠️  Link {link_id} not found").yellow());
                }
                Err(e) => return Err(e.into()),
            }
        }
        LinkAction::Add { url } => {
            let url = validate_url(Some(&url))
                .map_err(|v| anyhow::anyhow!("Invalid {}: {}", v.field, v.message))?;
            let link = service.add(NewLink::new(url)).await?;

            println!("{}", "✅ Link created".green().bold());
            println!("  ID:  {}", link.link_id.to_string().bright_yellow().bold());
            println!("  URL: {}", link.url.cyan());
        }
        LinkAction::Delete { link_id, yes } => {
            let link_id = parse_link_id(&link_id)?;
            delete_link(&service, link_id, yes).await?;
        }
    }

    Ok(())
}

/// Deletes a link after showing it and asking for confirmation.
async fn delete_link(
    service: &LinkService<PgLinkRepository>,
    link_id: i64,
    skip_confirm: bool,
) -> Result<()> {
    let link = match service.get(link_id).await {
        Ok(link) => link,
        Err(ServiceError::LinkNotFound(_)) => {
            println!("{}", format!("⚠️  Link {link_id} not found").yellow());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("  ID:  {}", link.link_id.to_string().bright_black());
    println!("  URL: {}", link.url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete(link_id).await?;
    println!("{}", "✅ Link deleted".green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

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

fn parse_link_id(raw: &str) -> Result<i64> {
    validate_link_id(raw)
        .map_err(|v| anyhow::anyhow!("Invalid {}: {}", v.field, v.message))
        .context("Link IDs are positive integers")
}

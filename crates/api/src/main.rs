//! usersync - one-way user sync from a host user export into Klaviyo
//!
//! Command-line host: fires the user hooks, drives bulk sync page by page
//! and edits plugin settings.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use usersync_domain::constants::DEFAULT_FIELD_SELECTOR;
use usersync_domain::{Config, SyncStatus};
use usersync_infra::config;
use usersync_lib::utils::logging::init_tracing;
use usersync_lib::{commands, AppContext};

/// Sync host users to Klaviyo.
#[derive(Parser)]
#[command(name = "usersync")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (JSON or TOML); defaults to env vars, then probing
    #[arg(global = true, short, long)]
    config: Option<PathBuf>,

    /// JSON export of the host users
    #[arg(global = true, short, long, default_value = "users.json")]
    users: PathBuf,

    /// JSON settings file
    #[arg(global = true, short, long, default_value = "settings.json")]
    settings: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send the "Created User" event for one user
    Created { user_id: u64 },

    /// Send the "Updated User" event for one user
    Updated { user_id: u64 },

    /// Process a single bulk sync page
    SyncPage {
        #[arg(short, long, default_value = "1")]
        page: u32,

        #[arg(long)]
        page_size: Option<u32>,

        #[arg(short, long, default_value = DEFAULT_FIELD_SELECTOR)]
        fields: String,

        /// Invocation token; defaults to the configured one
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Run bulk sync from page 1 until it finishes or fails
    SyncAll {
        #[arg(long)]
        page_size: Option<u32>,

        #[arg(short, long, default_value = DEFAULT_FIELD_SELECTOR)]
        fields: String,

        #[arg(short, long)]
        token: Option<String>,
    },

    /// Save settings given as key=value pairs
    SaveSettings { pairs: Vec<String> },

    /// Print the on-site script tag, if enabled
    Script,
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Ok(config::apply_env_overrides(config::load_from_file(Some(path))?)?),
        None => Ok(config::load()?),
    }
}

fn parse_pairs(pairs: &[String]) -> Result<HashMap<String, String>> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => Ok((key.trim().to_string(), value.to_string())),
            None => bail!("expected key=value, got '{pair}'"),
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let dotenv = dotenvy::dotenv();
    let config = load_config(cli.config).context("failed to load configuration")?;
    init_tracing(&config.logging);
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    let ctx = AppContext::from_files(config, &cli.users, &cli.settings)
        .context("failed to initialise application context")?;
    let default_page_size = ctx.config.sync.page_size;
    let default_token = ctx.config.sync.invocation_token.clone().unwrap_or_default();

    match cli.command {
        Commands::Created { user_id } => print_json(&commands::on_user_created(&ctx, user_id).await)?,
        Commands::Updated { user_id } => print_json(&commands::on_user_updated(&ctx, user_id).await)?,
        Commands::SyncPage { page, page_size, fields, token } => {
            let token = token.unwrap_or(default_token);
            let report = commands::run_bulk_sync_page(
                &ctx,
                page,
                page_size.unwrap_or(default_page_size),
                &fields,
                &token,
            )
            .await;
            print_json(&report)?;
        }
        Commands::SyncAll { page_size, fields, token } => {
            let token = token.unwrap_or(default_token);
            let cursor = commands::run_bulk_sync(
                &ctx,
                page_size.unwrap_or(default_page_size),
                &fields,
                &token,
                |report| tracing::info!(users = report.users.len(), sync_status = %report.sync_status, "Page processed"),
            )
            .await;
            print_json(&cursor)?;
            if cursor.status == SyncStatus::Error {
                bail!(cursor.last_error.unwrap_or_else(|| "bulk sync failed".to_string()));
            }
        }
        Commands::SaveSettings { pairs } => {
            let inputs = parse_pairs(&pairs)?;
            let result = commands::save_settings(&ctx, &inputs).await.map_err(anyhow::Error::msg)?;
            print_json(&result)?;
        }
        Commands::Script => {
            if let Some(tag) = commands::onsite_script(&ctx).await.map_err(anyhow::Error::msg)? {
                println!("{tag}");
            }
        }
    }

    Ok(())
}

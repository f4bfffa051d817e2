// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tally - asset/roster sync CLI

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tally_adapters::{
    CacheResolver, EmployeeResolver, HttpDirectoryAdapter, HttpDocStoreAdapter, LiveResolver,
};
use tally_core::{Config, EmployeeId, InboundEvent, ObjectKey, ResolverMode};
use tally_engine::Engine;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Synchronize asset directory records with the wiki roster"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long = "config", default_value = "tally.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign an asset to an employee if it is currently unowned
    Assign {
        /// Asset system key, e.g. EM-1953
        object_key: String,
        /// Employee business key, e.g. E077
        employee_id: String,
    },
    /// Employee roster management
    Employee(EmployeeArgs),
    /// Export the roster to the wiki page
    Export,
    /// Handle a raw host event payload (JSON file)
    Handle {
        /// Path to the event payload
        payload: PathBuf,
    },
}

#[derive(Args)]
struct EmployeeArgs {
    #[command(subcommand)]
    command: EmployeeCommands,
}

#[derive(Subcommand)]
enum EmployeeCommands {
    /// Record a new employee in the directory
    Add {
        employee_id: String,
        username: String,
    },
    /// Remove an employee from the directory
    Remove { employee_id: String },
}

#[tokio::main]
async fn main() {
    init_tracing();
    match run().await {
        Ok(failed) => {
            if failed {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(2);
        }
    }
}

/// Returns whether the handled event replied with an error status.
async fn run() -> Result<bool> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    tracing::info!(
        config = %cli.config.display(),
        resolver = ?config.resolver.mode,
        "configuration loaded"
    );
    let event = command_event(cli.command)?;

    let directory = HttpDirectoryAdapter::new(&config.directory, &config.schema);
    let docstore = HttpDocStoreAdapter::new(
        &config.wiki,
        &config.directory.email,
        &config.directory.api_token,
    );

    match config.resolver.mode {
        ResolverMode::Live => {
            let resolver = LiveResolver::new(directory.clone(), config.schema.username_attr);
            let engine = Engine::from_config(directory, docstore, resolver, &config);
            dispatch(&engine, event).await
        }
        ResolverMode::Cache => {
            let path = config
                .resolver
                .cache_path
                .clone()
                .ok_or_else(|| anyhow!("resolver.cache_path is not set"))?;
            let engine =
                Engine::from_config(directory, docstore, CacheResolver::new(path), &config);
            dispatch(&engine, event).await
        }
    }
}

async fn dispatch<R: EmployeeResolver>(
    engine: &Engine<HttpDirectoryAdapter, HttpDocStoreAdapter, R>,
    event: InboundEvent,
) -> Result<bool> {
    let reply = engine.handle_event(event).await;
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(reply.is_error())
}

/// Map a CLI subcommand onto the host event it stands for.
fn command_event(command: Commands) -> Result<InboundEvent> {
    match command {
        Commands::Assign {
            object_key,
            employee_id,
        } => Ok(InboundEvent::AssetAssigned {
            object_key: ObjectKey::new(object_key),
            employee_id: EmployeeId::new(employee_id),
        }),
        Commands::Employee(args) => match args.command {
            EmployeeCommands::Add {
                employee_id,
                username,
            } => Ok(InboundEvent::EmployeeAdded {
                employee_id: EmployeeId::new(employee_id),
                username,
            }),
            EmployeeCommands::Remove { employee_id } => Ok(InboundEvent::EmployeeRemoved {
                employee_id: EmployeeId::new(employee_id),
            }),
        },
        Commands::Export => Ok(InboundEvent::RosterExport),
        Commands::Handle { payload } => {
            let content = std::fs::read_to_string(&payload)
                .with_context(|| format!("failed to read payload {}", payload.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("invalid event payload {}", payload.display()))
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

mod cli;
mod commands;
mod config;
mod navigator;
mod output;
mod resource_kind;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{CliArgs, Command};
use client::ApiClient;
use common::FileSessionStore;
use navigator::TerminalNavigator;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Load configuration
    let mut cfg = config::AdminConfig::load(&args.config)
        .with_context(|| format!("Failed to load configuration from {}", args.config))?;

    // Override with command line arguments
    if let Some(environment) = args.environment {
        cfg.environment = environment;
    }
    if let Some(host) = args.host {
        cfg.host = Some(host);
    }
    if let Some(base_url) = args.base_url {
        cfg.base_url = Some(base_url);
    }
    if let Some(session_file) = args.session_file {
        cfg.session_file = session_file;
    }
    if let Some(log_level) = args.log_level {
        cfg.log_level = log_level;
    }
    if let Some(log_dir) = args.log_dir {
        cfg.log_dir = Some(log_dir);
    }

    if let Command::InitConfig { force } = args.command {
        if Path::new(&args.config).exists() && !force {
            bail!("{} already exists, pass --force to overwrite", args.config);
        }
        cfg.save(&args.config)?;
        println!("Configuration written to {}", args.config);
        return Ok(());
    }

    // Initialize tracing after configuration is ready
    let _guard = common::init_tracing(cfg.log_dir.as_deref(), &cfg.log_file, &cfg.log_level);
    debug!("Starting with configuration: {:?}", cfg);

    let store = Arc::new(FileSessionStore::new(&cfg.session_file));
    let client = ApiClient::new(cfg.client_config()?, store, Arc::new(TerminalNavigator))?;

    let result = commands::run(&client, args.command).await;

    // A rejected session may still be signing out in the background
    client.wait_for_forced_logouts().await;
    info!("Done");
    result
}

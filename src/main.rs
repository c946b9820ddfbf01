//! taskmirror
//!
//! A command-line to-do list client that mirrors a remote task API into a
//! local store and falls back to the mirror when the network is down.

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use std::sync::Arc;
use taskmirror::api::HttpTaskApi;
use taskmirror::cli::{Cli, Command};
use taskmirror::client::TaskClient;
use taskmirror::config::Config;
use taskmirror::format::{OutputFormat, render_tasks};
use taskmirror::server;
use taskmirror::store::{SqliteStore, TaskCache};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    // Load configuration, then apply CLI overrides
    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let format = OutputFormat::from_str(&config.format)
        .ok_or_else(|| anyhow::anyhow!("unknown output format: {}", config.format))?;

    match cli.command {
        Some(Command::Serve { port }) => {
            let (_shutdown_tx, addr) = server::start_server(port).await?;
            info!("serving task API on http://{}", addr);
            tokio::signal::ctrl_c().await?;
            Ok(())
        }
        command => {
            let client = build_client(&config)?;

            let tasks = match command {
                Some(Command::Add { text }) => client.create(&text).await?,
                Some(Command::Toggle { id, completed }) => client.toggle(&id, completed).await?,
                Some(Command::Delete { id }) => client.delete(&id).await?,
                Some(Command::List) | None => client.list().await?,
                Some(Command::Serve { .. }) => unreachable!("handled above"),
            };

            print!("{}", render_tasks(&tasks, format));
            Ok(())
        }
    }
}

/// Wire up the client from configuration: HTTP API plus SQLite mirror.
fn build_client(config: &Config) -> Result<TaskClient> {
    let store = SqliteStore::open(&config.store_path)?;
    let cache = TaskCache::new(Arc::new(store));
    let api = Arc::new(HttpTaskApi::new(config.api_url.clone()));
    Ok(TaskClient::new(api, cache))
}

//! Paddock server binary
//!
//! # Commands
//!
//! - `paddock serve` - run the HTTP server (the default)
//! - `paddock init-config` - print a default configuration file
//! - `paddock seed` - write the built-in seed data to the data directory
//!
//! Configuration comes from the first of `~/.config/paddock/config.toml`,
//! `/etc/paddock/config.toml`, `./config.toml`, or `--config PATH`, with
//! `PADDOCK_*` environment variables overriding file values.

use anyhow::Context;
use clap::{Parser, Subcommand};
use paddock::auth::{SessionGate, StaticAuthProvider};
use paddock::config::{generate_default_config, Config};
use paddock::store::{
    default_drivers, default_races, Keystore, SiteContent, TournamentStore, KEY_CONTENT,
    KEY_DRIVERS, KEY_RACES,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "paddock", version, about = "Racing-tournament site backend")]
struct Cli {
    /// Path to a configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print a default configuration file to stdout
    InitConfig,
    /// Write the built-in seed data to the data directory
    Seed {
        /// Overwrite existing data files
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };

    init_tracing(&config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::InitConfig => {
            print!("{}", generate_default_config());
            Ok(())
        }
        Command::Seed { force } => seed(config, force),
    }
}

fn init_tracing(config: &Config) {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new(format!(
            "paddock={},tower_http=warn",
            config.logging.level
        )),
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting Paddock v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", config.storage.data_dir);

    let keystore = Keystore::open(&config.storage.data_dir)
        .with_context(|| format!("opening data directory {}", config.storage.data_dir))?;

    let store = Arc::new(TournamentStore::open(keystore.clone()));
    let sessions = Arc::new(SessionGate::open(
        keystore,
        Box::new(StaticAuthProvider::new(
            config.admin.username.clone(),
            config.admin.password.clone(),
        )),
    ));

    let state = paddock::api::AppState::new(store, sessions);
    paddock::api::serve(state, &config.server)
        .await
        .context("running HTTP server")?;

    Ok(())
}

fn seed(config: Config, force: bool) -> anyhow::Result<()> {
    let keystore = Keystore::open(&config.storage.data_dir)
        .with_context(|| format!("opening data directory {}", config.storage.data_dir))?;

    for key in [KEY_DRIVERS, KEY_RACES, KEY_CONTENT] {
        if keystore.path(key).exists() && !force {
            anyhow::bail!(
                "{:?} already exists; pass --force to overwrite",
                keystore.path(key)
            );
        }
    }

    keystore.try_save(KEY_DRIVERS, &default_drivers())?;
    keystore.try_save(KEY_RACES, &default_races())?;
    keystore.try_save(KEY_CONTENT, &SiteContent::default())?;

    tracing::info!("Seed data written to {}", config.storage.data_dir);
    Ok(())
}

//! Smart Life Manager API server binary.
//!
//! This binary creates the concrete database and weather implementations and
//! passes them to the API server. The API layer remains agnostic of both.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use smartlife::api::{self, ApiError};
use smartlife::config::{Config, ConfigError};
use smartlife::db::{Database, DbError, SqliteDatabase};
use smartlife::weather::{OpenMeteoClient, WeatherError};
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    #[diagnostic(code(smartlife::binary::database))]
    Database(#[from] DbError),

    #[error("Weather client error: {0}")]
    #[diagnostic(code(smartlife::binary::weather))]
    Weather(#[from] WeatherError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(smartlife::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(smartlife::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "smartlife-api")]
#[command(author, version, about = "Smart Life Manager API server", long_about = None)]
struct Cli {
    /// YAML config file (overrides $SMARTLIFE_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file path (defaults to ~/.local/share/smartlife/smartlife.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    run(Cli::parse()).await.map_err(Into::into)
}

async fn run(cli: Cli) -> Result<(), BinaryError> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if let Some(db) = cli.db {
        config = config.with_database(db);
    }
    if cli.debug {
        config = config.with_debug(true);
    }

    api::init_tracing(config.debug);
    info!(path = %config.database.display(), "Opening database");

    // Ensure parent directory exists
    if let Some(parent) = config.database.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&config.database).await?;
    db.migrate().await?;
    info!("Database migrations complete");

    let weather = OpenMeteoClient::new(&config.weather)?;

    api::run(&config, db, weather).await?;
    Ok(())
}

//! Server configuration.
//!
//! Resolution order: builder overrides (CLI flags) > environment >
//! YAML file > defaults.

use std::env;
use std::fs;
use std::net::IpAddr;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::paths::get_db_path;

/// Environment variable naming the YAML config file.
pub const CONFIG_ENV: &str = "SMARTLIFE_CONFIG";
/// Environment variable overriding the database path.
pub const DB_ENV: &str = "SMARTLIFE_DB";
/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "SMARTLIFE_PORT";

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(smartlife::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    #[diagnostic(
        code(smartlife::config::parse),
        help("Expected top-level keys: database, app (debug, host, port), weather.")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value '{value}' for {name}")]
    #[diagnostic(code(smartlife::config::env))]
    InvalidEnv { name: &'static str, value: String },
}

/// Upstream weather service settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub geocode_url: String,
    pub forecast_url: String,
    /// Per-request timeout. Zero is rejected: reqwest would fail every request.
    #[serde(deserialize_with = "non_zero_secs")]
    pub timeout_secs: u64,
    /// Sent with every upstream request; Nominatim rejects anonymous clients.
    pub user_agent: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocode_url: "https://nominatim.openstreetmap.org/search".to_string(),
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            timeout_secs: 5,
            user_agent: concat!("smartlife/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

fn non_zero_secs<'de, D>(de: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    NonZeroU64::deserialize(de).map(NonZeroU64::get)
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// SQLite database file
    pub database: PathBuf,
    /// Verbose logging
    pub debug: bool,
    pub weather: WeatherConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
            database: get_db_path(),
            debug: false,
            weather: WeatherConfig::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    database: Option<PathBuf>,
    app: AppSection,
    weather: Option<WeatherConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AppSection {
    debug: Option<bool>,
    host: Option<IpAddr>,
    port: Option<u16>,
}

impl Config {
    /// Load configuration from an optional YAML file, then apply environment
    /// overrides.
    ///
    /// `path` falls back to `$SMARTLIFE_CONFIG`. No file at all means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a YAML file on top of the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        let file: FileConfig = serde_yaml::from_str(text)?;
        let mut config = Self::default();

        if let Some(database) = file.database {
            config.database = database;
        }
        if let Some(debug) = file.app.debug {
            config.debug = debug;
        }
        if let Some(host) = file.app.host {
            config.host = host;
        }
        if let Some(port) = file.app.port {
            config.port = port;
        }
        if let Some(weather) = file.weather {
            config.weather = weather;
        }
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(db) = env::var(DB_ENV) {
            self.database = PathBuf::from(db);
        }
        if let Ok(port) = env::var(PORT_ENV) {
            self.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV,
                value: port,
            })?;
        }
        Ok(())
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_database(mut self, database: PathBuf) -> Self {
        self.database = database;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/**
 * Server Configuration
 *
 * Startup flags and their validated form. Configuration is read once from
 * the command line (and `DATABASE_URL` in the environment or a `.env` file)
 * and is not reloadable.
 *
 * # Flags
 *
 * ```text
 * restaurant-server [--debug] [--threaded] [--database-url URL] [--max-connections N] [HOST] [PORT]
 * ```
 *
 * - `HOST` defaults to `0.0.0.0` (all interfaces)
 * - `PORT` defaults to `8111`
 * - `--debug` raises the default log level to `debug`
 * - `--threaded` serves on the multi-threaded runtime
 */

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::backend::database::DatabaseConfig;

/// Command-line arguments of the server binary
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Restaurant review web server")]
pub struct ServerArgs {
    /// Interface to listen on
    #[arg(value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(value_name = "PORT", default_value_t = 8111)]
    pub port: u16,

    /// Verbose logging
    #[arg(long)]
    pub debug: bool,

    /// Serve requests on a multi-threaded runtime
    #[arg(long)]
    pub threaded: bool,

    /// Connection string of the relational store
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://restaurant_reviews.db?mode=rwc"
    )]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,
}

/// Validated server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub debug: bool,
    pub threaded: bool,
    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8111)),
            debug: false,
            threaded: false,
            database: DatabaseConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid host: {0}")]
    InvalidHost(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("max connections must be at least 1")]
    NoConnections,
}

impl ServerArgs {
    /// Validate the arguments and build a `ServerConfig`
    pub fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let host = match self.host.as_str() {
            "localhost" => IpAddr::from([127, 0, 0, 1]),
            other => other
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?,
        };

        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("database url"));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::NoConnections);
        }

        Ok(ServerConfig {
            addr: SocketAddr::new(host, self.port),
            debug: self.debug,
            threaded: self.threaded,
            database: DatabaseConfig {
                url: self.database_url,
                max_connections: self.max_connections,
                acquire_timeout: Duration::from_secs(5),
            },
        })
    }
}

impl ServerConfig {
    /// Default tracing filter for this configuration
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

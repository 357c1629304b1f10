//! Database Module
//!
//! This module owns the process-wide SQLite connection pool and everything
//! handlers need to talk to it.
//!
//! # Key Components
//!
//! - `create_pool`: Builds the pool from a connection string and bootstraps the schema
//! - `init_schema`: Executes `schema.sql` (idempotent, `CREATE TABLE IF NOT EXISTS`)
//! - `connection::DbConn`: Per-request connection extractor
//! - `filters::FilterSet`: Conditional `WHERE`/`HAVING` composition over `QueryBuilder`
//!
//! # Connection Lifecycle
//!
//! The pool is created once at startup and stored in `AppState`. Each request
//! acquires one connection through `DbConn` and returns it to the pool when
//! the handler finishes, whatever the outcome.

pub mod connection;
pub mod filters;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub use connection::DbConn;
pub use filters::{Filter, FilterSet};

/// Schema bootstrap executed at startup
const SCHEMA: &str = include_str!("schema.sql");

/// Connection settings for the relational store
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// sqlx connection string, e.g. `sqlite://restaurant_reviews.db?mode=rwc`
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// How long a request waits for a free connection
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://restaurant_reviews.db?mode=rwc".to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Create the connection pool and make sure the schema exists
///
/// Foreign keys are enforced on every connection. Idle connections are kept
/// open so that `sqlite::memory:` databases survive between requests.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.url)?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    init_schema(&pool).await?;

    Ok(pool)
}

/// Execute the schema bootstrap against the pool
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    tracing::info!("Database schema initialized");
    Ok(())
}

/**
 * Server Initialization
 *
 * Builds the Axum application: connection pool, renderer, application
 * state, router.
 *
 * # Initialization Process
 *
 * 1. Create the connection pool and bootstrap the schema
 * 2. Wrap the pool and renderer into `AppState`
 * 3. Create the router with all routes
 */

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::database::create_pool;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::templates::{HtmlRenderer, Renderer};

/// Create and configure the Axum application with the built-in HTML renderer
///
/// # Errors
///
/// Fails if the pool cannot be created or the schema cannot be applied.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing restaurant review server");

    let pool = create_pool(&config.database).await?;

    Ok(create_app_with(pool, Arc::new(HtmlRenderer)))
}

/// Create the application from an existing pool and renderer
///
/// The pool's schema must already be initialized.
pub fn create_app_with(pool: SqlitePool, renderer: Arc<dyn Renderer>) -> Router<()> {
    let app_state = AppState::new(pool, renderer);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}

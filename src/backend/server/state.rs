/**
 * Application State Management
 *
 * `AppState` is the process-wide state shared by every handler: the
 * connection pool and the template renderer. Both are created once at
 * startup and cloned cheaply into each request.
 */

use std::sync::Arc;

use serde_json::Value;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::templates::{Page, Renderer, Template};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Process-wide connection pool; requests borrow one connection each
    pub pool: SqlitePool,
    /// Template renderer
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    pub fn new(pool: SqlitePool, renderer: Arc<dyn Renderer>) -> Self {
        Self { pool, renderer }
    }

    /// Render a page with the given context
    pub fn render(&self, template: Template, context: &Value) -> Result<Page, BackendError> {
        let html = self.renderer.render(template, context)?;
        Ok(Page(html))
    }
}

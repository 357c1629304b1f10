/**
 * Per-Request Database Connection
 *
 * `DbConn` is an Axum extractor that acquires one pooled connection when a
 * handler starts and gives it back to the pool when the handler returns.
 *
 * # Failure Behavior
 *
 * Acquisition never rejects the request. If the pool cannot hand out a
 * connection, the failure is logged and remembered; the first attempt to use
 * the connection then fails the request with `BackendError::Unavailable`.
 * Handlers that never touch the store (a GET of the login form, say) still
 * render normally.
 */

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::{pool::PoolConnection, Sqlite, SqliteConnection};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Connection owned by a single request
pub struct DbConn {
    conn: Result<PoolConnection<Sqlite>, String>,
}

impl DbConn {
    /// Borrow the underlying connection
    ///
    /// # Errors
    ///
    /// `BackendError::Unavailable` if the connection could not be acquired
    /// at request start.
    pub fn get(&mut self) -> Result<&mut SqliteConnection, BackendError> {
        match &mut self.conn {
            Ok(conn) => Ok(&mut **conn),
            Err(message) => Err(BackendError::unavailable(message.clone())),
        }
    }
}

impl FromRequestParts<AppState> for DbConn {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await.map_err(|e| {
            tracing::error!("Problem connecting to database: {:?}", e);
            e.to_string()
        });
        Ok(DbConn { conn })
    }
}

/**
 * Backend Error Types
 *
 * This module defines the errors a request can end with. Write failures on
 * form submissions are not represented here: those are caught by the handler
 * and shown on the re-rendered form instead.
 *
 * # Error Categories
 *
 * - `Database` - A read query failed (500)
 * - `Unavailable` - No connection could be acquired for the request (503)
 * - `NotFound` - The addressed entity does not exist (404)
 * - `BadRequest` - A query parameter could not be parsed (400)
 * - `Render` - The template renderer failed (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::templates::RenderError;

/// Backend-specific error types
///
/// Each variant maps to one HTTP status code and can be returned directly
/// from a handler.
///
/// ```rust
/// use restaurant_reviews::backend::error::BackendError;
///
/// let err = BackendError::not_found("Restaurant 7 not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Query failed while reading
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request has no usable connection to the store
    #[error("Database unavailable: {message}")]
    Unavailable {
        /// Human-readable error message
        message: String,
    },

    /// Entity lookup returned no row
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Malformed request input
    #[error("Bad request: {message}")]
    BadRequest {
        /// Human-readable error message
        message: String,
    },

    /// Template rendering failed
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl BackendError {
    /// Create a new unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new bad-request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Database` - 500 Internal Server Error
    /// - `Unavailable` - 503 Service Unavailable
    /// - `NotFound` - 404 Not Found
    /// - `BadRequest` - 400 Bad Request
    /// - `Render` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::Database(err) => err.to_string(),
            Self::Unavailable { message }
            | Self::NotFound { message }
            | Self::BadRequest { message } => message.clone(),
            Self::Render(err) => err.to_string(),
        }
    }
}

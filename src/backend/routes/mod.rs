//! Routes Module
//!
//! HTTP route configuration for the application.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs      - Module exports and redirect helper
//! └── router.rs   - Main router creation
//! ```

/// Main router creation
pub mod router;

use axum::{
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
};

pub use router::create_router;

/// `302 Found` redirect to a local path
pub fn redirect_to(path: &'static str) -> Response {
    (StatusCode::FOUND, [(LOCATION, path)]).into_response()
}

//! Backend Module
//!
//! This module contains all server-side code for the restaurant review
//! application. It provides an Axum HTTP server backed by SQLite through sqlx.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Process configuration, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`database`** - Pool creation, per-request connections, filter builder
//! - **`auth`** - Users, identity cookie, login/register/logout handlers
//! - **`middleware`** - `CurrentUser` extractor guarding protected routes
//! - **`reviews`** - Review feed and review submission
//! - **`restaurants`** - Restaurant listing, detail page, restaurant submission
//! - **`dishes`** - Dish listing with allergen filtering, dish submission
//! - **`templates`** - Page identifiers and the HTML renderer
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── database/       - Pool, connections, filters, schema
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! ├── reviews/        - Reviews
//! ├── restaurants/    - Restaurants
//! ├── dishes/         - Dishes and allergens
//! ├── templates/      - Rendering
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the process-wide connection pool and the renderer. No
//! entity state lives in the process between requests; every page view
//! re-queries the store. Each request acquires its own pooled connection and
//! releases it when the handler returns.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Connection pool, per-request connections and query filters
pub mod database;

/// Authentication and user management
pub mod auth;

/// Extractors for request processing
pub mod middleware;

/// Review feed and submission
pub mod reviews;

/// Restaurant listing, detail and submission
pub mod restaurants;

/// Dish listing and submission
pub mod dishes;

/// Template identifiers and rendering
pub mod templates;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
pub use server::state::AppState;

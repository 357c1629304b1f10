//! Restaurant Reviews - Main Library
//!
//! A small server-rendered web application for reviewing restaurants:
//! user registration and login, restaurant listing and search, dish listing
//! with allergen filtering, and review/dish submission.
//!
//! # Overview
//!
//! Every route follows the same shape:
//!
//! 1. Read the `user_id` identity cookie (redirect to `/login` if absent)
//! 2. Run one or more parameterized SQL statements against SQLite
//! 3. Build a template context
//! 4. Render HTML or return a redirect
//!
//! # Module Structure
//!
//! - **`backend`** - Axum server, route handlers, data access, templates
//!
//! # Usage
//!
//! ```rust,no_run
//! use restaurant_reviews::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), restaurant_reviews::backend::BackendError> {
//! let config = ServerConfig::default();
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, BackendError>` for request-level failures
//! - Form submissions catch write failures and re-render the form with a message
//! - Missing restaurants surface as 404

/// Backend server-side code
pub mod backend;

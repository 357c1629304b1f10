//! Authentication Module
//!
//! User registration, login and logout, and the identity cookie that carries
//! the logged-in user between requests.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User inserts and credential lookup
//! ├── sessions.rs     - Identity cookie parsing and issuing
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! Passwords are stored and compared in plaintext. The cookie value is the
//! raw user id with no signature or expiry.

/// User database operations
pub mod users;

/// Identity cookie
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used handlers
pub use handlers::{login, login_form, logout, register, register_form};

//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and page rendering
//! ├── config.rs       - Command-line flags and validated configuration
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ServerArgs` parsed by clap, validated into `ServerConfig`
//! 2. **Pool**: SQLite pool created once, schema bootstrapped
//! 3. **State**: Pool and renderer wrapped in `AppState`
//! 4. **Router**: All routes configured

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ServerArgs, ServerConfig};
pub use init::{create_app, create_app_with};
pub use state::AppState;

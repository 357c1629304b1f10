//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── login.rs     - GET/POST /login
//! ├── register.rs  - GET/POST /register
//! └── logout.rs    - GET /logout
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email, password → User row → redirect to `/login`
//! 2. **Login**: username, password → exact match → `user_id` cookie → redirect to `/`
//! 3. **Logout**: cookie cleared → redirect to `/login`

/// Login handlers
pub mod login;

/// Registration handlers
pub mod register;

/// Logout handler
pub mod logout;

pub use login::{login, login_form};
pub use logout::logout;
pub use register::{register, register_form};

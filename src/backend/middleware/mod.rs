//! Middleware Module
//!
//! Request extractors that run before handler logic.
//!
//! - **`auth`** - `CurrentUser`, which redirects unauthenticated requests to `/login`
//! - **`fields`** - `QueryFields` and `FormFields`, first-value-wins field access

pub mod auth;
pub mod fields;

pub use auth::CurrentUser;
pub use fields::{Fields, FormFields, QueryFields};

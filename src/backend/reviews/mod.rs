//! Reviews Module
//!
//! The review feed on `/` and review submission.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

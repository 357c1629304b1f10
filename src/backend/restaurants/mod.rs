//! Restaurants Module
//!
//! Restaurant listing with rating aggregates, the per-restaurant page and
//! restaurant submission.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

//! Dishes Module
//!
//! Dish listing with allergen exclusion and dish submission. Allergen
//! lookups are shared with the restaurant page.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

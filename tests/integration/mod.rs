//! Integration tests
//!
//! Every test drives the full router against its own in-memory store.

mod auth_test;
mod restaurants_test;
mod reviews_test;
mod scenarios_test;

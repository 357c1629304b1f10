//! Test suite for the restaurant review server
//!
//! This module organizes all tests

pub mod integration;

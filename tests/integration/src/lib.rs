//! Integration test utilities for the enrichment engine
//!
//! This crate provides an in-memory implementation of the store ports plus
//! fixtures for driving the services end to end without a database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

//! Test utilities
//!
//! Fixture factories and a pre-populated application state for handler tests.

pub mod fixtures;

pub use fixtures::*;

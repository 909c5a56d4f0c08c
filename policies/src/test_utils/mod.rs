//! Test utilities
//!
//! Fixture factories for policy tests.

pub mod fixtures;

pub use fixtures::*;

//! HTTP handlers
//!
//! Axum request handlers for the policy service endpoints.

pub mod policies;

pub use policies::{check_policy, get_policy};

//! HTTP handlers
//!
//! Axum request handlers for the incident service endpoints.

pub mod attachments;
pub mod incidents;

pub use attachments::attachment_metadata;
pub use incidents::{list_closed_incidents, list_incidents, patch_incident};

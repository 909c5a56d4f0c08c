//! Domain layer
//!
//! Contains the incident model and its transition rules.
//! - `entities`: incident records, history entries, attachment metadata
//! - `ports`: Trait definitions for the incident registry

pub mod entities;
pub mod ports;

//! Application layer
//!
//! Services coordinate between domain entities, ports, and configuration.

pub mod attachment_service;
pub mod incident_service;
pub mod transition_parser;

pub use attachment_service::AttachmentService;
pub use incident_service::IncidentService;

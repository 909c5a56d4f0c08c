//! Application layer
//!
//! Services coordinate between domain entities, ports, and configuration.

pub mod catalog;
pub mod check_request;
pub mod policy_service;
pub mod resolution_rules;

pub use catalog::RecommendationCatalog;
pub use check_request::CheckPolicyRequest;
pub use policy_service::PolicyService;

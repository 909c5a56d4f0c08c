//! In-memory adapters
//!
//! The incident registry lives for the lifetime of the process and is seeded
//! once at startup from fixture documents.

pub mod fixtures;
pub mod incident_repo;

pub use fixtures::FixtureSet;
pub use incident_repo::InMemoryIncidentRepository;

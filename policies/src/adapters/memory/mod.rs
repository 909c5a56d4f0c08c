//! In-memory adapters

pub mod fixtures;
pub mod policy_repo;

pub use policy_repo::InMemoryPolicyRepository;

//! Domain ports (traits)

pub mod repositories;

pub use repositories::PolicyRepository;

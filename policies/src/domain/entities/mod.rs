//! Domain entities

pub mod policy;
pub mod recommendation;

pub use policy::Policy;
pub use recommendation::{Recommendation, SolutionCode};

#[cfg(test)]
pub use policy::DATE_FORMAT;
#[cfg(test)]
pub use recommendation::AutomaticResolution;

//! Domain layer
//!
//! - `entities`: policies, solution codes and recommendations
//! - `ports`: Trait definitions for the policy registry

pub mod entities;
pub mod ports;

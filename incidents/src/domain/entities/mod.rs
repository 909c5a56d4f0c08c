//! Domain entities

pub mod attachment;
pub mod incident;

pub use attachment::AttachmentMetadata;
pub use incident::{Incident, Transition, TransitionContext, TIMESTAMP_FORMAT};

#[cfg(test)]
pub use attachment::AttachmentKind;
#[cfg(test)]
pub use incident::{HistoryEntry, IncidentStatus};

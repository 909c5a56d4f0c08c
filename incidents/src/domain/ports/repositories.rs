//! Repository port traits

use async_trait::async_trait;

use crate::domain::entities::{Incident, Transition, TransitionContext};
use crate::error::DomainError;

/// Registry of open incidents plus the read-only closed archive
#[async_trait]
pub trait IncidentRepository: Send + Sync {
    /// List incidents in insertion order, optionally restricted to one mailbox
    async fn list(&self, mailbox: Option<&str>) -> Result<Vec<Incident>, DomainError>;

    /// List the closed archive
    async fn list_closed(&self) -> Result<Vec<Incident>, DomainError>;

    /// Find an incident by its id
    async fn find_by_id(&self, id: &str) -> Result<Option<Incident>, DomainError>;

    /// Apply a transition atomically and return the updated incident.
    ///
    /// Fails with `NotFound` for unknown ids; on any error nothing is mutated.
    async fn apply_transition(
        &self,
        id: &str,
        transition: &Transition,
        ctx: &TransitionContext,
    ) -> Result<Incident, DomainError>;
}

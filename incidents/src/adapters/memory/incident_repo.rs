//! In-memory adapter for IncidentRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Incident, Transition, TransitionContext};
use crate::domain::ports::IncidentRepository;
use crate::error::DomainError;

/// Incident registry held in process memory.
///
/// The open collection is guarded by a single lock so each transition is
/// applied as one atomic step. The closed archive never changes.
#[derive(Debug, Default)]
pub struct InMemoryIncidentRepository {
    incidents: RwLock<Vec<Incident>>,
    closed: Vec<Incident>,
}

impl InMemoryIncidentRepository {
    pub fn new(incidents: Vec<Incident>, closed: Vec<Incident>) -> Self {
        Self {
            incidents: RwLock::new(incidents),
            closed,
        }
    }
}

#[async_trait]
impl IncidentRepository for InMemoryIncidentRepository {
    async fn list(&self, mailbox: Option<&str>) -> Result<Vec<Incident>, DomainError> {
        let incidents = self.incidents.read().await;

        Ok(match mailbox {
            Some(mailbox) => incidents
                .iter()
                .filter(|i| i.mailbox == mailbox)
                .cloned()
                .collect(),
            None => incidents.clone(),
        })
    }

    async fn list_closed(&self) -> Result<Vec<Incident>, DomainError> {
        Ok(self.closed.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Incident>, DomainError> {
        let incidents = self.incidents.read().await;
        Ok(incidents.iter().find(|i| i.id == id).cloned())
    }

    async fn apply_transition(
        &self,
        id: &str,
        transition: &Transition,
        ctx: &TransitionContext,
    ) -> Result<Incident, DomainError> {
        let mut incidents = self.incidents.write().await;

        let incident = incidents
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Incidencia no encontrada: {}", id)))?;

        incident.apply(transition, ctx)?;
        Ok(incident.clone())
    }
}

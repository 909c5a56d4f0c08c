//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{HistoryEntry, Incident, IncidentStatus, TransitionContext};

/// Create an open incident with an empty history
pub fn test_incident(id: &str, mailbox: &str) -> Incident {
    Incident {
        id: id.to_string(),
        mailbox: mailbox.to_string(),
        title: format!("Incidencia {}", id),
        requester: "TEST REQUESTER".to_string(),
        status: IncidentStatus::Open,
        opened_at: "23/05/2025 14:43:45 CEST".to_string(),
        priority: "3 - Media".to_string(),
        description: "Descripción de prueba".to_string(),
        history: vec![],
    }
}

/// Create a closed incident opened at the given `apertura`
pub fn test_closed_incident(id: &str, opened_at: &str) -> Incident {
    Incident {
        status: IncidentStatus::Closed,
        opened_at: opened_at.to_string(),
        history: vec![HistoryEntry {
            timestamp: opened_at.to_string(),
            author: "Sistema Automático".to_string(),
            resolution_code: Some("AUTO".to_string()),
            resolution_notes: Some("Resuelta en pruebas".to_string()),
            comment_mailbox: "GR_SAL_COMP_CIERRE".to_string(),
            assigned_mailbox: "GR_SAL_COMP_CIERRE".to_string(),
            status: IncidentStatus::Closed,
            detail: None,
            attachments: None,
        }],
        ..test_incident(id, "GR_SAL_COMP_CIERRE")
    }
}

/// Transition context with fixed values
pub fn test_context() -> TransitionContext {
    TransitionContext {
        timestamp: "01/06/2025 10:00:00 CEST".to_string(),
        author: "Sistema Automático".to_string(),
        closing_mailbox: "GR_SAL_COMP_CIERRE".to_string(),
        resolved_is_terminal: false,
    }
}

//! Incident domain entity
//!
//! An incident is a support case owned by a mailbox (queue). Every state change
//! appends one entry to its history; entries are never edited or removed.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Layout of `apertura` and `Fecha`, followed by a timezone abbreviation
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Incident status, serialized with the labels the workflow clients expect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentStatus {
    #[serde(rename = "En curso")]
    Open,
    #[serde(rename = "En espera")]
    OnHold,
    #[serde(rename = "Resuelta")]
    Resolved,
    #[serde(rename = "Pendiente implantar")]
    PendingDeployment,
    #[serde(rename = "Cerrada")]
    Closed,
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentStatus::Open => write!(f, "En curso"),
            IncidentStatus::OnHold => write!(f, "En espera"),
            IncidentStatus::Resolved => write!(f, "Resuelta"),
            IncidentStatus::PendingDeployment => write!(f, "Pendiente implantar"),
            IncidentStatus::Closed => write!(f, "Cerrada"),
        }
    }
}

impl std::str::FromStr for IncidentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en curso" => Ok(IncidentStatus::Open),
            "en espera" => Ok(IncidentStatus::OnHold),
            "resuelta" => Ok(IncidentStatus::Resolved),
            "pendiente implantar" => Ok(IncidentStatus::PendingDeployment),
            "cerrada" => Ok(IncidentStatus::Closed),
            _ => Err(format!("Unknown incident status: {}", s)),
        }
    }
}

/// One audit record of a status or ownership change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "Fecha")]
    pub timestamp: String,
    #[serde(rename = "Autor")]
    pub author: String,
    #[serde(rename = "CodigoResolucion", default)]
    pub resolution_code: Option<String>,
    #[serde(rename = "NotasResolucion", default)]
    pub resolution_notes: Option<String>,
    #[serde(rename = "buzonComentario")]
    pub comment_mailbox: String,
    #[serde(rename = "buzonAsignado")]
    pub assigned_mailbox: String,
    #[serde(rename = "estado")]
    pub status: IncidentStatus,
    #[serde(rename = "detalle", default)]
    pub detail: Option<String>,
    #[serde(rename = "adjuntos", default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
}

/// A trackable support case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    #[serde(rename = "codIncidencia")]
    pub id: String,
    #[serde(rename = "buzon")]
    pub mailbox: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "solicitante")]
    pub requester: String,
    #[serde(rename = "estado")]
    pub status: IncidentStatus,
    #[serde(rename = "apertura")]
    pub opened_at: String,
    #[serde(rename = "prioridad")]
    pub priority: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "historial", default)]
    pub history: Vec<HistoryEntry>,
}

/// A validated state-transition request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Reassign {
        target_mailbox: String,
        detail: Option<String>,
    },
    Resolve {
        notes: String,
    },
    Hold {
        detail: Option<String>,
    },
    PendingDeployment {
        detail: Option<String>,
    },
}

impl Transition {
    /// Wire name of the action
    pub fn action(&self) -> &'static str {
        match self {
            Transition::Reassign { .. } => "reasignar",
            Transition::Resolve { .. } => "resolver",
            Transition::Hold { .. } => "en_espera",
            Transition::PendingDeployment { .. } => "pendiente_implantar",
        }
    }

    /// Status the incident ends up in
    pub fn resulting_status(&self) -> IncidentStatus {
        match self {
            Transition::Reassign { .. } => IncidentStatus::Open,
            Transition::Resolve { .. } => IncidentStatus::Resolved,
            Transition::Hold { .. } => IncidentStatus::OnHold,
            Transition::PendingDeployment { .. } => IncidentStatus::PendingDeployment,
        }
    }
}

/// Values a transition needs that come from outside the incident
#[derive(Debug, Clone)]
pub struct TransitionContext {
    /// Already formatted for display
    pub timestamp: String,
    pub author: String,
    pub closing_mailbox: String,
    pub resolved_is_terminal: bool,
}

impl Incident {
    /// Calendar date the incident was opened, if `apertura` is well formed
    pub fn opened_date(&self) -> Option<NaiveDate> {
        let stamp = self.opened_at.get(..19)?;
        NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
            .ok()
            .map(|dt| dt.date())
    }

    /// Whether any further transition may be applied
    pub fn accepts_transitions(&self, resolved_is_terminal: bool) -> bool {
        match self.status {
            IncidentStatus::Closed => false,
            IncidentStatus::Resolved => !resolved_is_terminal,
            _ => true,
        }
    }

    /// Apply a transition in place, appending exactly one history entry.
    ///
    /// On error the incident is left untouched.
    pub fn apply(
        &mut self,
        transition: &Transition,
        ctx: &TransitionContext,
    ) -> Result<(), DomainError> {
        if !self.accepts_transitions(ctx.resolved_is_terminal) {
            return Err(DomainError::Validation(format!(
                "La incidencia {} está en estado {} y no admite más cambios",
                self.id, self.status
            )));
        }

        let status = transition.resulting_status();
        let previous_mailbox = self.mailbox.clone();

        let entry = match transition {
            Transition::Reassign {
                target_mailbox,
                detail,
            } => {
                self.mailbox = target_mailbox.clone();
                HistoryEntry {
                    timestamp: ctx.timestamp.clone(),
                    author: ctx.author.clone(),
                    resolution_code: None,
                    resolution_notes: None,
                    comment_mailbox: previous_mailbox,
                    assigned_mailbox: target_mailbox.clone(),
                    status,
                    detail: Some(
                        detail
                            .clone()
                            .unwrap_or_else(|| "Reasignación automática".to_string()),
                    ),
                    attachments: None,
                }
            }
            Transition::Resolve { notes } => HistoryEntry {
                timestamp: ctx.timestamp.clone(),
                author: ctx.author.clone(),
                resolution_code: Some("AUTO".to_string()),
                resolution_notes: Some(notes.clone()),
                comment_mailbox: previous_mailbox,
                assigned_mailbox: ctx.closing_mailbox.clone(),
                status,
                detail: None,
                attachments: None,
            },
            Transition::Hold { detail } => HistoryEntry {
                timestamp: ctx.timestamp.clone(),
                author: ctx.author.clone(),
                resolution_code: None,
                resolution_notes: None,
                comment_mailbox: previous_mailbox.clone(),
                assigned_mailbox: previous_mailbox,
                status,
                detail: Some(
                    detail
                        .clone()
                        .unwrap_or_else(|| "Puesta en espera automática".to_string()),
                ),
                attachments: None,
            },
            Transition::PendingDeployment { detail } => HistoryEntry {
                timestamp: ctx.timestamp.clone(),
                author: ctx.author.clone(),
                resolution_code: None,
                resolution_notes: None,
                comment_mailbox: previous_mailbox.clone(),
                assigned_mailbox: previous_mailbox,
                status,
                detail: Some(detail.clone().unwrap_or_else(|| {
                    "Marcada como pendiente de implantación".to_string()
                })),
                attachments: None,
            },
        };

        self.status = status;
        self.history.push(entry);
        Ok(())
    }
}

//! Incident service
//!
//! Lists incidents and applies state transitions requested by the workflow.

use std::sync::Arc;

use chrono::{DateTime, Months, Utc};
use chrono_tz::Tz;

use crate::app::transition_parser::{decode_patch_body, parse_transition};
use crate::config::Config;
use crate::domain::entities::{Incident, TransitionContext, TIMESTAMP_FORMAT};
use crate::domain::ports::IncidentRepository;
use crate::error::{AppError, DomainError};

/// Service for listing and transitioning incidents
pub struct IncidentService<IR>
where
    IR: IncidentRepository,
{
    incidents: Arc<IR>,
    timezone: Tz,
    system_author: String,
    closing_mailbox: String,
    resolved_is_terminal: bool,
}

impl<IR> IncidentService<IR>
where
    IR: IncidentRepository,
{
    pub fn new(incidents: Arc<IR>, config: &Config) -> Self {
        Self {
            incidents,
            timezone: config.timezone,
            system_author: config.system_author.clone(),
            closing_mailbox: config.closing_mailbox.clone(),
            resolved_is_terminal: config.resolved_is_terminal,
        }
    }

    /// List incidents, optionally only those owned by `mailbox`
    pub async fn list_incidents(&self, mailbox: Option<&str>) -> Result<Vec<Incident>, AppError> {
        let incidents = self.incidents.list(mailbox).await?;
        tracing::debug!(
            mailbox = mailbox.unwrap_or("*"),
            count = incidents.len(),
            "Listed incidents"
        );
        Ok(incidents)
    }

    /// List the closed archive, optionally only the last `months` months
    pub async fn list_closed_incidents(
        &self,
        months: Option<u32>,
    ) -> Result<Vec<Incident>, AppError> {
        self.list_closed_incidents_at(months, Utc::now()).await
    }

    pub async fn list_closed_incidents_at(
        &self,
        months: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Incident>, AppError> {
        let closed = self.incidents.list_closed().await?;

        let Some(months) = months else {
            return Ok(closed);
        };

        let today = now.with_timezone(&self.timezone).date_naive();
        let cutoff = today
            .checked_sub_months(Months::new(months))
            .ok_or_else(|| AppError::BadRequest(format!("meses fuera de rango: {}", months)))?;

        Ok(closed
            .into_iter()
            .filter(|incident| incident.opened_date().map_or(true, |d| d >= cutoff))
            .collect())
    }

    /// Apply a raw PATCH body to an incident.
    ///
    /// Unknown ids are reported before the body is decoded or validated.
    pub async fn apply_transition(&self, id: &str, body: &[u8]) -> Result<Incident, AppError> {
        if self.incidents.find_by_id(id).await?.is_none() {
            tracing::warn!(incident = id, "Transition requested for unknown incident");
            return Err(DomainError::NotFound(format!("Incidencia no encontrada: {}", id)).into());
        }

        let request = decode_patch_body(body)?;
        let transition = parse_transition(request)?;
        let ctx = self.context(Utc::now());
        let incident = self
            .incidents
            .apply_transition(id, &transition, &ctx)
            .await?;

        tracing::info!(
            incident = id,
            action = transition.action(),
            status = %incident.status,
            mailbox = %incident.mailbox,
            "Applied incident transition"
        );

        Ok(incident)
    }

    fn context(&self, now: DateTime<Utc>) -> TransitionContext {
        TransitionContext {
            timestamp: format_timestamp(now, self.timezone),
            author: self.system_author.clone(),
            closing_mailbox: self.closing_mailbox.clone(),
            resolved_is_terminal: self.resolved_is_terminal,
        }
    }
}

/// Render a history timestamp, e.g. `26/05/2025 08:08:10 CEST`
pub fn format_timestamp(now: DateTime<Utc>, timezone: Tz) -> String {
    now.with_timezone(&timezone)
        .format(&format!("{} %Z", TIMESTAMP_FORMAT))
        .to_string()
}

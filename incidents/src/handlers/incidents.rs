//! Incident handlers

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::domain::entities::Incident;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing incidents
#[derive(Debug, Deserialize)]
pub struct ListIncidentsQuery {
    /// Owning mailbox; all incidents when absent
    pub buzon: Option<String>,
}

/// Query parameters for the closed archive
#[derive(Debug, Deserialize)]
pub struct ClosedIncidentsQuery {
    /// Only incidents opened within the last N months
    pub meses: Option<u32>,
}

/// GET /api/incidencias
pub async fn list_incidents(
    State(state): State<AppState>,
    Query(query): Query<ListIncidentsQuery>,
) -> Result<Json<Vec<Incident>>, AppError> {
    let incidents = state
        .incident_service
        .list_incidents(query.buzon.as_deref())
        .await?;
    Ok(Json(incidents))
}

/// GET /api/incidencias/cerradas
pub async fn list_closed_incidents(
    State(state): State<AppState>,
    Query(query): Query<ClosedIncidentsQuery>,
) -> Result<Json<Vec<Incident>>, AppError> {
    let incidents = state
        .incident_service
        .list_closed_incidents(query.meses)
        .await?;
    Ok(Json(incidents))
}

/// PATCH /api/incidencias/:id
///
/// Apply a state transition. Returns the updated incident.
///
/// The body is taken raw so the id lookup runs before any decoding.
pub async fn patch_incident(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Incident>, AppError> {
    let incident = state.incident_service.apply_transition(&id, &body).await?;
    Ok(Json(incident))
}

//! Incident Mock Service
//!
//! Simulates the incident-management backend of the claims workflow: an
//! in-memory set of incidents with their audit history, transitions driven
//! over HTTP, and attachment lookup.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    handler::Handler,
    routing::{get, patch},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::memory::FixtureSet;
use adapters::InMemoryIncidentRepository;
use app::{AttachmentService, IncidentService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub incident_service: Arc<IncidentService<InMemoryIncidentRepository>>,
    pub attachment_service: Arc<AttachmentService>,
}

impl AppState {
    pub fn new(config: &Config, fixtures: FixtureSet) -> Self {
        let incident_repo = Arc::new(InMemoryIncidentRepository::new(
            fixtures.open,
            fixtures.closed,
        ));

        Self {
            incident_service: Arc::new(IncidentService::new(incident_repo, config)),
            attachment_service: Arc::new(AttachmentService::new(config)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the service router
pub fn app(state: AppState) -> Router {
    // Files on disk win; anything else falls through to the metadata handler
    let attachments = ServeDir::new(state.attachment_service.root())
        .fallback(handlers::attachment_metadata.with_state(state.clone()));

    Router::new()
        .route("/health", get(health))
        .route("/api/incidencias", get(handlers::list_incidents))
        .route(
            "/api/incidencias/cerradas",
            get(handlers::list_closed_incidents),
        )
        .route("/api/incidencias/:id", patch(handlers::patch_incident))
        .nest_service("/api/adjuntos", attachments)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,incident_mock=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting incident mock service...");

    let config = Config::from_env()?;
    let fixtures = FixtureSet::load(&config)?;
    tracing::info!(
        open = fixtures.open.len(),
        closed = fixtures.closed.len(),
        "Loaded incident fixtures"
    );
    tracing::info!(
        dir = %config.attachments_dir.display(),
        "Serving attachments"
    );

    let state = AppState::new(&config, fixtures);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

//! Policy Mock Service
//!
//! Simulates the policy-lookup backend of the claims workflow: read-only
//! policy records and a resolution check that recommends how a case tied to
//! a policy should be handled.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
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


use adapters::memory::fixtures::load_policies;
use adapters::InMemoryPolicyRepository;
use app::{PolicyService, RecommendationCatalog};
use config::Config;
use domain::entities::Policy;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub policy_service: Arc<PolicyService<InMemoryPolicyRepository>>,
}

impl AppState {
    pub fn new(policies: Vec<Policy>, catalog: RecommendationCatalog) -> Self {
        let policy_repo = Arc::new(InMemoryPolicyRepository::new(policies));
        Self {
            policy_service: Arc::new(PolicyService::new(policy_repo, catalog)),
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
    Router::new()
        .route("/health", get(health))
        .route("/api/poliza/:numeroPoliza", get(handlers::get_policy))
        .route("/api/comprobacionPoliza", post(handlers::check_policy))
        // Alternate spelling used by some clients
        .route("/api/comprobacion_poliza", post(handlers::check_policy))
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
                .unwrap_or_else(|_| "info,policy_mock=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting policy mock service...");

    let config = Config::from_env();
    let policies = load_policies(&config)?;
    let catalog = RecommendationCatalog::load(&config)?;
    tracing::info!(
        policies = policies.len(),
        catalog = catalog.entries().len(),
        "Loaded policy fixtures"
    );

    let state = AppState::new(policies, catalog);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

//! Policy handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use crate::app::CheckPolicyRequest;
use crate::domain::entities::{Policy, Recommendation};
use crate::error::AppError;
use crate::AppState;

/// GET /api/poliza/:numeroPoliza
pub async fn get_policy(
    State(state): State<AppState>,
    Path(policy_number): Path<String>,
) -> Result<Json<Policy>, AppError> {
    let policy = state.policy_service.get_policy(&policy_number).await?;
    Ok(Json(policy))
}

/// POST /api/comprobacionPoliza, POST /api/comprobacion_poliza
///
/// Accepts any body, whatever its content type, and always answers 200 with
/// a recommendation.
pub async fn check_policy(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Recommendation>, AppError> {
    let request = CheckPolicyRequest::from_body(&body);
    tracing::debug!(
        policy = request.policy_number.as_deref().unwrap_or("-"),
        code = request.solution_code.as_deref().unwrap_or("-"),
        "Resolution check requested"
    );

    let recommendation = state.policy_service.check_resolution(&request).await?;
    Ok(Json(recommendation))
}

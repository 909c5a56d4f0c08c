//! Policy service
//!
//! Policy lookup and the resolution check built on top of it.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::app::catalog::RecommendationCatalog;
use crate::app::check_request::CheckPolicyRequest;
use crate::app::resolution_rules;
use crate::domain::entities::{Policy, Recommendation, SolutionCode};
use crate::domain::ports::PolicyRepository;
use crate::error::{AppError, DomainError};

/// Service for policy lookups and resolution checks
pub struct PolicyService<PR>
where
    PR: PolicyRepository,
{
    policies: Arc<PR>,
    catalog: RecommendationCatalog,
}

impl<PR> PolicyService<PR>
where
    PR: PolicyRepository,
{
    pub fn new(policies: Arc<PR>, catalog: RecommendationCatalog) -> Self {
        Self { policies, catalog }
    }

    /// Look up a policy by number
    pub async fn get_policy(&self, policy_number: &str) -> Result<Policy, AppError> {
        self.policies
            .find_by_number(policy_number)
            .await?
            .ok_or_else(|| {
                tracing::debug!(policy = policy_number, "Policy not found");
                DomainError::NotFound(format!("Póliza no encontrada: {}", policy_number)).into()
            })
    }

    /// Recommend how to handle a case tied to a policy
    pub async fn check_resolution(
        &self,
        request: &CheckPolicyRequest,
    ) -> Result<Recommendation, AppError> {
        self.check_resolution_at(request, Utc::now()).await
    }

    pub async fn check_resolution_at(
        &self,
        request: &CheckPolicyRequest,
        now: DateTime<Utc>,
    ) -> Result<Recommendation, AppError> {
        let policy = match request.policy_number.as_deref() {
            Some(number) => self.policies.find_by_number(number).await?,
            None => None,
        };

        let code = request.solution_code();
        let recommendation = match (&policy, &code) {
            (None, _) => Recommendation::manual("Póliza no encontrada, revisar manualmente"),
            (Some(policy), Some(SolutionCode::FxProvision)) => {
                resolution_rules::fx_provision(policy, now)
            }
            (Some(policy), Some(SolutionCode::Nonconformity)) => {
                resolution_rules::nonconformity(policy)
            }
            (Some(_), _) => {
                let mut rng = rand::thread_rng();
                self.catalog.pick(&mut rng)
            }
        };

        tracing::info!(
            policy = request.policy_number.as_deref().unwrap_or("-"),
            code = %code.map(|c| c.to_string()).unwrap_or_default(),
            outcome = %recommendation.automatic_resolution,
            "Resolution check"
        );

        Ok(recommendation)
    }
}

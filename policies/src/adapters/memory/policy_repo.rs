//! In-memory adapter for PolicyRepository

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::Policy;
use crate::domain::ports::PolicyRepository;
use crate::error::DomainError;

/// Policy registry held in process memory. Never mutated after construction.
#[derive(Debug, Default)]
pub struct InMemoryPolicyRepository {
    policies: HashMap<String, Policy>,
}

impl InMemoryPolicyRepository {
    pub fn new(policies: Vec<Policy>) -> Self {
        Self {
            policies: policies
                .into_iter()
                .map(|p| (p.policy_number.clone(), p))
                .collect(),
        }
    }
}

#[async_trait]
impl PolicyRepository for InMemoryPolicyRepository {
    async fn find_by_number(&self, policy_number: &str) -> Result<Option<Policy>, DomainError> {
        Ok(self.policies.get(policy_number).cloned())
    }
}

//! Repository port traits

use async_trait::async_trait;

use crate::domain::entities::Policy;
use crate::error::DomainError;

/// Read-only registry of policies keyed by policy number
#[async_trait]
pub trait PolicyRepository: Send + Sync {
    /// Exact-match lookup by policy number
    async fn find_by_number(&self, policy_number: &str) -> Result<Option<Policy>, DomainError>;
}

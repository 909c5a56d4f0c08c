//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{Policy, DATE_FORMAT};

/// Create a policy with the given status and `fechaCreacion`
pub fn test_policy(policy_number: &str, status: &str, created_at: &str) -> Policy {
    Policy {
        policy_number: policy_number.to_string(),
        national_id: "12345678Z".to_string(),
        name: format!("TITULAR {}", policy_number),
        card_number: "T0000001".to_string(),
        birth_date: "01/01/1980".to_string(),
        status: status.to_string(),
        created_at: created_at.to_string(),
        rejection_reason: None,
    }
}

/// Create a policy created `days` calendar days before `now`
pub fn test_policy_created_days_ago(
    policy_number: &str,
    status: &str,
    now: DateTime<Utc>,
    days: i64,
) -> Policy {
    let created = (now - Duration::days(days)).date_naive();
    test_policy(
        policy_number,
        status,
        &created.format(DATE_FORMAT).to_string(),
    )
}

/// Create a rejected policy
pub fn test_rejected_policy(policy_number: &str, reason: Option<&str>) -> Policy {
    Policy {
        rejection_reason: reason.map(str::to_string),
        ..test_policy(policy_number, "rechazada", "01/03/2025")
    }
}

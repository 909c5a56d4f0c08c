//! Seed data for the policy registry

use std::collections::HashSet;

use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::domain::entities::Policy;

const POLICIES: &str = include_str!("../../../fixtures/policies.json");

/// Built-in policies, or the override file named in the config
pub fn load_policies(config: &Config) -> Result<Vec<Policy>> {
    match &config.policies_fixtures {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read policies from {}", path.display()))?;
            parse(&raw).with_context(|| format!("Invalid policies in {}", path.display()))
        }
        None => builtin_policies(),
    }
}

pub fn builtin_policies() -> Result<Vec<Policy>> {
    parse(POLICIES).context("Invalid built-in policy fixtures")
}

fn parse(raw: &str) -> Result<Vec<Policy>> {
    let policies: Vec<Policy> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for policy in &policies {
        if !seen.insert(policy.policy_number.as_str()) {
            bail!("Duplicate policy number: {}", policy.policy_number);
        }
    }

    Ok(policies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_policies_parse_with_valid_dates() {
        let policies = builtin_policies().unwrap();
        assert_eq!(policies.len(), 10);
        assert!(policies.iter().all(|p| p.created_on().is_some()));
    }

    #[test]
    fn builtin_policies_cover_rule_cases() {
        let policies = builtin_policies().unwrap();
        assert!(policies.iter().any(|p| p.is_in_provision()));
        assert!(policies
            .iter()
            .any(|p| p.is_rejected() && p.rejection_reason().is_some()));
    }

    #[test]
    fn duplicate_numbers_are_rejected() {
        let raw = r#"[
            {"poliza":"A","NIF":"1","nombre":"n","tarjeta":"t","fechaNacimiento":"01/01/1990",
             "estadoPoliza":"activa","fechaCreacion":"01/01/2025"},
            {"poliza":"A","NIF":"2","nombre":"n","tarjeta":"t","fechaNacimiento":"01/01/1990",
             "estadoPoliza":"activa","fechaCreacion":"01/01/2025"}
        ]"#;
        assert!(parse(raw).is_err());
    }

    #[test]
    fn override_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policies.json");
        std::fs::write(
            &path,
            r#"[{"poliza":"X-1","NIF":"1","nombre":"n","tarjeta":"t",
                 "fechaNacimiento":"01/01/1990","estadoPoliza":"baja",
                 "fechaCreacion":"01/01/2025"}]"#,
        )
        .unwrap();

        let config = Config {
            policies_fixtures: Some(path),
            ..Config::default()
        };
        let policies = load_policies(&config).unwrap();
        assert_eq!(policies.len(), 1);
        assert_eq!(policies[0].policy_number, "X-1");
        assert!(policies[0].rejection_reason.is_none());
    }
}

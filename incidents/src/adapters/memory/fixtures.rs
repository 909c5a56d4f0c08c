//! Seed data for the incident registry
//!
//! The default documents are compiled into the binary. Either one can be
//! replaced by a JSON file on disk.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::domain::entities::Incident;

const OPEN_INCIDENTS: &str = include_str!("../../../fixtures/incidents.json");
const CLOSED_INCIDENTS: &str = include_str!("../../../fixtures/closed_incidents.json");

/// Open and closed incident collections
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    pub open: Vec<Incident>,
    pub closed: Vec<Incident>,
}

impl FixtureSet {
    /// Built-in fixtures
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            open: parse(OPEN_INCIDENTS).context("Invalid built-in incident fixtures")?,
            closed: parse(CLOSED_INCIDENTS)
                .context("Invalid built-in closed incident fixtures")?,
        })
    }

    /// Built-in fixtures with any overrides named in the config
    pub fn load(config: &Config) -> Result<Self> {
        let builtin = Self::builtin()?;

        let open = match &config.incidents_fixtures {
            Some(path) => load_file(path)?,
            None => builtin.open,
        };
        let closed = match &config.closed_incidents_fixtures {
            Some(path) => load_file(path)?,
            None => builtin.closed,
        };

        Ok(Self { open, closed })
    }
}

fn parse(raw: &str) -> Result<Vec<Incident>> {
    let incidents: Vec<Incident> = serde_json::from_str(raw)?;
    ensure_unique_ids(&incidents)?;
    Ok(incidents)
}

fn load_file(path: &Path) -> Result<Vec<Incident>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixtures from {}", path.display()))?;
    parse(&raw).with_context(|| format!("Invalid fixtures in {}", path.display()))
}

fn ensure_unique_ids(incidents: &[Incident]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for incident in incidents {
        if !seen.insert(incident.id.as_str()) {
            anyhow::bail!("Duplicate incident id: {}", incident.id);
        }
    }
    Ok(())
}

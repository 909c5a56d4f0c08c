//! Canned recommendation catalog
//!
//! Answers for solution codes that have no modeled rule. The catalog is data:
//! the built-in document can be replaced by a JSON file at startup.

use anyhow::{bail, Context, Result};
use rand::Rng;

use crate::config::Config;
use crate::domain::entities::Recommendation;

const BUILTIN_CATALOG: &str = include_str!("../../fixtures/resolution_catalog.json");

/// Non-empty list of canned recommendations
#[derive(Debug, Clone)]
pub struct RecommendationCatalog {
    entries: Vec<Recommendation>,
}

impl RecommendationCatalog {
    pub fn new(entries: Vec<Recommendation>) -> Result<Self> {
        if entries.is_empty() {
            bail!("Recommendation catalog must not be empty");
        }
        Ok(Self { entries })
    }

    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CATALOG).context("Invalid built-in recommendation catalog")
    }

    /// Built-in catalog, or the override file named in the config
    pub fn load(config: &Config) -> Result<Self> {
        match &config.resolution_catalog {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read catalog from {}", path.display()))?;
                Self::parse(&raw).with_context(|| format!("Invalid catalog in {}", path.display()))
            }
            None => Self::builtin(),
        }
    }

    fn parse(raw: &str) -> Result<Self> {
        Self::new(serde_json::from_str(raw)?)
    }

    pub fn entries(&self) -> &[Recommendation] {
        &self.entries
    }

    pub fn contains(&self, recommendation: &Recommendation) -> bool {
        self.entries.contains(recommendation)
    }

    /// Uniformly random entry
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Recommendation {
        // entries is never empty, see `new`
        let index = rng.gen_range(0..self.entries.len());
        self.entries[index].clone()
    }
}

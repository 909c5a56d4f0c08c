//! Resolution recommendations
//!
//! The answer of a resolution check: how a case tied to a policy should be
//! handled automatically, plus a free-text explanation.

use serde::{Deserialize, Serialize};

/// Recommended automatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutomaticResolution {
    #[serde(rename = "cierre")]
    Close,
    #[serde(rename = "reasignacion")]
    Reassign,
    #[serde(rename = "en espera")]
    Hold,
    #[serde(rename = "manual")]
    Manual,
}

impl std::fmt::Display for AutomaticResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutomaticResolution::Close => write!(f, "cierre"),
            AutomaticResolution::Reassign => write!(f, "reasignacion"),
            AutomaticResolution::Hold => write!(f, "en espera"),
            AutomaticResolution::Manual => write!(f, "manual"),
        }
    }
}

/// A resolution-check answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "RESOLUCION AUTOMÁTICA")]
    pub automatic_resolution: AutomaticResolution,
    /// Target mailbox for reassignments, empty otherwise
    #[serde(rename = "BUZON REASIGNACION", default)]
    pub reassign_mailbox: String,
    #[serde(rename = "SOLUCIÓN")]
    pub explanation: String,
}

impl Recommendation {
    pub fn close(explanation: impl Into<String>) -> Self {
        Self {
            automatic_resolution: AutomaticResolution::Close,
            reassign_mailbox: String::new(),
            explanation: explanation.into(),
        }
    }

    pub fn manual(explanation: impl Into<String>) -> Self {
        Self {
            automatic_resolution: AutomaticResolution::Manual,
            reassign_mailbox: String::new(),
            explanation: explanation.into(),
        }
    }
}

/// Solution code attached to a resolution check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionCode {
    /// Claim about a policy stuck in provisioning
    FxProvision,
    /// Customer disagrees with a rejection
    Nonconformity,
    /// Anything without a modeled rule
    Other(String),
}

impl From<&str> for SolutionCode {
    fn from(code: &str) -> Self {
        match code {
            "fxprovicion" => SolutionCode::FxProvision,
            "disconformidad" => SolutionCode::Nonconformity,
            _ => SolutionCode::Other(code.to_string()),
        }
    }
}

impl std::fmt::Display for SolutionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionCode::FxProvision => write!(f, "fxprovicion"),
            SolutionCode::Nonconformity => write!(f, "disconformidad"),
            SolutionCode::Other(code) => write!(f, "{}", code),
        }
    }
}

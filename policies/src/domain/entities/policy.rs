//! Policy domain entity
//!
//! Policies are read-only: the service only looks them up.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Layout of `fechaCreacion` and `fechaNacimiento`
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const STATUS_IN_PROVISION: &str = "en provision";
const STATUS_REJECTED: &str = "rechazada";

/// An insurance policy record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(rename = "poliza")]
    pub policy_number: String,
    #[serde(rename = "NIF")]
    pub national_id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tarjeta")]
    pub card_number: String,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: String,
    #[serde(rename = "estadoPoliza")]
    pub status: String,
    #[serde(rename = "fechaCreacion")]
    pub created_at: String,
    #[serde(rename = "motivoRechazo", default)]
    pub rejection_reason: Option<String>,
}

impl Policy {
    pub fn is_in_provision(&self) -> bool {
        self.status_is(STATUS_IN_PROVISION)
    }

    pub fn is_rejected(&self) -> bool {
        self.status_is(STATUS_REJECTED)
    }

    /// Creation date, if `fechaCreacion` is well formed
    pub fn created_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.created_at.trim(), DATE_FORMAT).ok()
    }

    /// Rejection reason, treating an empty string as absent
    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    fn status_is(&self, expected: &str) -> bool {
        self.status == expected
    }
}

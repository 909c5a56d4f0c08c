//! Resolution-check request extraction
//!
//! The check endpoints accept any JSON body. Only the policy number and the
//! solution code are read; everything else is ignored.

use serde_json::Value;

use crate::domain::entities::SolutionCode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckPolicyRequest {
    pub policy_number: Option<String>,
    pub solution_code: Option<String>,
}

impl CheckPolicyRequest {
    /// Read a raw request body. Empty or non-JSON bodies carry no fields.
    pub fn from_body(body: &[u8]) -> Self {
        let value = serde_json::from_slice(body).unwrap_or(Value::Null);
        Self::from_value(&value)
    }

    pub fn from_value(body: &Value) -> Self {
        Self {
            policy_number: first_field(body, &["poliza"]),
            solution_code: first_field(body, &["codSolucion", "cod_solucion"]),
        }
    }

    pub fn solution_code(&self) -> Option<SolutionCode> {
        self.solution_code.as_deref().map(SolutionCode::from)
    }
}

/// First non-empty value among `names`. Numbers are stringified.
fn first_field(body: &Value, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| match body.get(name)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

//! Parser for incident patch bodies
//!
//! Turns the loosely shaped PATCH body into a validated `Transition`. Missing
//! required fields are rejected rather than defaulted.

use serde::Deserialize;

use crate::domain::entities::Transition;
use crate::error::DomainError;

/// PATCH /api/incidencias/:id body as sent by the workflow clients
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchIncidentRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(rename = "buzonDestino", default)]
    pub target_mailbox: Option<String>,
    #[serde(rename = "notasResolucion", default)]
    pub resolution_notes: Option<String>,
    #[serde(rename = "detalle", default)]
    pub detail: Option<String>,
}

/// Decode a raw PATCH body.
///
/// An empty body decodes to a request with no fields. Anything that is not a
/// JSON object of the expected shape is a validation error.
pub fn decode_patch_body(body: &[u8]) -> Result<PatchIncidentRequest, DomainError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PatchIncidentRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| DomainError::Validation(format!("Cuerpo de la petición no válido: {}", e)))
}

/// Parse a patch request into a transition
pub fn parse_transition(request: PatchIncidentRequest) -> Result<Transition, DomainError> {
    let action = non_blank(request.action)
        .ok_or_else(|| DomainError::Validation("Se requiere action".to_string()))?;
    let detail = non_blank(request.detail);

    match action.as_str() {
        "reasignar" => {
            let target_mailbox = non_blank(request.target_mailbox).ok_or_else(|| {
                DomainError::Validation("Se requiere buzonDestino para reasignar".to_string())
            })?;
            Ok(Transition::Reassign {
                target_mailbox,
                detail,
            })
        }
        "resolver" => {
            let notes = non_blank(request.resolution_notes).ok_or_else(|| {
                DomainError::Validation("Se requiere notasResolucion para resolver".to_string())
            })?;
            Ok(Transition::Resolve { notes })
        }
        "en_espera" => Ok(Transition::Hold { detail }),
        "pendiente_implantar" => Ok(Transition::PendingDeployment { detail }),
        other => Err(DomainError::Validation(format!(
            "Acción desconocida: {}",
            other
        ))),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> PatchIncidentRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decode_empty_body_has_no_fields() {
        let req = decode_patch_body(b"").unwrap();
        assert!(req.action.is_none());
        assert!(decode_patch_body(b"  \n").unwrap().action.is_none());
    }

    #[test]
    fn decode_rejects_wrongly_typed_fields() {
        let err = decode_patch_body(br#"{"action":5}"#).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn decode_rejects_non_json() {
        let err = decode_patch_body(b"action=resolver").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn decode_reads_wire_names() {
        let req = decode_patch_body(br#"{"action":"reasignar","buzonDestino":"GR_X"}"#).unwrap();
        assert_eq!(req.action.as_deref(), Some("reasignar"));
        assert_eq!(req.target_mailbox.as_deref(), Some("GR_X"));
    }

    #[test]
    fn parse_reassign_with_target() {
        let transition =
            parse_transition(request(r#"{"action":"reasignar","buzonDestino":"GR_X"}"#)).unwrap();
        assert_eq!(
            transition,
            Transition::Reassign {
                target_mailbox: "GR_X".to_string(),
                detail: None
            }
        );
    }

    #[test]
    fn parse_reassign_without_target_fails() {
        let err = parse_transition(request(r#"{"action":"reasignar"}"#)).unwrap_err();
        assert!(err.to_string().contains("buzonDestino"));
    }

    #[test]
    fn parse_reassign_with_blank_target_fails() {
        assert!(parse_transition(request(r#"{"action":"reasignar","buzonDestino":"  "}"#)).is_err());
    }

    #[test]
    fn parse_resolve_requires_notes() {
        let err = parse_transition(request(r#"{"action":"resolver"}"#)).unwrap_err();
        assert!(err.to_string().contains("notasResolucion"));

        let transition =
            parse_transition(request(r#"{"action":"resolver","notasResolucion":"hecho"}"#))
                .unwrap();
        assert_eq!(
            transition,
            Transition::Resolve {
                notes: "hecho".to_string()
            }
        );
    }

    #[test]
    fn parse_hold_and_pending_keep_detail() {
        let hold =
            parse_transition(request(r#"{"action":"en_espera","detalle":"falta captura"}"#))
                .unwrap();
        assert_eq!(
            hold,
            Transition::Hold {
                detail: Some("falta captura".to_string())
            }
        );

        let pending = parse_transition(request(r#"{"action":"pendiente_implantar"}"#)).unwrap();
        assert_eq!(pending, Transition::PendingDeployment { detail: None });
    }

    #[test]
    fn parse_unknown_or_missing_action_fails() {
        assert!(matches!(
            parse_transition(request(r#"{"action":"borrar"}"#)),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            parse_transition(request(r#"{}"#)),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn unrelated_fields_are_ignored() {
        let transition = parse_transition(request(
            r#"{"action":"en_espera","notasResolucion":"x","extra":42}"#,
        ))
        .unwrap();
        assert_eq!(transition, Transition::Hold { detail: None });
    }
}

//! HTTP client for the incident and policy mock services

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Serialize;
use serde_json::Value;

/// Client for both mock services
#[derive(Clone)]
pub struct MockClient {
    client: reqwest::Client,
    incidents_url: String,
    policies_url: String,
}

impl MockClient {
    pub fn new(incidents_url: &str, policies_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            incidents_url: incidents_url.trim_end_matches('/').to_string(),
            policies_url: policies_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn incidents_url(&self) -> &str {
        &self.incidents_url
    }

    #[cfg(test)]
    pub fn policies_url(&self) -> &str {
        &self.policies_url
    }

    /// List incidents, optionally for one mailbox
    pub async fn list_incidents(&self, mailbox: Option<&str>) -> Result<Value> {
        let url = format!("{}/api/incidencias", self.incidents_url);
        let mut request = self.client.get(&url);
        if let Some(mailbox) = mailbox {
            request = request.query(&[("buzon", mailbox)]);
        }
        send(request, "GET /api/incidencias").await
    }

    /// List closed incidents, optionally only the last `months` months
    pub async fn list_closed_incidents(&self, months: Option<u32>) -> Result<Value> {
        let url = format!("{}/api/incidencias/cerradas", self.incidents_url);
        let mut request = self.client.get(&url);
        if let Some(months) = months {
            request = request.query(&[("meses", months)]);
        }
        send(request, "GET /api/incidencias/cerradas").await
    }

    /// Apply a transition to an incident
    pub async fn patch_incident(&self, id: &str, patch: &PatchIncidentRequest) -> Result<Value> {
        let url = format!("{}/api/incidencias/{}", self.incidents_url, id);
        send(
            self.client.patch(&url).json(patch),
            &format!("PATCH /api/incidencias/{}", id),
        )
        .await
    }

    /// Fetch attachment metadata
    pub async fn attachment(&self, filename: &str) -> Result<Value> {
        let url = format!("{}/api/adjuntos/{}", self.incidents_url, filename);
        send(
            self.client.get(&url),
            &format!("GET /api/adjuntos/{}", filename),
        )
        .await
    }

    /// Look up a policy
    pub async fn get_policy(&self, policy_number: &str) -> Result<Value> {
        let url = format!("{}/api/poliza/{}", self.policies_url, policy_number);
        send(
            self.client.get(&url),
            &format!("GET /api/poliza/{}", policy_number),
        )
        .await
    }

    /// Ask for a resolution recommendation
    pub async fn check_policy(
        &self,
        policy_number: &str,
        solution_code: Option<&str>,
        str_json: Option<&str>,
    ) -> Result<Value> {
        let url = format!("{}/api/comprobacionPoliza", self.policies_url);
        let body = CheckPolicyRequest {
            poliza: policy_number.to_string(),
            cod_solucion: solution_code.unwrap_or_default().to_string(),
            str_json: str_json.unwrap_or_default().to_string(),
        };
        send(
            self.client.post(&url).json(&body),
            "POST /api/comprobacionPoliza",
        )
        .await
    }
}

async fn send(request: reqwest::RequestBuilder, what: &str) -> Result<Value> {
    let response = request
        .send()
        .await
        .with_context(|| format!("Failed to {}", what))?;
    tracing::debug!(status = %response.status(), "{}", what);
    handle_json_response(response).await
}

async fn handle_json_response(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("API error ({}): {}", status, body);
    }

    serde_json::from_str(&body).context("Response is not valid JSON")
}

// --- Request Types ---

/// Body of PATCH /api/incidencias/:id
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchIncidentRequest {
    pub action: String,
    #[serde(rename = "buzonDestino", skip_serializing_if = "Option::is_none")]
    pub target_mailbox: Option<String>,
    #[serde(rename = "notasResolucion", skip_serializing_if = "Option::is_none")]
    pub resolution_notes: Option<String>,
    #[serde(rename = "detalle", skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckPolicyRequest {
    poliza: String,
    #[serde(rename = "codSolucion")]
    cod_solucion: String,
    #[serde(rename = "strJson")]
    str_json: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_trailing_slashes() {
        let client = MockClient::new("http://localhost:3000/", "http://localhost:3001//").unwrap();
        assert_eq!(client.incidents_url(), "http://localhost:3000");
        assert_eq!(client.policies_url(), "http://localhost:3001");
    }

    #[test]
    fn patch_request_omits_unset_fields() {
        let req = PatchIncidentRequest {
            action: "en_espera".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"action":"en_espera"}"#);
    }

    #[test]
    fn patch_request_uses_wire_names() {
        let req = PatchIncidentRequest {
            action: "reasignar".to_string(),
            target_mailbox: Some("GR_SAL_COMP_CIERRE".to_string()),
            resolution_notes: None,
            detail: Some("Pasa a cierre".to_string()),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""buzonDestino":"GR_SAL_COMP_CIERRE""#));
        assert!(json.contains(r#""detalle":"Pasa a cierre""#));
        assert!(!json.contains("notasResolucion"));
    }

    #[test]
    fn check_request_serialization() {
        let req = CheckPolicyRequest {
            poliza: "POL001-FX-PROVISION".to_string(),
            cod_solucion: "fxprovicion".to_string(),
            str_json: String::new(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"poliza":"POL001-FX-PROVISION","codSolucion":"fxprovicion","strJson":""}"#
        );
    }
}

//! Authenticated HTTP access to the Agile CRM REST API.

use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::Credentials;
use crate::error::{CrmError, Result};
use crate::payload::ContactUpdate;

/// Body variants a single dispatch can carry.
#[derive(Debug, Clone, Copy)]
pub enum RequestBody<'a> {
    None,
    Json(&'a Value),
    /// Sent as `application/x-www-form-urlencoded`.
    Form(&'a [(&'a str, String)]),
}

pub struct CrmClient {
    http: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("agile-crm-adapter/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build http client")
}

impl CrmClient {
    pub fn new(credentials: Credentials) -> Self {
        let base_url = credentials.base_url();
        Self {
            http: build_http_client(),
            credentials,
            base_url,
        }
    }

    /// Points the client at a different base URL, keeping the same auth.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            http: build_http_client(),
            credentials,
            base_url: base_url.into(),
        }
    }

    /// Issues one authenticated call and parses the JSON response. GET and
    /// DELETE never carry a JSON body even if one is supplied; the CRM
    /// rejects bodies on those methods.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody<'_>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut builder = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.credentials.email, Some(&self.credentials.api_key))
            .header(ACCEPT, "application/json");

        match body {
            RequestBody::Form(fields) => builder = builder.form(fields),
            RequestBody::Json(value)
                if method != Method::GET && method != Method::DELETE =>
            {
                builder = builder.json(value)
            }
            _ => {}
        }

        debug!(%method, endpoint, "dispatching request");
        let response = builder
            .send()
            .await
            .map_err(|source| CrmError::transport(endpoint, source))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| CrmError::transport(endpoint, source))?;

        if !status.is_success() {
            return Err(CrmError::Api {
                status,
                endpoint: endpoint.to_string(),
                body: text,
            });
        }

        parse_response(endpoint, status, text)
    }

    /// Performs a logical contact/company update. The CRM exposes no
    /// combined endpoint, so each populated category goes out as its own
    /// PUT, in fixed order, and the last response wins. There is no
    /// rollback: a failure part-way leaves earlier categories applied
    /// server-side.
    pub async fn update_contact(&self, payload: &ContactUpdate) -> Result<Value> {
        if payload.is_empty() {
            debug!(id = %payload.id, "no update categories populated, nothing to send");
            return Ok(Value::Null);
        }

        let mut last = Value::Null;
        let mut applied: Vec<&'static str> = Vec::new();

        if let Some(properties) = &payload.properties {
            let body = json!({ "id": payload.id, "properties": properties });
            last = self
                .edit_step("api/contacts/edit-properties", &body, &applied)
                .await?;
            applied.push("properties");
        }
        if let Some(lead_score) = &payload.lead_score {
            let body = json!({ "id": payload.id, "lead_score": lead_score });
            last = self
                .edit_step("api/contacts/edit/lead-score", &body, &applied)
                .await?;
            applied.push("lead_score");
        }
        if let Some(tags) = &payload.tags {
            let body = json!({ "id": payload.id, "tags": tags });
            last = self
                .edit_step("api/contacts/edit/tags", &body, &applied)
                .await?;
            applied.push("tags");
        }
        if let Some(star_value) = &payload.star_value {
            let body = json!({ "id": payload.id, "star_value": star_value });
            last = self
                .edit_step("api/contacts/edit/add-star", &body, &applied)
                .await?;
        }

        Ok(last)
    }

    async fn edit_step(
        &self,
        endpoint: &str,
        body: &Value,
        applied: &[&'static str],
    ) -> Result<Value> {
        match self.request(Method::PUT, endpoint, RequestBody::Json(body)).await {
            Ok(response) => Ok(response),
            Err(err) => {
                if !applied.is_empty() {
                    warn!(
                        endpoint,
                        applied = ?applied,
                        "contact update failed part-way; earlier categories remain applied"
                    );
                }
                Err(err)
            }
        }
    }
}

/// Best-effort JSON parse; the CRM answers some calls (notably DELETE) with
/// an empty body.
fn parse_response(endpoint: &str, status: StatusCode, text: String) -> Result<Value> {
    if text.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|source| CrmError::Decode {
        status,
        endpoint: endpoint.to_string(),
        source,
    })
}

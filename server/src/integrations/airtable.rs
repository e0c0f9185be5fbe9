//! Airtable records API client.
//!
//! Creates one record per lead in the configured table. Pure body building in
//! `build_request` and parsing in `parse_response` for testability.

#[cfg(test)]
#[path = "airtable_test.rs"]
mod airtable_test;

use leadcall_client::net::types::LeadFields;

use super::types::IntegrationError;
use super::{LeadStore, build_http};
use crate::config::{AirtableConfig, HttpTimeouts};

// =============================================================================
// CLIENT
// =============================================================================

pub struct AirtableClient {
    http: reqwest::Client,
    api_key: String,
    records_url: String,
}

impl AirtableClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &AirtableConfig, timeouts: HttpTimeouts) -> Result<Self, IntegrationError> {
        Ok(Self {
            http: build_http(timeouts)?,
            api_key: config.api_key.clone(),
            records_url: records_url(config),
        })
    }
}

#[async_trait::async_trait]
impl LeadStore for AirtableClient {
    async fn create_lead(&self, lead: &LeadFields) -> Result<Vec<String>, IntegrationError> {
        let response = self
            .http
            .post(&self.records_url)
            .bearer_auth(&self.api_key)
            .json(&build_request(lead))
            .send()
            .await
            .map_err(|e| IntegrationError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| IntegrationError::ApiRequest(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(IntegrationError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

fn records_url(config: &AirtableConfig) -> String {
    format!("{}/v0/{}/{}", config.base_url, config.base_id, config.table)
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct CreateRequest<'a> {
    records: [NewRecord<'a>; 1],
}

#[derive(serde::Serialize)]
struct NewRecord<'a> {
    fields: &'a LeadFields,
}

#[derive(serde::Deserialize)]
struct CreateResponse {
    records: Vec<CreatedRecord>,
}

#[derive(serde::Deserialize)]
struct CreatedRecord {
    id: String,
}

fn build_request(lead: &LeadFields) -> CreateRequest<'_> {
    CreateRequest { records: [NewRecord { fields: lead }] }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<Vec<String>, IntegrationError> {
    let api: CreateResponse = serde_json::from_str(json).map_err(|e| IntegrationError::ApiParse(e.to_string()))?;
    Ok(api.records.into_iter().map(|record| record.id).collect())
}

//! Retell create-phone-call client.
//!
//! Forwards the browser's call request to `/v2/create-phone-call` with the
//! configured caller ID and agent always written over whatever the browser
//! sent. The response body is only logged; success is judged by the caller
//! from the returned status, if at all.

#[cfg(test)]
#[path = "retell_test.rs"]
mod retell_test;

use leadcall_client::net::types::CallRequest;

use super::types::IntegrationError;
use super::{CallPlacer, build_http};
use crate::config::{HttpTimeouts, RetellConfig};

const CREATE_PHONE_CALL_PATH: &str = "/v2/create-phone-call";

pub struct RetellClient {
    http: reqwest::Client,
    api_key: String,
    url: String,
    from_number: String,
    agent_id: String,
}

impl RetellClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &RetellConfig, timeouts: HttpTimeouts) -> Result<Self, IntegrationError> {
        Ok(Self {
            http: build_http(timeouts)?,
            api_key: config.api_key.clone(),
            url: format!("{}{CREATE_PHONE_CALL_PATH}", config.base_url),
            from_number: config.from_number.clone(),
            agent_id: config.agent_id.clone(),
        })
    }
}

#[async_trait::async_trait]
impl CallPlacer for RetellClient {
    async fn create_phone_call(&self, call: &CallRequest) -> Result<u16, IntegrationError> {
        let body = apply_overrides(call, &self.from_number, &self.agent_id);

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| IntegrationError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        tracing::debug!(status, body = %text, "create-phone-call response");

        Ok(status)
    }
}

/// Copy of `call` with the server's caller ID and agent applied.
fn apply_overrides(call: &CallRequest, from_number: &str, agent_id: &str) -> CallRequest {
    let mut body = call.clone();
    from_number.clone_into(&mut body.from_number);
    agent_id.clone_into(&mut body.override_agent_id);
    body
}

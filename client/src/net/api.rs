//! REST API helpers for the lead proxy endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-OK proxy statuses come back as `Err(String)`.
//! The call endpoint reports the upstream status in its body instead of its
//! own status, so a rejected call still counts as a completed request.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CallRequest, CallStarted, LeadCreated, LeadFields};

/// Proxy endpoint that stores a lead record.
pub const LEADS_ENDPOINT: &str = "/api/leads";

/// Proxy endpoint that starts an outbound call.
pub const CALLS_ENDPOINT: &str = "/api/calls";

#[cfg(any(test, feature = "hydrate"))]
fn lead_request_failed_message(status: u16) -> String {
    format!("lead request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn call_request_failed_message(status: u16) -> String {
    format!("call request failed: {status}")
}

/// Store a lead record via `POST /api/leads`.
///
/// # Errors
///
/// Returns an error string if the request fails or the proxy responds with a
/// non-OK status.
pub async fn create_lead(lead: &LeadFields) -> Result<LeadCreated, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LEADS_ENDPOINT)
            .json(lead)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(lead_request_failed_message(resp.status()));
        }
        resp.json::<LeadCreated>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lead;
        Err("not available on server".to_owned())
    }
}

/// Start an outbound call via `POST /api/calls`.
///
/// # Errors
///
/// Returns an error string if the request fails or the proxy itself responds
/// with a non-OK status.
pub async fn initiate_call(call: &CallRequest) -> Result<CallStarted, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CALLS_ENDPOINT)
            .json(call)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(call_request_failed_message(resp.status()));
        }
        resp.json::<CallStarted>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = call;
        Err("not available on server".to_owned())
    }
}

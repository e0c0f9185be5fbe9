//! Integrations: HTTP clients for the external lead store and call API.
//!
//! DESIGN
//! ======
//! Route handlers depend on the `LeadStore` and `CallPlacer` traits, held as
//! `Arc<dyn ...>` in `AppState`, so tests can swap in doubles. The concrete
//! clients are thin `reqwest` wrappers with pure body builders and response
//! parsers for testability.

pub mod airtable;
pub mod retell;
pub mod types;

use std::time::Duration;

use leadcall_client::net::types::{CallRequest, LeadFields};

use crate::config::HttpTimeouts;
use types::IntegrationError;

/// Persists lead records.
#[async_trait::async_trait]
pub trait LeadStore: Send + Sync {
    /// Create one record and return the ids assigned by the store.
    async fn create_lead(&self, lead: &LeadFields) -> Result<Vec<String>, IntegrationError>;
}

/// Starts outbound AI phone calls.
#[async_trait::async_trait]
pub trait CallPlacer: Send + Sync {
    /// Submit the call request and return the upstream HTTP status.
    ///
    /// Only transport failures are errors; a rejected call is reported
    /// through the returned status.
    async fn create_phone_call(&self, call: &CallRequest) -> Result<u16, IntegrationError>;
}

/// Shared `reqwest` client builder with the configured timeouts.
fn build_http(timeouts: HttpTimeouts) -> Result<reqwest::Client, IntegrationError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| IntegrationError::HttpClientBuild(e.to_string()))
}

//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Each
//! integration is optional; `None` means it was not configured (or its client
//! could not be built) and its endpoint answers `503`.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::integrations::airtable::AirtableClient;
use crate::integrations::retell::RetellClient;
use crate::integrations::{CallPlacer, LeadStore};

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Default)]
pub struct AppState {
    pub leads: Option<Arc<dyn LeadStore>>,
    pub calls: Option<Arc<dyn CallPlacer>>,
}

impl AppState {
    #[must_use]
    pub fn new(leads: Option<Arc<dyn LeadStore>>, calls: Option<Arc<dyn CallPlacer>>) -> Self {
        Self { leads, calls }
    }

    /// Build the concrete integration clients described by `config`.
    ///
    /// Unconfigured or unbuildable integrations are logged and left disabled.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let leads: Option<Arc<dyn LeadStore>> = match &config.airtable {
            Some(airtable) => match AirtableClient::new(airtable, config.timeouts) {
                Ok(client) => {
                    tracing::info!(base_id = %airtable.base_id, table = %airtable.table, "lead store initialized");
                    Some(Arc::new(client) as Arc<dyn LeadStore>)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "lead store client failed to build, lead storage disabled");
                    None
                }
            },
            None => {
                tracing::warn!("AIRTABLE_API_KEY not set, lead storage disabled");
                None
            }
        };

        let calls: Option<Arc<dyn CallPlacer>> = match &config.retell {
            Some(retell) => match RetellClient::new(retell, config.timeouts) {
                Ok(client) => {
                    tracing::info!(base_url = %retell.base_url, "call client initialized");
                    Some(Arc::new(client) as Arc<dyn CallPlacer>)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "call client failed to build, call initiation disabled");
                    None
                }
            },
            None => {
                tracing::warn!("RETELL_API_KEY not set, call initiation disabled");
                None
            }
        };

        Self::new(leads, calls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AirtableConfig, HttpTimeouts, RetellConfig};
    use leadcall_client::net::types::{DEFAULT_AGENT_ID, DEFAULT_FROM_NUMBER};

    fn config(airtable: Option<AirtableConfig>, retell: Option<RetellConfig>) -> ServerConfig {
        ServerConfig { port: 3000, airtable, retell, timeouts: HttpTimeouts { request_secs: 5, connect_secs: 1 } }
    }

    #[test]
    fn unconfigured_integrations_are_disabled() {
        let state = AppState::from_config(&config(None, None));
        assert!(state.leads.is_none());
        assert!(state.calls.is_none());
    }

    #[test]
    fn configured_integrations_are_enabled() {
        let state = AppState::from_config(&config(
            Some(AirtableConfig {
                api_key: "pat".into(),
                base_id: "app1".into(),
                table: "Lead".into(),
                base_url: "https://api.airtable.com".into(),
            }),
            Some(RetellConfig {
                api_key: "key".into(),
                base_url: "https://api.retellai.com".into(),
                from_number: DEFAULT_FROM_NUMBER.into(),
                agent_id: DEFAULT_AGENT_ID.into(),
            }),
        ));
        assert!(state.leads.is_some());
        assert!(state.calls.is_some());
    }
}

//! Server configuration parsed from environment variables.
//!
//! Both integrations are optional. Leaving an API key unset disables that
//! integration and its proxy endpoint answers `503`; setting the key without
//! the rest of its required settings is a startup error.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leadcall_client::net::types::{DEFAULT_AGENT_ID, DEFAULT_FROM_NUMBER};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AIRTABLE_BASE_URL: &str = "https://api.airtable.com";
pub const DEFAULT_AIRTABLE_TABLE: &str = "Lead";
pub const DEFAULT_RETELL_BASE_URL: &str = "https://api.retellai.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable required by an enabled integration is not set.
    #[error("missing config: env var {var} not set")]
    Missing { var: String },

    /// A variable is set but cannot be parsed.
    #[error("invalid config: {var}={value}")]
    Invalid { var: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Lead record store (Airtable) settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
    pub table: String,
    pub base_url: String,
}

/// Call-initiation API (Retell) settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetellConfig {
    pub api_key: String,
    pub base_url: String,
    /// Caller ID used for every call, whatever the browser sends.
    pub from_number: String,
    /// Voice agent used for every call, whatever the browser sends.
    pub agent_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub airtable: Option<AirtableConfig>,
    pub retell: Option<RetellConfig>,
    pub timeouts: HttpTimeouts,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AIRTABLE_API_KEY`: enables lead storage; then `AIRTABLE_BASE_ID` is required
    /// - `AIRTABLE_TABLE`: default `Lead`
    /// - `AIRTABLE_BASE_URL`: default `https://api.airtable.com`
    /// - `RETELL_API_KEY`: enables call initiation
    /// - `RETELL_BASE_URL`: default `https://api.retellai.com`
    /// - `RETELL_FROM_NUMBER`: default `+12192688290`
    /// - `RETELL_AGENT_ID`: default `agent_b4a388b92a796df4906e41cbd2`
    /// - `INTEGRATION_REQUEST_TIMEOUT_SECS`: default 30
    /// - `INTEGRATION_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port or an enabled
    /// integration is missing a required variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT".into(), value: raw })?,
            None => DEFAULT_PORT,
        };

        let airtable = match var("AIRTABLE_API_KEY") {
            Some(api_key) => Some(AirtableConfig {
                api_key,
                base_id: var("AIRTABLE_BASE_ID").ok_or_else(|| ConfigError::Missing { var: "AIRTABLE_BASE_ID".into() })?,
                table: var("AIRTABLE_TABLE").unwrap_or_else(|| DEFAULT_AIRTABLE_TABLE.to_string()),
                base_url: trim_base_url(var("AIRTABLE_BASE_URL"), DEFAULT_AIRTABLE_BASE_URL),
            }),
            None => None,
        };

        let retell = var("RETELL_API_KEY").map(|api_key| RetellConfig {
            api_key,
            base_url: trim_base_url(var("RETELL_BASE_URL"), DEFAULT_RETELL_BASE_URL),
            from_number: var("RETELL_FROM_NUMBER").unwrap_or_else(|| DEFAULT_FROM_NUMBER.to_string()),
            agent_id: var("RETELL_AGENT_ID").unwrap_or_else(|| DEFAULT_AGENT_ID.to_string()),
        });

        let timeouts = HttpTimeouts {
            request_secs: parse_u64_or(var("INTEGRATION_REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64_or(var("INTEGRATION_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, airtable, retell, timeouts })
    }
}

fn trim_base_url(raw: Option<String>, default: &str) -> String {
    raw.unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Parse a positive integer; zero or garbage falls back to `default`.
fn parse_u64_or(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

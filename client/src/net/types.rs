//! Wire types shared by the browser client and the proxy server.
//!
//! DESIGN
//! ======
//! `LeadFields` serializes with the lead table's column names so the server
//! can forward it to the record store unchanged. `CallRequest` matches the
//! call-initiation API body field for field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Caller ID every outbound call is placed from.
pub const DEFAULT_FROM_NUMBER: &str = "+12192688290";

/// Voice agent that handles the outbound call.
pub const DEFAULT_AGENT_ID: &str = "agent_b4a388b92a796df4906e41cbd2";

/// One lead record, keyed by the table's column names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFields {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Business Name")]
    pub business_name: String,
}

/// Context variables the voice agent can reference during the call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallVariables {
    pub customer_name: String,
    pub phone: String,
    pub email: String,
    pub business_name: String,
}

/// Request body for starting an outbound AI phone call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRequest {
    pub from_number: String,
    pub to_number: String,
    pub override_agent_id: String,
    #[serde(rename = "retell_llm_dynamic_variables")]
    pub dynamic_variables: CallVariables,
}

impl CallRequest {
    /// Build the call for `lead`, dialing `<dial_code><phone>` from the
    /// default caller ID with the default agent.
    #[must_use]
    pub fn for_lead(lead: &LeadFields, dial_code: &str) -> Self {
        Self {
            from_number: DEFAULT_FROM_NUMBER.to_owned(),
            to_number: format!("{dial_code}{}", lead.phone),
            override_agent_id: DEFAULT_AGENT_ID.to_owned(),
            dynamic_variables: CallVariables {
                customer_name: lead.name.clone(),
                phone: lead.phone.clone(),
                email: lead.email.clone(),
                business_name: lead.business_name.clone(),
            },
        }
    }
}

/// Response of `POST /api/leads`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCreated {
    /// Record ids assigned by the lead store.
    #[serde(default)]
    pub ids: Vec<String>,
}

/// Response of `POST /api/calls`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallStarted {
    /// HTTP status returned by the call-initiation API.
    pub upstream_status: u16,
}

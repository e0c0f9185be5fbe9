//! Lead proxy routes.
//!
//! The browser posts here instead of calling the external services directly,
//! so API keys stay on the server. No validation happens at this layer; the
//! form already enforced its rules.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use leadcall_client::net::types::{CallRequest, CallStarted, LeadCreated, LeadFields};

use crate::integrations::types::IntegrationError;
use crate::state::AppState;

/// `POST /api/leads`: store one lead record.
pub async fn create_lead(
    State(state): State<AppState>,
    Json(lead): Json<LeadFields>,
) -> Result<Json<LeadCreated>, StatusCode> {
    let Some(store) = state.leads.as_ref() else {
        tracing::warn!("lead submitted but lead storage is disabled");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let ids = store.create_lead(&lead).await.map_err(|e| {
        tracing::error!(error = %e, "lead record creation failed");
        integration_error_to_status(&e)
    })?;
    for id in &ids {
        tracing::info!(record_id = %id, "lead record created");
    }

    Ok(Json(LeadCreated { ids }))
}

/// `POST /api/calls`: start an outbound AI phone call.
///
/// Answers `200` whenever the upstream request completed, reporting the
/// upstream status in the body.
pub async fn create_call(
    State(state): State<AppState>,
    Json(call): Json<CallRequest>,
) -> Result<Json<CallStarted>, StatusCode> {
    let Some(placer) = state.calls.as_ref() else {
        tracing::warn!("call requested but call initiation is disabled");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let upstream_status = placer.create_phone_call(&call).await.map_err(|e| {
        tracing::error!(error = %e, "call initiation failed");
        integration_error_to_status(&e)
    })?;

    if (200..300).contains(&upstream_status) {
        tracing::info!(upstream_status, "call initiated");
    } else {
        tracing::warn!(upstream_status, "call initiation rejected upstream");
    }
    tracing::debug!(to = %call.to_number, "call target");

    Ok(Json(CallStarted { upstream_status }))
}

pub(crate) fn integration_error_to_status(err: &IntegrationError) -> StatusCode {
    match err {
        IntegrationError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        IntegrationError::ApiRequest(_) | IntegrationError::ApiResponse { .. } | IntegrationError::ApiParse(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

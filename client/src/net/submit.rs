//! Lead submission pipeline.
//!
//! DESIGN
//! ======
//! Submitting runs in two phases:
//!
//! 1. `prepare` (synchronous): require every field, refuse phones that used
//!    all their attempts, then spend one attempt. The attempt is spent before
//!    any network call, so a failed submission still counts.
//! 2. `dispatch` (async): create the lead record, then start the call. The
//!    second request is only sent after the first succeeds, and each step
//!    fails with its own `SubmitError` variant.
//!
//! `begin` and `settle` wrap the two phases with the form's status flags.
//! The `LeadForm` component calls them around its spawned task, and `submit`
//! chains them for callers that can simply await.
//!
//! Network access goes through `LeadGateway` so tests can substitute a
//! recording double for the HTTP proxy.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::fmt;

use super::types::{CallRequest, CallStarted, LeadCreated, LeadFields};
use crate::state::lead_form::{FormValues, LeadField, LeadFormState, VALIDATION_PROMPT};
use crate::util::phone_counts;
use crate::util::storage::KeyValueStore;

/// Why a submission did not reach the thank-you state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// An earlier submission has not settled yet.
    AlreadySubmitting,
    /// One or more inputs were empty.
    MissingFields(Vec<LeadField>),
    /// The phone number already used all of its attempts.
    RateLimited { phone: String, count: u32 },
    /// The lead record could not be created.
    LeadRecord(String),
    /// The call-initiation request could not be completed.
    CallInitiation(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySubmitting => write!(f, "a submission is already in progress"),
            Self::MissingFields(fields) => {
                let names: Vec<_> = fields.iter().map(|field| field.input_name()).collect();
                write!(f, "missing fields: {}", names.join(", "))
            }
            Self::RateLimited { phone, count } => write!(f, "phone {phone} already submitted {count} times"),
            Self::LeadRecord(e) => write!(f, "lead record failed: {e}"),
            Self::CallInitiation(e) => write!(f, "call initiation failed: {e}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl SubmitError {
    /// Text for a blocking dialog, if this error needs one.
    #[must_use]
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            Self::MissingFields(_) => Some(VALIDATION_PROMPT),
            _ => None,
        }
    }
}

/// Outcome of a completed submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub lead_ids: Vec<String>,
    pub call_status: u16,
}

/// Payloads for both steps, built once the form passes its checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadSubmission {
    pub lead: LeadFields,
    pub call: CallRequest,
}

/// Remote side of a submission.
#[allow(async_fn_in_trait)]
pub trait LeadGateway {
    async fn create_lead(&self, lead: &LeadFields) -> Result<LeadCreated, String>;
    async fn initiate_call(&self, call: &CallRequest) -> Result<CallStarted, String>;
}

/// Gateway backed by the server's proxy endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpGateway;

impl LeadGateway for HttpGateway {
    async fn create_lead(&self, lead: &LeadFields) -> Result<LeadCreated, String> {
        super::api::create_lead(lead).await
    }

    async fn initiate_call(&self, call: &CallRequest) -> Result<CallStarted, String> {
        super::api::initiate_call(call).await
    }
}

/// Check the form and spend one attempt for its phone number.
///
/// # Errors
///
/// `MissingFields` if any input is empty, `RateLimited` if the phone already
/// reached the attempt cap. Neither touches the counter.
pub fn prepare(
    values: &FormValues,
    dial_code: &str,
    store: &impl KeyValueStore,
) -> Result<LeadSubmission, SubmitError> {
    let missing = values.missing_fields();
    if !missing.is_empty() {
        return Err(SubmitError::MissingFields(missing));
    }

    if phone_counts::is_exhausted(store, &values.phone) {
        let count = phone_counts::count(store, &values.phone);
        return Err(SubmitError::RateLimited { phone: values.phone.clone(), count });
    }
    phone_counts::record(store, &values.phone);

    let lead = values.to_lead_fields();
    let call = CallRequest::for_lead(&lead, dial_code);
    Ok(LeadSubmission { lead, call })
}

/// Create the lead record, then start the call.
///
/// The call endpoint's upstream status is logged but not judged; only a
/// failed request counts as a failure.
///
/// # Errors
///
/// `LeadRecord` if the first step fails (the call is then never requested),
/// `CallInitiation` if the second step fails.
pub async fn dispatch(
    submission: &LeadSubmission,
    gateway: &impl LeadGateway,
) -> Result<SubmitReceipt, SubmitError> {
    let created = gateway
        .create_lead(&submission.lead)
        .await
        .map_err(SubmitError::LeadRecord)?;
    for id in &created.ids {
        leptos::logging::log!("lead record created: {id}");
    }

    let started = gateway
        .initiate_call(&submission.call)
        .await
        .map_err(SubmitError::CallInitiation)?;
    if !(200..300).contains(&started.upstream_status) {
        leptos::logging::warn!("call initiation returned status {}", started.upstream_status);
    }

    Ok(SubmitReceipt { lead_ids: created.ids, call_status: started.upstream_status })
}

/// Start a submission from the form's current values.
///
/// On success the form is marked submitting and the returned payloads are
/// ready for `dispatch`. A rejected submission has already been settled on
/// `form`; show `SubmitError::prompt` if it has one.
///
/// # Errors
///
/// `AlreadySubmitting` while a previous submission is in flight (the form is
/// left untouched), otherwise any error from `prepare`.
pub fn begin(form: &mut LeadFormState, store: &impl KeyValueStore) -> Result<LeadSubmission, SubmitError> {
    if form.is_submitting {
        return Err(SubmitError::AlreadySubmitting);
    }

    match prepare(&form.values, form.dial_code, store) {
        Ok(submission) => {
            form.start_submit();
            Ok(submission)
        }
        Err(e) => {
            form.finish_submit(&Err(e.clone()));
            Err(e)
        }
    }
}

/// Settle `form` once `dispatch` has finished, logging any failure.
pub fn settle(form: &mut LeadFormState, result: &Result<SubmitReceipt, SubmitError>) {
    if let Err(e) = result {
        leptos::logging::error!("Submission failed: {e}");
    }
    form.finish_submit(result);
}

/// Run a whole submission against `form`: `begin`, `dispatch`, `settle`.
///
/// # Errors
///
/// Returns the `SubmitError` that stopped the submission.
pub async fn submit(
    form: &mut LeadFormState,
    store: &impl KeyValueStore,
    gateway: &impl LeadGateway,
) -> Result<SubmitReceipt, SubmitError> {
    let submission = begin(form, store)?;
    let result = dispatch(&submission, gateway).await;
    settle(form, &result);
    result
}

//! Lead form field values and submission status.
//!
//! DESIGN
//! ======
//! Field values and status flags live in one `LeadFormState` held in an
//! `RwSignal` by the `LeadForm` component. Status follows
//! `Idle -> Submitting -> {Submitted | Idle-with-error}`; `finish_submit` is
//! the only place that leaves `Submitting`.

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use super::dial_codes::DEFAULT_DIAL_CODE;
use crate::net::submit::{SubmitError, SubmitReceipt};
use crate::net::types::LeadFields;

/// Blocking prompt shown when any field is left empty.
pub const VALIDATION_PROMPT: &str = "Please fill out all fields.";

/// Inline error shown once a phone number has used all of its attempts.
pub const RATE_LIMIT_MESSAGE: &str = "Cannot use the same phone number more than 5 times.";

/// One of the four inputs on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Phone,
    /// Business name. Kept under its historical `industry` input name.
    Industry,
}

impl LeadField {
    pub const ALL: [LeadField; 4] = [Self::Name, Self::Email, Self::Phone, Self::Industry];

    /// HTML `name`/`id` attribute of the input.
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Industry => "industry",
        }
    }

    /// Visible label text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Industry => "Business Name",
        }
    }

    /// HTML input `type`.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Name | Self::Industry => "text",
            Self::Email => "email",
            Self::Phone => "tel",
        }
    }
}

/// Raw values typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub industry: String,
}

impl FormValues {
    #[must_use]
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Industry => &self.industry,
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
            LeadField::Industry => &mut self.industry,
        };
        *slot = value;
    }

    /// Fields that are still empty, in form order.
    ///
    /// Whitespace counts as a value; only a truly empty input is missing.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<LeadField> {
        LeadField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Lead record payload for these values.
    #[must_use]
    pub fn to_lead_fields(&self) -> LeadFields {
        LeadFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            business_name: self.industry.clone(),
        }
    }
}

/// Everything the form renders from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadFormState {
    pub values: FormValues,
    pub dial_code: &'static str,
    pub is_submitting: bool,
    pub is_submitted: bool,
    pub error: Option<String>,
}

impl Default for LeadFormState {
    fn default() -> Self {
        Self {
            values: FormValues::default(),
            dial_code: DEFAULT_DIAL_CODE,
            is_submitting: false,
            is_submitted: false,
            error: None,
        }
    }
}

impl LeadFormState {
    /// Apply one keystroke: store the value and clear any error.
    pub fn update_field(&mut self, field: LeadField, value: String) {
        self.values.set(field, value);
        self.error = None;
    }

    pub fn set_dial_code(&mut self, code: &'static str) {
        self.dial_code = code;
    }

    pub fn start_submit(&mut self) {
        self.is_submitting = true;
    }

    /// Settle the form after a submit attempt.
    ///
    /// Upstream failures leave no visible error; the form simply becomes
    /// editable again. `AlreadySubmitting` belongs to the submission still in
    /// flight and changes nothing.
    pub fn finish_submit(&mut self, result: &Result<SubmitReceipt, SubmitError>) {
        match result {
            Ok(_) => self.is_submitted = true,
            Err(SubmitError::AlreadySubmitting) => return,
            Err(SubmitError::RateLimited { .. }) => self.error = Some(RATE_LIMIT_MESSAGE.to_owned()),
            Err(SubmitError::MissingFields(_) | SubmitError::LeadRecord(_) | SubmitError::CallInitiation(_)) => {}
        }
        self.is_submitting = false;
    }

    /// Label of the submit button.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting { "Submitting..." } else { "Submit" }
    }
}

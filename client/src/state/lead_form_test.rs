use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_with_us_dial_code() {
    let state = LeadFormState::default();
    assert_eq!(state.values, FormValues::default());
    assert_eq!(state.dial_code, "+1");
    assert!(!state.is_submitting);
    assert!(!state.is_submitted);
    assert!(state.error.is_none());
    assert_eq!(state.submit_label(), "Submit");
}

// =============================================================
// Field updates
// =============================================================

#[test]
fn update_field_sets_matching_value_only() {
    let mut state = LeadFormState::default();
    state.update_field(LeadField::Industry, "Bakery".into());
    assert_eq!(state.values.industry, "Bakery");
    assert!(state.values.name.is_empty());
    assert_eq!(state.values.get(LeadField::Industry), "Bakery");
}

#[test]
fn update_field_clears_error() {
    let mut state = LeadFormState { error: Some(RATE_LIMIT_MESSAGE.into()), ..LeadFormState::default() };
    state.update_field(LeadField::Phone, "5".into());
    assert!(state.error.is_none());
}

#[test]
fn missing_fields_ignores_whitespace_values() {
    let values = FormValues {
        name: " ".into(),
        email: "a@x.com".into(),
        phone: String::new(),
        industry: "Bakery".into(),
    };
    assert_eq!(values.missing_fields(), vec![LeadField::Phone]);
}

#[test]
fn to_lead_fields_maps_industry_to_business_name() {
    let values = FormValues {
        name: "Ana".into(),
        email: "a@x.com".into(),
        phone: "5551234".into(),
        industry: "Bakery".into(),
    };
    let lead = values.to_lead_fields();
    assert_eq!(lead.name, "Ana");
    assert_eq!(lead.business_name, "Bakery");
}

// =============================================================
// Status transitions
// =============================================================

#[test]
fn start_submit_switches_label() {
    let mut state = LeadFormState::default();
    state.start_submit();
    assert!(state.is_submitting);
    assert_eq!(state.submit_label(), "Submitting...");
}

#[test]
fn finish_ok_marks_submitted() {
    let mut state = LeadFormState::default();
    state.start_submit();
    state.finish_submit(&Ok(SubmitReceipt { lead_ids: vec![], call_status: 200 }));
    assert!(state.is_submitted);
    assert!(!state.is_submitting);
}

#[test]
fn finish_rate_limited_sets_visible_error() {
    let mut state = LeadFormState::default();
    state.finish_submit(&Err(SubmitError::RateLimited { phone: "1".into(), count: 5 }));
    assert_eq!(state.error.as_deref(), Some(RATE_LIMIT_MESSAGE));
    assert!(!state.is_submitted);
}

#[test]
fn finish_network_failure_returns_to_idle_silently() {
    for err in [SubmitError::LeadRecord("x".into()), SubmitError::CallInitiation("y".into())] {
        let mut state = LeadFormState::default();
        state.start_submit();
        state.finish_submit(&Err(err));
        assert!(!state.is_submitting);
        assert!(!state.is_submitted);
        assert!(state.error.is_none());
    }
}

#[test]
fn finish_already_submitting_keeps_in_flight_state() {
    let mut state = LeadFormState::default();
    state.start_submit();
    state.finish_submit(&Err(SubmitError::AlreadySubmitting));
    assert!(state.is_submitting);
    assert!(state.error.is_none());
}

// =============================================================
// LeadField metadata
// =============================================================

#[test]
fn field_metadata_matches_inputs() {
    assert_eq!(LeadField::Industry.input_name(), "industry");
    assert_eq!(LeadField::Industry.label(), "Business Name");
    assert_eq!(LeadField::Email.input_type(), "email");
    assert_eq!(LeadField::Phone.input_type(), "tel");
    assert_eq!(LeadField::Name.input_type(), "text");
}

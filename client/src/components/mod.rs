//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the form surfaces and read/write the shared form state
//! from the Leptos context provided by the page.

pub mod country_code_selector;
pub mod lead_form;
pub mod submitted_notice;

//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain data model with pure transitions. Components wrap
//! them in signals; tests exercise them directly.

pub mod dial_codes;
pub mod lead_form;
pub mod selector;

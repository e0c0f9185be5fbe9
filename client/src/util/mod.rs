//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, dialogs) from component
//! logic to improve reuse and testability.

pub mod dialog;
pub mod phone_counts;
pub mod storage;

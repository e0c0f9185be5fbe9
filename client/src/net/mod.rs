//! Networking modules for the lead proxy API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser HTTP calls, `submit` sequences them into the
//! submission pipeline, and `types` defines the wire schema shared with the
//! server.

pub mod api;
pub mod submit;
pub mod types;

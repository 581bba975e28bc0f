//! Networking modules for the external auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `error` is their shared failure type, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod types;

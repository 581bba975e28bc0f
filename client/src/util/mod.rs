//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and access policy from
//! page and component logic to improve reuse and testability.

pub mod auth;
pub mod session;
pub mod viewport;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages (`login`, `forgot_password`) run outside the session gate.
//! `business` renders inside the navigation shell once the gate admits the
//! visitor.

pub mod business;
pub mod forgot_password;
pub mod login;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the console chrome and read the session only through
//! what the session gate hands them.

pub mod nav_icon;
pub mod navigation_shell;
pub mod session_gate;
pub mod sidebar;
pub mod top_bar;

//! Compile-time client configuration and route constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the auth API base
//! URL is baked in at build time from `MERCHANT_API_BASE_URL`. Everything else
//! here is a fixed route or layout constant shared by pages and components.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `MERCHANT_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Sign-in route; unauthorized visitors are redirected here.
pub const LOGIN_ROUTE: &str = "/login";

/// Password reset request route.
pub const FORGOT_PASSWORD_ROUTE: &str = "/forgot-password";

/// Root of the gated merchant console.
pub const BUSINESS_ROOT: &str = "/business";

/// Where a merchant lands after sign-in when no origin location was carried.
pub const DEFAULT_LANDING_ROUTE: &str = "/business/dashboard";

/// Query parameter carrying the originally requested location to `/login`.
pub const RETURN_TO_PARAM: &str = "from";

/// Viewports narrower than this (CSS px) switch the sidebar to an overlay.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Auth API base URL with any trailing slash removed.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("MERCHANT_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

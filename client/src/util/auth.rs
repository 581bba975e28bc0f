//! Session gate policy and login redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route under `/business` goes through the same gate decision, and the
//! login page uses the same rules to pick where to send the user back to.
//! Both are pure so the policy can be tested without a router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;
use percent_encoding::utf8_percent_encode;

use crate::config::{BUSINESS_ROOT, DEFAULT_LANDING_ROUTE, LOGIN_ROUTE, RETURN_TO_PARAM};
use crate::net::api::QUERY_VALUE;
use crate::state::auth::{AuthSnapshot, SessionPhase};

/// Outcome of evaluating the gate for the current snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateStatus {
    /// Session lookup still running; nothing privileged is rendered.
    Checking,
    Authorized,
    /// Redirect to login, carrying the requested location.
    Unauthorized,
    /// Signed out in this tab; the sign-out flow already navigated away.
    SignedOut,
}

/// Decide what the gate renders. Re-evaluated on every snapshot change.
///
/// Only a signed-in merchant is let through; every other combination,
/// including a snapshot that has not been populated yet, stays out.
pub fn gate_status(snapshot: &AuthSnapshot, phase: SessionPhase) -> GateStatus {
    if snapshot.is_authorized_merchant() {
        return GateStatus::Authorized;
    }
    match phase {
        SessionPhase::Loading => GateStatus::Checking,
        SessionPhase::Settled => GateStatus::Unauthorized,
        SessionPhase::SignedOut => GateStatus::SignedOut,
    }
}

/// Replace-navigation to the login route that remembers where the user was going.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRedirect {
    pub from: String,
}

impl LoginRedirect {
    /// Build from the router's current `pathname` and `search` (with or without `?`).
    pub fn for_location(pathname: &str, search: &str) -> Self {
        let search = search.trim_start_matches('?');
        let from = if search.is_empty() {
            pathname.to_owned()
        } else {
            format!("{pathname}?{search}")
        };
        Self { from }
    }

    /// Login URL with the origin location in the query string.
    pub fn href(&self) -> String {
        format!("{LOGIN_ROUTE}?{RETURN_TO_PARAM}={}", utf8_percent_encode(&self.from, QUERY_VALUE))
    }

    /// Replace the current history entry and hand the origin over as router state.
    pub fn navigate_options(&self) -> NavigateOptions {
        #[cfg_attr(not(feature = "hydrate"), allow(unused_mut))]
        let mut options = NavigateOptions { replace: true, ..NavigateOptions::default() };
        #[cfg(feature = "hydrate")]
        {
            options.state = leptos_router::location::State::new(Some(wasm_bindgen::JsValue::from_str(&self.from)));
        }
        options
    }
}

/// Where to go after a successful sign-in.
///
/// Only locations inside the console are honored, which rules out loops back
/// to `/login` and redirects to other origins.
pub fn return_target(from: Option<&str>) -> String {
    from.map(str::trim)
        .filter(|path| is_console_location(path))
        .map_or_else(|| DEFAULT_LANDING_ROUTE.to_owned(), str::to_owned)
}

fn is_console_location(path: &str) -> bool {
    let Some(rest) = path.strip_prefix(BUSINESS_ROOT) else {
        return false;
    };
    rest.is_empty() || rest.starts_with('/') || rest.starts_with('?')
}

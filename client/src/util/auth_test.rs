use super::*;
use crate::state::auth::{AuthState, SnapshotUser};

fn snapshot(is_authenticated: bool, is_merchant: bool) -> AuthSnapshot {
    AuthSnapshot {
        is_authenticated,
        is_merchant,
        is_merchant_verified: false,
        user: SnapshotUser::default(),
    }
}

// =============================================================
// gate_status
// =============================================================

#[test]
fn gate_renders_for_authenticated_merchant() {
    assert_eq!(gate_status(&snapshot(true, true), SessionPhase::Settled), GateStatus::Authorized);
}

#[test]
fn gate_redirects_when_not_authenticated() {
    assert_eq!(gate_status(&snapshot(false, true), SessionPhase::Settled), GateStatus::Unauthorized);
    assert_eq!(gate_status(&snapshot(false, false), SessionPhase::Settled), GateStatus::Unauthorized);
}

#[test]
fn gate_redirects_when_not_merchant() {
    assert_eq!(gate_status(&snapshot(true, false), SessionPhase::Settled), GateStatus::Unauthorized);
}

#[test]
fn gate_never_authorizes_an_empty_snapshot() {
    for phase in [SessionPhase::Loading, SessionPhase::Settled, SessionPhase::SignedOut] {
        assert_ne!(gate_status(&AuthSnapshot::default(), phase), GateStatus::Authorized);
    }
}

#[test]
fn gate_waits_while_session_lookup_runs() {
    assert_eq!(gate_status(&AuthSnapshot::default(), SessionPhase::Loading), GateStatus::Checking);
}

#[test]
fn gate_stays_quiet_only_until_sign_out_navigation_lands() {
    let mut state = AuthState::bootstrapping();
    state.finish_bootstrap(None);
    state.sign_out();
    assert_eq!(gate_status(&AuthSnapshot::from_state(&state), state.phase()), GateStatus::SignedOut);

    // Login page mounted; going back to the console must redirect again.
    state.finish_sign_out();
    assert_eq!(gate_status(&AuthSnapshot::from_state(&state), state.phase()), GateStatus::Unauthorized);
}

// =============================================================
// LoginRedirect
// =============================================================

#[test]
fn login_redirect_keeps_path_and_query() {
    assert_eq!(LoginRedirect::for_location("/business/orders", "").from, "/business/orders");
    assert_eq!(
        LoginRedirect::for_location("/business/orders", "?status=open").from,
        "/business/orders?status=open"
    );
    assert_eq!(
        LoginRedirect::for_location("/business/orders", "status=open").from,
        "/business/orders?status=open"
    );
}

#[test]
fn login_redirect_href_encodes_origin() {
    let redirect = LoginRedirect::for_location("/business/catalog/categories", "page=2");
    assert_eq!(redirect.href(), "/login?from=%2Fbusiness%2Fcatalog%2Fcategories%3Fpage%3D2");
}

#[test]
fn login_redirect_replaces_history_entry() {
    let options = LoginRedirect::for_location("/business/reports", "").navigate_options();
    assert!(options.replace);
}

// =============================================================
// return_target
// =============================================================

#[test]
fn return_target_defaults_to_dashboard() {
    assert_eq!(return_target(None), DEFAULT_LANDING_ROUTE);
    assert_eq!(return_target(Some("")), DEFAULT_LANDING_ROUTE);
}

#[test]
fn return_target_accepts_console_locations() {
    assert_eq!(return_target(Some("/business/catalog/products")), "/business/catalog/products");
    assert_eq!(return_target(Some("/business/orders?status=open")), "/business/orders?status=open");
    assert_eq!(return_target(Some("/business")), "/business");
}

#[test]
fn return_target_rejects_foreign_and_looping_locations() {
    for from in ["/login", "/forgot-password", "https://evil.test/business", "//evil.test", "/businessplan"] {
        assert_eq!(return_target(Some(from)), DEFAULT_LANDING_ROUTE, "{from} must not be honored");
    }
}

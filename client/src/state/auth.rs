//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides an `RwSignal<AuthState>` and fills it from `/auth/me` after
//! hydration. The console never reads `AuthState` directly: the session gate
//! derives a read-only `AuthSnapshot` from it, and everything below the gate
//! sees only that snapshot plus the `SessionActions` capability.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Authentication state tracking the current session and bootstrap status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// The initial `/auth/me` lookup has not finished yet.
    pub loading: bool,
    /// Set between a sign-out in this tab and the login page mounting; the
    /// sign-out flow owns that one redirect.
    pub signed_out: bool,
}

impl AuthState {
    /// State before the session lookup has run.
    pub fn bootstrapping() -> Self {
        Self { session: None, loading: true, signed_out: false }
    }

    /// Record the result of the initial session lookup.
    pub fn finish_bootstrap(&mut self, session: Option<Session>) {
        self.session = session;
        self.loading = false;
    }

    /// Record a successful sign-in.
    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.loading = false;
        self.signed_out = false;
    }

    /// Drop the local session after the user asked to sign out.
    pub fn sign_out(&mut self) {
        self.session = None;
        self.loading = false;
        self.signed_out = true;
    }

    /// The sign-out navigation has landed; later visits to the console are
    /// gated normally again.
    pub fn finish_sign_out(&mut self) {
        self.signed_out = false;
    }

    pub fn phase(&self) -> SessionPhase {
        if self.signed_out {
            SessionPhase::SignedOut
        } else if self.loading {
            SessionPhase::Loading
        } else {
            SessionPhase::Settled
        }
    }
}

/// Where the session lookup currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Settled,
    SignedOut,
}

/// Identity fields shown in the shell's profile menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl SnapshotUser {
    /// Best available label: name, then email, then a generic fallback.
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("Merchant")
            .to_owned()
    }

    /// Single uppercase letter for the avatar badge.
    pub fn initial(&self) -> char {
        self.display_name()
            .chars()
            .next()
            .map_or('M', |c| c.to_ascii_uppercase())
    }
}

/// Read-only view of the session consumed by the gate and the shell.
///
/// Every flag defaults to `false`: absent or partial session data never
/// grants access.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    pub is_merchant: bool,
    pub is_merchant_verified: bool,
    pub user: SnapshotUser,
}

impl AuthSnapshot {
    pub fn from_session(session: &Session) -> Self {
        let is_merchant = session.user.is_merchant();
        Self {
            is_authenticated: true,
            is_merchant,
            is_merchant_verified: is_merchant && session.merchant.as_ref().is_some_and(|m| m.verified),
            user: SnapshotUser {
                name: session.user.name.clone(),
                email: session.user.email.clone(),
            },
        }
    }

    pub fn from_state(state: &AuthState) -> Self {
        state.session.as_ref().map(Self::from_session).unwrap_or_default()
    }

    /// Both checks the console requires: signed in, and a merchant account.
    pub fn is_authorized_merchant(&self) -> bool {
        self.is_authenticated && self.is_merchant
    }
}

//! Session capability handed to the shell, plus session bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell may end the session but never reads or writes session storage
//! itself. It gets a `SessionActions` implementation from the gate and calls
//! `sign_out`, which fixes the order: logout first, one navigation after.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::config::LOGIN_ROUTE;
use crate::state::auth::AuthState;

/// What the console is allowed to do with the session.
pub trait SessionActions {
    /// End the session. Fire-and-forget from the caller's point of view.
    fn logout(&self);
}

/// `SessionActions` backed by the app-wide auth signal and the auth API.
#[derive(Clone, Copy)]
pub struct RemoteSession {
    auth: RwSignal<AuthState>,
}

impl RemoteSession {
    pub fn new(auth: RwSignal<AuthState>) -> Self {
        Self { auth }
    }
}

impl SessionActions for RemoteSession {
    fn logout(&self) {
        self.auth.update(AuthState::sign_out);
        #[cfg(feature = "hydrate")]
        {
            log::info!("signing out");
            leptos::task::spawn_local(crate::net::api::logout());
        }
    }
}

/// Sign the user out: log out exactly once, then navigate to login exactly once.
pub fn sign_out<S, N>(session: &S, navigate: N)
where
    S: SessionActions + ?Sized,
    N: FnOnce(&str),
{
    session.logout();
    navigate(LOGIN_ROUTE);
}

/// Populate `auth` from `/auth/me`. Browser only; on the server the state
/// stays in its loading phase so the gate renders nothing privileged.
pub fn bootstrap_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let session = crate::net::api::fetch_current_session().await;
        match &session {
            Some(s) => log::debug!("session restored for user {}", s.user.id),
            None => log::debug!("no active session"),
        }
        auth.update(|a| a.finish_bootstrap(session));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

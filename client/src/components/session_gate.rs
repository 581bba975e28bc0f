//! Route guard wrapping the business console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the view of the `/business` parent route. Holds no state of its
//! own: every change to the auth signal re-runs `gate_status`, and only a
//! change in the outcome re-renders, so navigating inside the console keeps the
//! shell (and its expansion state) mounted.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::navigation_shell::NavigationShell;
use crate::state::auth::{AuthSnapshot, AuthState};
use crate::util::auth::{GateStatus, LoginRedirect, gate_status};
use crate::util::session::RemoteSession;

#[component]
pub fn SessionGate() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    let snapshot = Signal::derive(move || auth.with(AuthSnapshot::from_state));
    let status = Memo::new(move |_| auth.with(|state| gate_status(&AuthSnapshot::from_state(state), state.phase())));
    let session = RemoteSession::new(auth);

    move || match status.get() {
        GateStatus::Authorized => view! { <NavigationShell snapshot=snapshot session=session/> }.into_any(),
        GateStatus::Unauthorized => {
            let redirect =
                LoginRedirect::for_location(&location.pathname.get_untracked(), &location.search.get_untracked());
            #[cfg(feature = "hydrate")]
            log::debug!("unauthorized access to {}, redirecting to login", redirect.from);
            view! { <Redirect path=redirect.href() options=redirect.navigate_options()/> }.into_any()
        }
        GateStatus::Checking => view! {
            <div class="session-gate">
                <p class="session-gate__message">"Checking session..."</p>
            </div>
        }
        .into_any(),
        GateStatus::SignedOut => ().into_any(),
    }
}

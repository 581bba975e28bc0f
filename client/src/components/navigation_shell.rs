//! Admin shell: sidebar, top bar, and the nested content region.
//!
//! ARCHITECTURE
//! ============
//! The shell owns its chrome state (`ExpansionState`, `UiState`) for as long
//! as it is mounted. It sees the session only through the read-only
//! `AuthSnapshot` and the `RemoteSession` capability handed in by the gate.
//! Route pages render into `<Outlet/>`.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::sidebar::Sidebar;
use crate::components::top_bar::TopBar;
use crate::state::auth::AuthSnapshot;
use crate::state::navigation::{BUSINESS_NAVIGATION, ExpansionState, page_title};
use crate::state::ui::UiState;
use crate::util::session::RemoteSession;
use crate::util::viewport::install_viewport_listener;

/// Title shown when the route is not in the navigation table.
const FALLBACK_TITLE: &str = "Business";

#[component]
pub fn NavigationShell(snapshot: Signal<AuthSnapshot>, session: RemoteSession) -> impl IntoView {
    let route = use_location().pathname;

    let mut initial = ExpansionState::initial();
    initial.auto_expand(BUSINESS_NAVIGATION, &route.get_untracked());
    let expansion = RwSignal::new(initial);
    let ui = RwSignal::new(UiState::default());

    install_viewport_listener(ui);

    // Route change: open the matching section, then dismiss overlay chrome.
    Effect::new(move |prev: Option<String>| {
        let path = route.get();
        expansion.update(|e| e.auto_expand(BUSINESS_NAVIGATION, &path));
        if prev.is_some_and(|p| p != path) {
            ui.update(UiState::on_navigate);
        }
        path
    });

    let title = Signal::derive(move || {
        route.with(|r| page_title(BUSINESS_NAVIGATION, r).unwrap_or(FALLBACK_TITLE).to_owned())
    });

    view! {
        <div
            class="shell"
            class:shell--mobile=move || ui.get().is_mobile
            class:shell--sidebar-open=move || ui.get().sidebar_open
        >
            <Show when=move || ui.get().backdrop_visible()>
                <div class="shell__backdrop" on:click=move |_| ui.update(UiState::close_overlay)></div>
            </Show>
            <Sidebar route=route expansion=expansion ui=ui/>
            <div class="shell__main">
                <TopBar title=title snapshot=snapshot session=session ui=ui/>
                <Show when=move || !snapshot.with(|s| s.is_merchant_verified)>
                    <div class="shell__banner" role="status">
                        "Your merchant account is awaiting verification. Some features may be limited."
                    </div>
                </Show>
                <main class="shell__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

//! Shell top bar: menu toggle, page title, notifications, profile menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::BUSINESS_ROOT;
use crate::state::auth::AuthSnapshot;
use crate::state::ui::UiState;
use crate::util::session::{RemoteSession, sign_out};

/// Top bar rendered above the content region.
#[component]
pub fn TopBar(
    title: Signal<String>,
    snapshot: Signal<AuthSnapshot>,
    session: RemoteSession,
    ui: RwSignal<UiState>,
) -> impl IntoView {
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        ui.update(UiState::close_popovers);
        sign_out(&session, |path| navigate(path, NavigateOptions::default()));
    };

    let display_name = move || snapshot.with(|s| s.user.display_name());
    let email = move || snapshot.with(|s| s.user.email.clone().unwrap_or_default());
    let initial = move || snapshot.with(|s| s.user.initial().to_string());
    let settings_href = format!("{BUSINESS_ROOT}/settings");

    view! {
        <header class="top-bar">
            <button
                class="top-bar__icon-btn top-bar__menu"
                title="Toggle navigation"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
            >
                <svg viewBox="0 0 20 20" aria-hidden="true">
                    <line x1="3" y1="5" x2="17" y2="5" />
                    <line x1="3" y1="10" x2="17" y2="10" />
                    <line x1="3" y1="15" x2="17" y2="15" />
                </svg>
            </button>
            <h1 class="top-bar__title">{move || title.get()}</h1>
            <span class="top-bar__spacer"></span>

            <div class="top-bar__anchor">
                <button
                    class="top-bar__icon-btn"
                    class:top-bar__icon-btn--active=move || ui.get().notifications_open
                    title="Notifications"
                    on:click=move |_| ui.update(UiState::toggle_notifications)
                >
                    <svg viewBox="0 0 20 20" aria-hidden="true">
                        <path d="M5 14 V9 C5 6.2 7.2 4 10 4 C12.8 4 15 6.2 15 9 V14 L16.5 15.5 H3.5 Z" />
                        <path d="M8.5 17 C8.8 17.6 9.4 18 10 18 C10.6 18 11.2 17.6 11.5 17" />
                    </svg>
                </button>
                <div class="popover popover--notifications" class:popover--open=move || ui.get().notifications_open>
                    <p class="popover__title">"Notifications"</p>
                    <p class="popover__empty">"You're all caught up."</p>
                </div>
            </div>

            <div class="top-bar__anchor">
                <button
                    class="top-bar__avatar"
                    class:top-bar__avatar--active=move || ui.get().profile_menu_open
                    title="Account"
                    on:click=move |_| ui.update(UiState::toggle_profile_menu)
                >
                    {initial}
                </button>
                <div class="popover popover--profile" class:popover--open=move || ui.get().profile_menu_open>
                    <p class="popover__name">{display_name}</p>
                    <p class="popover__email">{email}</p>
                    <a class="popover__item" href=settings_href>"Settings"</a>
                    <button class="popover__item popover__item--danger" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </div>
        </header>
    }
}

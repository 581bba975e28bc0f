//! Business console sidebar with collapsible sections.
//!
//! DESIGN
//! ======
//! Highlighting is derived from the route on every render through the pure
//! helpers in `state::navigation`; the only state this component writes is the
//! shared expansion map and the overlay flag.

use leptos::prelude::*;

use crate::components::nav_icon::{render_chevron, render_close_icon, render_nav_icon};
use crate::state::navigation::{
    BUSINESS_NAVIGATION, ExpansionState, NavItem, NavTarget, is_item_active, is_sub_item_active,
};
use crate::state::ui::UiState;

/// Sidebar listing every console section. On narrow viewports it is an
/// overlay drawer whose visibility follows `UiState::sidebar_open`.
#[component]
pub fn Sidebar(route: Memo<String>, expansion: RwSignal<ExpansionState>, ui: RwSignal<UiState>) -> impl IntoView {
    let entries = BUSINESS_NAVIGATION
        .iter()
        .map(|item| {
            let item = *item;
            match item.target {
                NavTarget::Path(path) => view! {
                    <li>
                        <a
                            class="sidebar__link"
                            class:sidebar__link--active=move || route.with(|r| is_item_active(&item, r))
                            href=path
                        >
                            {render_nav_icon(item.icon)}
                            <span class="sidebar__label">{item.name}</span>
                        </a>
                    </li>
                }
                .into_any(),
                NavTarget::Submenu(_) => view! { <SidebarSection item=item route=route expansion=expansion/> }.into_any(),
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside
            class="sidebar"
            class:sidebar--open=move || ui.get().sidebar_open
            class:sidebar--overlay=move || ui.get().is_mobile
        >
            <div class="sidebar__brand">
                <span class="sidebar__brand-name">"Merchant Console"</span>
                <Show when=move || ui.get().is_mobile>
                    <button
                        class="sidebar__close"
                        title="Close navigation"
                        on:click=move |_| ui.update(UiState::close_overlay)
                    >
                        {render_close_icon()}
                    </button>
                </Show>
            </div>
            <nav class="sidebar__nav" aria-label="Business navigation">
                <ul class="sidebar__list">{entries}</ul>
            </nav>
        </aside>
    }
}

/// A section header that expands to show its sub-items.
#[component]
fn SidebarSection(item: NavItem, route: Memo<String>, expansion: RwSignal<ExpansionState>) -> impl IntoView {
    let name = item.name;
    let expanded = move || expansion.with(|e| e.is_expanded(name));
    let active = move || route.with(|r| is_item_active(&item, r));
    let on_toggle = move |_| expansion.update(|e| e.toggle(name));
    let sub_items = item.sub_items();

    view! {
        <li class="sidebar__section">
            <button
                class="sidebar__link sidebar__section-toggle"
                class:sidebar__link--active=active
                aria-expanded=move || expanded().to_string()
                on:click=on_toggle
            >
                {render_nav_icon(item.icon)}
                <span class="sidebar__label">{name}</span>
                {move || render_chevron(expanded())}
            </button>
            <Show when=expanded>
                <ul class="sidebar__sublist">{render_sub_items(sub_items, route)}</ul>
            </Show>
        </li>
    }
}

fn render_sub_items(items: &'static [NavItem], route: Memo<String>) -> impl IntoView {
    items
        .iter()
        .map(|sub| {
            let sub = *sub;
            let path = sub.path().unwrap_or_default();
            view! {
                <li>
                    <a
                        class="sidebar__sublink"
                        class:sidebar__sublink--active=move || route.with(|r| is_sub_item_active(&sub, r))
                        href=path
                    >
                        {render_nav_icon(sub.icon)}
                        <span class="sidebar__label">{sub.name}</span>
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>()
}

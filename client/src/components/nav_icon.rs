//! SVG glyphs for sidebar entries.

#[cfg(test)]
#[path = "nav_icon_test.rs"]
mod nav_icon_test;

use leptos::prelude::*;

use crate::state::navigation::NavIcon;

/// Render the glyph for a navigation icon identifier.
pub fn render_nav_icon(icon: NavIcon) -> impl IntoView {
    match icon {
        NavIcon::Dashboard => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="3" y="3" width="6" height="8" />
                <rect x="11" y="3" width="6" height="5" />
                <rect x="11" y="10" width="6" height="7" />
                <rect x="3" y="13" width="6" height="4" />
            </svg>
        }
        .into_any(),
        NavIcon::Catalog => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3 6 L10 2.5 L17 6 L10 9.5 Z" />
                <path d="M3 6 V14 L10 17.5 V9.5" />
                <path d="M17 6 V14 L10 17.5" />
            </svg>
        }
        .into_any(),
        NavIcon::Products => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M4 7 H16 L15 17 H5 Z" />
                <path d="M7 7 V5.5 C7 3.8 8.3 2.5 10 2.5 C11.7 2.5 13 3.8 13 5.5 V7" />
            </svg>
        }
        .into_any(),
        NavIcon::Categories => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M2.5 5 H8 L9.5 6.5 H17.5 V16 H2.5 Z" />
            </svg>
        }
        .into_any(),
        NavIcon::Attributes => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3 3 H10 L17 10 L10 17 L3 10 Z" />
                <circle cx="7" cy="7" r="1.2" />
            </svg>
        }
        .into_any(),
        NavIcon::Orders => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="4" y="2.5" width="12" height="15" />
                <line x1="7" y1="7" x2="13" y2="7" />
                <line x1="7" y1="10" x2="13" y2="10" />
                <line x1="7" y1="13" x2="11" y2="13" />
            </svg>
        }
        .into_any(),
        NavIcon::Inventory => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="2.5" y="9" width="7" height="8" />
                <rect x="10.5" y="9" width="7" height="8" />
                <rect x="6.5" y="2.5" width="7" height="6.5" />
            </svg>
        }
        .into_any(),
        NavIcon::Customers => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="6.5" r="3.5" />
                <path d="M3 17.5 C3 13.6 6.1 11.5 10 11.5 C13.9 11.5 17 13.6 17 17.5" />
            </svg>
        }
        .into_any(),
        NavIcon::Payments => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="2" y="4.5" width="16" height="11" />
                <line x1="2" y1="8" x2="18" y2="8" />
                <line x1="5" y1="12" x2="9" y2="12" />
            </svg>
        }
        .into_any(),
        NavIcon::Promotions => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <line x1="5" y1="15" x2="15" y2="5" />
                <circle cx="6" cy="6" r="2" />
                <circle cx="14" cy="14" r="2" />
            </svg>
        }
        .into_any(),
        NavIcon::Reviews => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M10 2.5 L12.2 7.2 L17.3 7.7 L13.5 11.1 L14.6 16.2 L10 13.6 L5.4 16.2 L6.5 11.1 L2.7 7.7 L7.8 7.2 Z" />
            </svg>
        }
        .into_any(),
        NavIcon::Reports => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <line x1="3" y1="17" x2="17" y2="17" />
                <rect x="4.5" y="10" width="3" height="7" />
                <rect x="8.5" y="6" width="3" height="11" />
                <rect x="12.5" y="3" width="3" height="14" />
            </svg>
        }
        .into_any(),
        NavIcon::Support => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="7.5" />
                <path d="M7.8 7.8 C7.8 6.6 8.8 5.7 10 5.7 C11.2 5.7 12.2 6.6 12.2 7.8 C12.2 9.4 10 9.6 10 11.5" />
                <circle cx="10" cy="14.2" r="0.6" />
            </svg>
        }
        .into_any(),
        NavIcon::Settings => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="2.8" />
                <path d="M10 2 V4.5 M10 15.5 V18 M2 10 H4.5 M15.5 10 H18 M4.3 4.3 L6.1 6.1 M13.9 13.9 L15.7 15.7 M4.3 15.7 L6.1 13.9 M13.9 6.1 L15.7 4.3" />
            </svg>
        }
        .into_any(),
    }
}

/// Two diagonals across the 20x20 icon box.
const CLOSE_PATH: &str = "M5 5 L15 15 M15 5 L5 15";

fn chevron_rotation(expanded: bool) -> &'static str {
    if expanded { "rotate(90 10 10)" } else { "" }
}

pub(crate) fn render_chevron(expanded: bool) -> impl IntoView {
    let rotation = chevron_rotation(expanded);
    view! {
        <svg class="sidebar__chevron" viewBox="0 0 20 20" aria-hidden="true">
            <path d="M7.5 5 L12.5 10 L7.5 15" transform=rotation />
        </svg>
    }
}

/// Glyph for the overlay drawer's close button.
pub(crate) fn render_close_icon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d=CLOSE_PATH />
        </svg>
    }
}

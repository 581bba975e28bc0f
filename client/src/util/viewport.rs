//! Window width tracking for the shell's responsive layout.
//!
//! The resize listener lives exactly as long as the component that installs
//! it. Requires a browser environment; on the server both helpers are no-ops
//! and the shell renders its wide layout.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Current `window.innerWidth` in CSS pixels, if available.
pub fn current_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sync `ui` with the window width now and on every resize until the owning
/// component is cleaned up.
pub fn install_viewport_listener(ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(width) = current_width() {
                ui.update(|u| u.apply_viewport_width(width));
            }
        });

        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = current_width() {
                ui.update(|u| u.apply_viewport_width(width));
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}

//! Local shell chrome state (sidebar, viewport mode, popovers).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of auth/session state so the
//! shell's controls can evolve independently of what the backend reports.
//! Every transition is a plain method so behavior is testable without a DOM.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::config::MOBILE_BREAKPOINT_PX;

/// Whether a viewport of `width` CSS pixels uses the narrow (overlay) layout.
pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

/// UI state for the admin shell.
///
/// Provided to shell components as an `RwSignal<UiState>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Narrow-viewport layout; recomputed on mount and every resize.
    pub is_mobile: bool,
    /// Sidebar visibility. On narrow viewports this is the overlay drawer.
    pub sidebar_open: bool,
    pub notifications_open: bool,
    pub profile_menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            is_mobile: false,
            sidebar_open: true,
            notifications_open: false,
            profile_menu_open: false,
        }
    }
}

impl UiState {
    /// Recompute the viewport mode for a new window width.
    ///
    /// Crossing into the wide layout always opens the sidebar. Crossing into
    /// the narrow layout closes it, since the overlay must be opened
    /// explicitly there.
    pub fn apply_viewport_width(&mut self, width: f64) {
        let was_mobile = self.is_mobile;
        self.is_mobile = is_mobile_width(width);
        match (was_mobile, self.is_mobile) {
            (true, false) => self.sidebar_open = true,
            (false, true) => self.sidebar_open = false,
            _ => {}
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Backdrop click: close the overlay drawer.
    pub fn close_overlay(&mut self) {
        if self.is_mobile {
            self.sidebar_open = false;
        }
    }

    /// The dimmed backdrop is shown only while the narrow-layout overlay is open.
    pub fn backdrop_visible(&self) -> bool {
        self.is_mobile && self.sidebar_open
    }

    /// Route change: dismiss the overlay and any open popover.
    pub fn on_navigate(&mut self) {
        self.close_overlay();
        self.close_popovers();
    }

    /// Toggle the notifications panel; opening it closes the profile menu.
    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
        if self.notifications_open {
            self.profile_menu_open = false;
        }
    }

    /// Toggle the profile menu; opening it closes the notifications panel.
    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu_open = !self.profile_menu_open;
        if self.profile_menu_open {
            self.notifications_open = false;
        }
    }

    pub fn close_popovers(&mut self) {
        self.notifications_open = false;
        self.profile_menu_open = false;
    }
}

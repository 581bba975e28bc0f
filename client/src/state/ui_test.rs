use super::*;

fn mobile_state(sidebar_open: bool) -> UiState {
    UiState { is_mobile: true, sidebar_open, ..UiState::default() }
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_wide_with_sidebar_open() {
    let state = UiState::default();
    assert!(!state.is_mobile);
    assert!(state.sidebar_open);
}

#[test]
fn ui_state_default_popovers_closed() {
    let state = UiState::default();
    assert!(!state.notifications_open);
    assert!(!state.profile_menu_open);
    assert!(!state.backdrop_visible());
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn breakpoint_is_exclusive_at_768() {
    assert!(is_mobile_width(767.9));
    assert!(!is_mobile_width(768.0));
    assert!(!is_mobile_width(1440.0));
    assert!(is_mobile_width(0.0));
}

#[test]
fn crossing_to_wide_forces_sidebar_open() {
    for sidebar_open in [false, true] {
        let mut state = mobile_state(sidebar_open);
        state.apply_viewport_width(1024.0);
        assert!(!state.is_mobile);
        assert!(state.sidebar_open);
    }
}

#[test]
fn crossing_to_narrow_closes_overlay() {
    let mut state = UiState::default();
    state.apply_viewport_width(500.0);
    assert!(state.is_mobile);
    assert!(!state.sidebar_open);
}

#[test]
fn resize_within_wide_layout_keeps_sidebar_choice() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    state.apply_viewport_width(1300.0);
    assert!(!state.sidebar_open);
}

#[test]
fn resize_within_narrow_layout_keeps_overlay_choice() {
    let mut state = mobile_state(true);
    state.apply_viewport_width(400.0);
    assert!(state.sidebar_open);
}

// =============================================================
// Overlay + backdrop
// =============================================================

#[test]
fn backdrop_only_when_narrow_and_open() {
    assert!(mobile_state(true).backdrop_visible());
    assert!(!mobile_state(false).backdrop_visible());
    assert!(!UiState::default().backdrop_visible());
}

#[test]
fn backdrop_click_closes_overlay() {
    let mut state = mobile_state(true);
    state.close_overlay();
    assert!(!state.sidebar_open);
    assert!(!state.backdrop_visible());
}

#[test]
fn close_overlay_is_noop_on_wide_layout() {
    let mut state = UiState::default();
    state.close_overlay();
    assert!(state.sidebar_open);
}

#[test]
fn navigation_closes_overlay_and_popovers() {
    let mut state = mobile_state(true);
    state.toggle_profile_menu();
    state.on_navigate();
    assert!(!state.sidebar_open);
    assert!(!state.profile_menu_open);
}

// =============================================================
// Popovers
// =============================================================

#[test]
fn popover_toggle_twice_restores_state() {
    let mut state = UiState::default();
    state.toggle_notifications();
    assert!(state.notifications_open);
    state.toggle_notifications();
    assert!(!state.notifications_open);
}

#[test]
fn opening_one_popover_closes_the_other() {
    let mut state = UiState::default();
    state.toggle_notifications();
    state.toggle_profile_menu();
    assert!(state.profile_menu_open);
    assert!(!state.notifications_open);

    state.toggle_notifications();
    assert!(state.notifications_open);
    assert!(!state.profile_menu_open);
}

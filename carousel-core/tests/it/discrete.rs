use carousel_core::{CarouselConfig, TaskHandle};

use crate::helpers::{carousel, carousel_with};

#[test]
fn scroll_by_and_back_returns_to_start() {
    let mut c = carousel(100.0, 600.0);
    c.on_wheel(40.0, 0.0);
    c.scroll_by(100.0);
    assert_eq!(c.current_scroll(), 140.0);
    c.scroll_by(-100.0);
    assert_eq!(c.current_scroll(), 40.0);
}

#[test]
fn scroll_by_is_clamped_by_default() {
    let mut c = carousel(100.0, 150.0);
    c.scroll_by(100.0);
    assert_eq!(c.current_scroll(), 50.0);
    c.scroll_by(-100.0);
    assert_eq!(c.current_scroll(), 0.0);
    c.scroll_by(-100.0);
    assert_eq!(c.current_scroll(), 0.0);
}

#[test]
fn scroll_by_can_overscroll_when_clamping_is_disabled() {
    let config = CarouselConfig {
        clamp_discrete_scroll: false,
        ..CarouselConfig::default()
    };
    let mut c = carousel_with(100.0, 150.0, config);
    c.scroll_by(-100.0);
    assert_eq!(c.current_scroll(), -100.0);
    c.scroll_by(100.0);
    assert_eq!(c.current_scroll(), 0.0);
}

#[test]
fn scroll_by_is_eased_and_schedules_a_reset() {
    let mut c = carousel(100.0, 600.0);
    c.scroll_by(100.0);
    assert_eq!(c.surface().offsets.last(), Some(&(100.0, true)));
    assert_eq!(
        c.surface().transition.as_deref(),
        Some("transform 400ms cubic-bezier(0.25, 0.46, 0.45, 0.94)")
    );
    assert_eq!(c.surface().scheduled, vec![TaskHandle(1)]);
    c.surface_mut().fire_pending();
    assert!(c.surface().transition.is_none());
}

#[test]
fn second_scroll_by_cancels_the_first_reset() {
    let mut c = carousel(100.0, 600.0);
    c.scroll_by(100.0);
    c.scroll_by(100.0);
    assert_eq!(c.surface().scheduled, vec![TaskHandle(1), TaskHandle(2)]);
    assert_eq!(c.surface().cancelled, vec![TaskHandle(1)]);
    assert_eq!(c.current_scroll(), 200.0);
}

#[test]
fn key_repeat_keeps_at_most_one_reset_pending() {
    let mut c = carousel(100.0, 5000.0);
    for _ in 0..10 {
        c.on_key("ArrowRight");
    }
    let scheduled = c.surface().scheduled.clone();
    assert_eq!(scheduled.len(), 10);
    // every reset but the last was cancelled before the next was scheduled
    assert_eq!(c.surface().cancelled, scheduled[..9].to_vec());
    assert_eq!(c.current_scroll(), 1000.0);
}

#[test]
fn arrow_keys_step_by_the_configured_distance() {
    let mut c = carousel(100.0, 600.0);
    assert!(c.on_key("ArrowRight"));
    assert!(c.on_key("ArrowRight"));
    assert!(c.on_key("ArrowLeft"));
    assert_eq!(c.current_scroll(), 100.0);
    assert!(!c.on_key("Enter"));
    assert_eq!(c.current_scroll(), 100.0);

    let config = CarouselConfig {
        key_step_px: 25.0,
        ..CarouselConfig::default()
    };
    let mut c = carousel_with(100.0, 600.0, config);
    c.on_key("ArrowRight");
    assert_eq!(c.current_scroll(), 25.0);
}

#[test]
fn wheel_uses_horizontal_delta_then_vertical() {
    let mut c = carousel(100.0, 300.0);
    c.on_wheel(30.0, 90.0);
    assert_eq!(c.current_scroll(), 30.0);
    c.on_wheel(0.0, 90.0);
    assert_eq!(c.current_scroll(), 120.0);
    c.on_wheel(0.0, 500.0);
    assert_eq!(c.current_scroll(), 200.0);
    c.on_wheel(-1000.0, 0.0);
    assert_eq!(c.current_scroll(), 0.0);
    assert_eq!(c.surface().offsets.last(), Some(&(0.0, false)));
}

#[test]
fn wheel_interrupts_an_eased_step() {
    let mut c = carousel(100.0, 600.0);
    c.scroll_by(100.0);
    c.on_wheel(10.0, 0.0);
    assert_eq!(c.surface().cancelled, vec![TaskHandle(1)]);
    assert!(c.surface().transition.is_none());
    assert_eq!(c.current_scroll(), 110.0);
}

#[test]
fn discrete_input_is_accepted_mid_drag() {
    let mut c = carousel(100.0, 600.0);
    c.begin_drag(100.0);
    c.scroll_by(100.0);
    c.on_wheel(20.0, 0.0);
    assert_eq!(c.current_scroll(), 120.0);
    assert!(c.is_dragging());
    // the drag continues from the stepped offset
    c.update_drag(100.0);
    assert_eq!(c.current_scroll(), 120.0);
    c.update_drag(70.0);
    assert_eq!(c.current_scroll(), 150.0);
}

#[test]
fn clamped_step_mid_drag_moves_the_anchor_by_the_applied_distance() {
    let mut c = carousel(100.0, 250.0);
    c.begin_drag(100.0);
    c.update_drag(0.0);
    assert_eq!(c.current_scroll(), 100.0);
    c.scroll_by(100.0);
    assert_eq!(c.current_scroll(), 150.0);
    c.update_drag(50.0);
    assert_eq!(c.current_scroll(), 100.0);
}

#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// MotionPhase transitions
// =============================================================

#[test]
fn default_phase_is_initial() {
    assert_eq!(MotionPhase::default(), MotionPhase::Initial);
}

#[test]
fn scroll_reveal_becomes_visible_on_scroll_into_view() {
    let phase = MotionPhase::Initial.on(MotionTrigger::ScrollIntoView, RevealOn::Scroll);
    assert_eq!(phase, MotionPhase::Visible);
}

#[test]
fn scroll_reveal_ignores_mount() {
    let phase = MotionPhase::Initial.on(MotionTrigger::Mount, RevealOn::Scroll);
    assert_eq!(phase, MotionPhase::Initial);
}

#[test]
fn mount_reveal_ignores_scroll() {
    let phase = MotionPhase::Initial.on(MotionTrigger::ScrollIntoView, RevealOn::Mount);
    assert_eq!(phase, MotionPhase::Initial);
    assert_eq!(phase.on(MotionTrigger::Mount, RevealOn::Mount), MotionPhase::Visible);
}

#[test]
fn visible_never_replays() {
    let phase = MotionPhase::Visible;
    assert_eq!(phase.on(MotionTrigger::ScrollIntoView, RevealOn::Scroll), MotionPhase::Visible);
    assert_eq!(phase.on(MotionTrigger::Mount, RevealOn::Mount), MotionPhase::Visible);
}

#[test]
fn route_change_exits_from_any_phase() {
    for phase in [MotionPhase::Initial, MotionPhase::Visible, MotionPhase::Exiting] {
        assert_eq!(phase.on(MotionTrigger::RouteChange, RevealOn::Scroll), MotionPhase::Exiting);
    }
}

#[test]
fn exiting_is_terminal() {
    for trigger in [MotionTrigger::Mount, MotionTrigger::ScrollIntoView, MotionTrigger::RouteChange] {
        for reveal_on in [RevealOn::Mount, RevealOn::Scroll] {
            assert_eq!(MotionPhase::Exiting.on(trigger, reveal_on), MotionPhase::Exiting);
        }
    }
}

// =============================================================
// Motion builders and styles
// =============================================================

#[test]
fn default_motion_rises_twenty_pixels_on_scroll() {
    let m = Motion::default();
    assert_eq!(m.dy, 20.0);
    assert_eq!(m.dx, 0.0);
    assert_eq!(m.duration_ms, REVEAL_MS);
    assert_eq!(m.reveal_on, RevealOn::Scroll);
}

#[test]
fn builders_compose() {
    let m = Motion::slide_x(-20.0).delay(300).duration(800).on_mount();
    assert_eq!(m.dx, -20.0);
    assert_eq!(m.delay_ms, 300);
    assert_eq!(m.duration_ms, 800);
    assert_eq!(m.reveal_on, RevealOn::Mount);
}

#[test]
fn initial_style_hides_and_offsets() {
    let style = Motion::rise(20.0).style(MotionPhase::Initial);
    assert_eq!(style, "opacity:0;transform:translate3d(0px,20px,0)");
}

#[test]
fn visible_style_runs_enter_animation_with_delay() {
    let style = Motion::slide_x(-20.0).delay(100).style(MotionPhase::Visible);
    assert_eq!(
        style,
        "--motion-dx:-20px;--motion-dy:0px;animation:motion-enter 600ms ease-out 100ms both"
    );
}

#[test]
fn exiting_style_uses_page_fade() {
    let style = Motion::fade().style(MotionPhase::Exiting);
    assert_eq!(style, "animation:motion-exit 300ms ease-in both");
}

#[test]
fn stagger_multiplies_index() {
    assert_eq!(stagger(0, 100), 0);
    assert_eq!(stagger(3, 100), 300);
    assert_eq!(stagger(usize::MAX, 100), u32::MAX);
}

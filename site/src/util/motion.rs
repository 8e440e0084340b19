//! Per-element motion state machine and inline style projection.
//!
//! DESIGN
//! ======
//! Every animated element moves through `Initial -> Visible -> Exiting`.
//! Transitions are driven by explicit triggers (mount, scroll-into-view,
//! route change) instead of per-element inline directives. The visual side
//! is a keyframe animation selected by the phase, so an element can jump
//! straight to `Visible` after mount without waiting for a paint.
//!
//! The keyframes (`motion-enter`, `motion-exit`) live in the site stylesheet
//! and read the start offset from `--motion-dx` / `--motion-dy`.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Duration of the page-level fade, in milliseconds.
pub const PAGE_FADE_MS: u32 = 300;

/// Default duration for section reveals, in milliseconds.
pub const REVEAL_MS: u32 = 600;

/// Lifecycle phase of one animated element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPhase {
    /// Mounted, not yet shown (opacity 0, offset applied).
    #[default]
    Initial,
    /// Enter animation applied; stays here once reached.
    Visible,
    /// Fading out ahead of a route change. Terminal.
    Exiting,
}

/// Event that may move an element to another phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionTrigger {
    Mount,
    ScrollIntoView,
    RouteChange,
}

/// Which trigger reveals an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealOn {
    Mount,
    #[default]
    Scroll,
}

impl MotionPhase {
    /// Apply `trigger` to this phase for an element revealed by `reveal_on`.
    ///
    /// Reveals happen once: a visible element ignores further scroll
    /// triggers. A route change moves any phase to `Exiting`, which ignores
    /// everything after it.
    #[must_use]
    pub fn on(self, trigger: MotionTrigger, reveal_on: RevealOn) -> MotionPhase {
        match (self, trigger) {
            (MotionPhase::Exiting, _) | (_, MotionTrigger::RouteChange) => MotionPhase::Exiting,
            (MotionPhase::Initial, MotionTrigger::Mount) if reveal_on == RevealOn::Mount => MotionPhase::Visible,
            (MotionPhase::Initial, MotionTrigger::ScrollIntoView) if reveal_on == RevealOn::Scroll => {
                MotionPhase::Visible
            }
            (phase, _) => phase,
        }
    }
}

/// Animation parameters for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Start offset in CSS pixels; the element animates from here to rest.
    pub dx: f64,
    pub dy: f64,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub reveal_on: RevealOn,
}

impl Default for Motion {
    fn default() -> Self {
        Self::rise(20.0)
    }
}

impl Motion {
    /// Plain fade in place.
    #[must_use]
    pub const fn fade() -> Self {
        Self { dx: 0.0, dy: 0.0, delay_ms: 0, duration_ms: REVEAL_MS, reveal_on: RevealOn::Scroll }
    }

    /// Fade in while moving up from `px` below. Negative `px` drops in from above.
    #[must_use]
    pub const fn rise(px: f64) -> Self {
        Self { dy: px, ..Self::fade() }
    }

    /// Fade in while sliding horizontally from `px` (negative = from the left).
    #[must_use]
    pub const fn slide_x(px: f64) -> Self {
        Self { dx: px, ..Self::fade() }
    }

    #[must_use]
    pub const fn delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    #[must_use]
    pub const fn duration(self, duration_ms: u32) -> Self {
        Self { duration_ms, ..self }
    }

    /// Reveal on mount rather than on scroll.
    #[must_use]
    pub const fn on_mount(self) -> Self {
        Self { reveal_on: RevealOn::Mount, ..self }
    }

    /// Inline `style` value for `phase`.
    #[must_use]
    pub fn style(&self, phase: MotionPhase) -> String {
        match phase {
            MotionPhase::Initial => format!("opacity:0;transform:translate3d({}px,{}px,0)", self.dx, self.dy),
            MotionPhase::Visible => format!(
                "--motion-dx:{}px;--motion-dy:{}px;animation:motion-enter {}ms ease-out {}ms both",
                self.dx, self.dy, self.duration_ms, self.delay_ms
            ),
            MotionPhase::Exiting => format!("animation:motion-exit {PAGE_FADE_MS}ms ease-in both"),
        }
    }
}

/// Delay for the `index`-th item of a staggered list.
#[must_use]
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(step_ms))
}

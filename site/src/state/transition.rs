//! Page swap sequencing for route changes.
//!
//! DESIGN
//! ======
//! Exactly one page is displayed at any time. A route change first moves the
//! displayed page to `Exiting`; the incoming page is only mounted once that
//! exit has finished ("wait" mode). Timers are owned by the host component;
//! this state only says what to schedule and stamps each request with an
//! epoch so a superseded completion is ignored instead of cancelled.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use crate::state::route::PageRoute;
use crate::util::motion::{MotionPhase, MotionTrigger, PAGE_FADE_MS, RevealOn};

/// Work the host must schedule after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionCommand {
    None,
    /// Call [`TransitionState::finish_exit`] with `epoch` after `after_ms`.
    ScheduleExit { epoch: u64, after_ms: u32 },
    /// A new page was mounted; call [`TransitionState::enter`] with `epoch`
    /// once it is in the document.
    ScheduleEnter { epoch: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionState {
    displayed: PageRoute,
    phase: MotionPhase,
    pending: Option<PageRoute>,
    epoch: u64,
}

impl TransitionState {
    /// Start with `route` mounted and not yet entered.
    #[must_use]
    pub fn new(route: PageRoute) -> Self {
        Self { displayed: route, phase: MotionPhase::Initial, pending: None, epoch: 0 }
    }

    /// The page currently in the document.
    #[must_use]
    pub fn displayed(&self) -> PageRoute {
        self.displayed
    }

    #[must_use]
    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    /// The page waiting for the current exit to finish.
    #[must_use]
    pub fn pending(&self) -> Option<PageRoute> {
        self.pending
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The command that enters the page mounted by [`TransitionState::new`].
    #[must_use]
    pub fn initial_command(&self) -> TransitionCommand {
        if self.phase == MotionPhase::Initial {
            TransitionCommand::ScheduleEnter { epoch: self.epoch }
        } else {
            TransitionCommand::None
        }
    }

    /// The active route changed to `target`.
    ///
    /// While an exit is running the target is only recorded; the latest one
    /// wins when the exit finishes. Navigating to the displayed page while it
    /// is shown does nothing.
    pub fn navigate(&mut self, target: PageRoute) -> TransitionCommand {
        if self.phase == MotionPhase::Exiting {
            self.pending = Some(target);
            return TransitionCommand::None;
        }
        if target == self.displayed {
            return TransitionCommand::None;
        }
        self.phase = self.phase.on(MotionTrigger::RouteChange, RevealOn::Mount);
        self.pending = Some(target);
        self.epoch += 1;
        TransitionCommand::ScheduleExit { epoch: self.epoch, after_ms: PAGE_FADE_MS }
    }

    /// The exit timer stamped with `epoch` fired.
    ///
    /// Swaps in the pending page in `Initial`. Stale epochs are ignored.
    pub fn finish_exit(&mut self, epoch: u64) -> TransitionCommand {
        if epoch != self.epoch || self.phase != MotionPhase::Exiting {
            return TransitionCommand::None;
        }
        let Some(next) = self.pending.take() else {
            return TransitionCommand::None;
        };
        self.displayed = next;
        self.phase = MotionPhase::Initial;
        self.epoch += 1;
        TransitionCommand::ScheduleEnter { epoch: self.epoch }
    }

    /// Start the enter animation of the page mounted for `epoch`.
    ///
    /// Returns `false` when the request is stale or the page already entered.
    pub fn enter(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.phase != MotionPhase::Initial {
            return false;
        }
        self.phase = self.phase.on(MotionTrigger::Mount, RevealOn::Mount);
        true
    }
}

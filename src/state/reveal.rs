//! Reveal latch - the grid's one-way Hidden → Shown switch.
//!
//! A mounted grid starts `Hidden`. The first time its container is seen the
//! latch flips to `Shown` and records when. Nothing ever flips it back, so
//! scrolling away and returning does not replay the entrance.

use std::cell::Cell;
use std::time::Duration;

/// Animation state shared by every card of one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Shown,
}

impl RevealState {
    /// Value of the `data-reveal` attribute.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Shown => "shown",
        }
    }
}

/// One-shot latch owned by a grid's mount handle.
///
/// Cards read it, only the visibility callback fires it.
#[derive(Debug, Default)]
pub struct RevealLatch {
    state: Cell<RevealState>,
    shown_at: Cell<Option<Duration>>,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    pub fn is_shown(&self) -> bool {
        self.state.get() == RevealState::Shown
    }

    /// Timestamp of the transition, if it happened.
    pub fn shown_at(&self) -> Option<Duration> {
        self.shown_at.get()
    }

    /// Flip to `Shown` at `now`.
    ///
    /// Returns `true` only for the call that performed the transition.
    /// Later calls are no-ops and keep the original timestamp.
    pub fn fire(&self, now: Duration) -> bool {
        if self.is_shown() {
            return false;
        }
        self.state.set(RevealState::Shown);
        self.shown_at.set(Some(now));
        true
    }
}

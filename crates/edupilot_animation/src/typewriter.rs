//! Typed-text reveal
//!
//! [`TypedTextAnimator`] reveals a string one character per tick while its
//! trigger is active, as in a hero heading that "types itself" whenever the
//! first slide is on screen.
//!
//! ```text
//!            activate()                 last char
//!   Idle ───────────────▶ Revealing ─────────────▶ Complete
//!    ▲                        │                       │
//!    └──────── deactivate() ──┴───────────────────────┘
//! ```
//!
//! The pending tick lives in a [`TimerSlot`], so at most one tick is ever
//! scheduled. The slot is cleared on completion and on deactivation; those
//! are the only two ways periodic work stops.

use edupilot_core::{CyclerError, Result};
use tracing::{debug, trace};

use crate::timer::TimerSlot;

/// Reveal progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Trigger inactive; nothing shown, nothing scheduled
    #[default]
    Idle,
    /// Characters are being revealed
    Revealing,
    /// Full text visible; nothing scheduled
    Complete,
}

/// What a single tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// One more character is visible
    Revealed(usize),
    /// The last character became visible
    Completed,
    /// The animator was idle or already complete
    Ignored,
}

/// Timer-driven incremental string revealer
#[derive(Clone, Debug)]
pub struct TypedTextAnimator {
    full_text: String,
    char_count: usize,
    revealed: usize,
    tick_interval_ms: u32,
    state: RevealState,
    timer: TimerSlot,
}

impl TypedTextAnimator {
    /// Create an idle animator revealing one character every `tick_interval_ms`
    pub fn new(full_text: impl Into<String>, tick_interval_ms: u32) -> Result<Self> {
        if tick_interval_ms == 0 {
            return Err(CyclerError::config(
                "tick_interval_ms",
                "must be greater than zero",
            ));
        }

        let full_text = full_text.into();
        let char_count = full_text.chars().count();
        Ok(Self {
            full_text,
            char_count,
            revealed: 0,
            tick_interval_ms,
            state: RevealState::Idle,
            timer: TimerSlot::new(),
        })
    }

    /// Trigger went active: restart the reveal from an empty string
    ///
    /// Calling this while already active is a no-op, so the revealed length
    /// never moves backwards during one activation.
    pub fn activate(&mut self) {
        if self.state != RevealState::Idle {
            return;
        }

        self.revealed = 0;
        if self.char_count == 0 {
            self.state = RevealState::Complete;
        } else {
            self.state = RevealState::Revealing;
            self.timer.arm(self.tick_interval_ms);
        }
        debug!(state = ?self.state, chars = self.char_count, "typed text activated");
    }

    /// Trigger went inactive: cancel any pending tick and clear the text
    pub fn deactivate(&mut self) {
        if self.state == RevealState::Idle {
            return;
        }

        let cancelled = self.timer.cancel();
        self.revealed = 0;
        self.state = RevealState::Idle;
        debug!(cancelled, "typed text deactivated");
    }

    /// Drive the trigger from a visibility flag
    pub fn set_trigger(&mut self, active: bool) {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    pub fn is_active(&self) -> bool {
        self.state != RevealState::Idle
    }

    /// Reveal one more character
    ///
    /// Normally called when the pending timer fires; a host clock may also
    /// call it directly. Either way the pending deadline is replaced, never
    /// duplicated.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != RevealState::Revealing {
            return TickOutcome::Ignored;
        }

        self.revealed += 1;
        if self.revealed >= self.char_count {
            self.revealed = self.char_count;
            self.state = RevealState::Complete;
            self.timer.cancel();
            debug!(chars = self.char_count, "typed text complete");
            TickOutcome::Completed
        } else {
            self.timer.arm(self.tick_interval_ms);
            trace!(revealed = self.revealed, "typed text tick");
            TickOutcome::Revealed(self.revealed)
        }
    }

    /// Feed elapsed host time, firing every tick it covers
    ///
    /// Returns the number of ticks fired. Stops early once complete.
    pub fn advance(&mut self, elapsed_ms: u32) -> usize {
        let mut budget = elapsed_ms;
        let mut fired = 0;

        while let Some(left) = self.timer.advance(budget) {
            fired += 1;
            budget = left;
            if self.tick() == TickOutcome::Completed {
                break;
            }
        }
        fired
    }

    /// The currently revealed prefix
    pub fn visible_text(&self) -> &str {
        let end = self
            .full_text
            .char_indices()
            .nth(self.revealed)
            .map(|(byte, _)| byte)
            .unwrap_or(self.full_text.len());
        &self.full_text[..end]
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Number of characters currently visible
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// Total characters in the text
    pub fn len(&self) -> usize {
        self.char_count
    }

    pub fn is_empty(&self) -> bool {
        self.char_count == 0
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    /// Whether a tick is currently scheduled
    pub fn is_tick_pending(&self) -> bool {
        self.timer.is_armed()
    }
}

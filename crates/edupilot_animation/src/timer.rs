//! Single-slot timer
//!
//! A [`TimerSlot`] holds at most one pending deadline. Arming while a deadline
//! is pending replaces it, which makes duplicate or racing fires impossible for
//! a single owner. Time only moves when the owner calls [`TimerSlot::advance`].

use tracing::trace;

/// One-shot deadline with a single slot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerSlot {
    remaining_ms: Option<u32>,
}

impl TimerSlot {
    /// Create a disarmed timer
    pub fn new() -> Self {
        Self { remaining_ms: None }
    }

    /// Schedule a fire `delay_ms` from now
    ///
    /// Returns `true` if a pending deadline was replaced.
    pub fn arm(&mut self, delay_ms: u32) -> bool {
        let replaced = self.remaining_ms.replace(delay_ms).is_some();
        if replaced {
            trace!(delay_ms, "timer re-armed, previous deadline dropped");
        }
        replaced
    }

    /// Drop the pending deadline, if any
    ///
    /// Returns `true` if something was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.remaining_ms.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Time left until the pending deadline
    pub fn remaining_ms(&self) -> Option<u32> {
        self.remaining_ms
    }

    /// Move time forward by `dt_ms`
    ///
    /// If the deadline is reached the slot disarms and returns the part of
    /// `dt_ms` left over after the fire, so the owner can chain further work
    /// inside the same frame. Returns `None` if nothing fired.
    pub fn advance(&mut self, dt_ms: u32) -> Option<u32> {
        let remaining = self.remaining_ms?;
        if dt_ms >= remaining {
            self.remaining_ms = None;
            Some(dt_ms - remaining)
        } else {
            self.remaining_ms = Some(remaining - dt_ms);
            None
        }
    }
}

//! Periodic attention pulse
//!
//! Every `interval_ms` the pulse switches on for `pulse_ms`, then off again
//! until the next interval. The dashboard greeting uses it to jiggle every
//! five seconds.

use edupilot_core::{CyclerError, Result};
use tracing::trace;

/// Default time between pulses
pub const DEFAULT_INTERVAL_MS: u32 = 5_000;

/// Default pulse length
pub const DEFAULT_PULSE_MS: u32 = 500;

/// Interval-driven on/off pulse
#[derive(Clone, Debug)]
pub struct PulseTimer {
    interval_ms: u32,
    pulse_ms: u32,
    elapsed_ms: u64,
    running: bool,
}

impl PulseTimer {
    /// Create a running pulse timer
    ///
    /// The first pulse starts after one full interval.
    pub fn new(interval_ms: u32, pulse_ms: u32) -> Result<Self> {
        if interval_ms == 0 {
            return Err(CyclerError::config("interval_ms", "must be greater than zero"));
        }
        if pulse_ms == 0 || pulse_ms >= interval_ms {
            return Err(CyclerError::config(
                "pulse_ms",
                format!("must be in 1..{interval_ms}, got {pulse_ms}"),
            ));
        }

        Ok(Self {
            interval_ms,
            pulse_ms,
            elapsed_ms: 0,
            running: true,
        })
    }

    /// Feed elapsed host time
    pub fn advance(&mut self, dt_ms: u32) {
        if !self.running {
            return;
        }
        let was_pulsing = self.is_pulsing();
        self.elapsed_ms = self.elapsed_ms.saturating_add(u64::from(dt_ms));
        if self.is_pulsing() != was_pulsing {
            trace!(pulsing = !was_pulsing, "pulse edge");
        }
    }

    /// Whether the pulse is currently on
    pub fn is_pulsing(&self) -> bool {
        let interval = u64::from(self.interval_ms);
        self.running
            && self.elapsed_ms >= interval
            && self.elapsed_ms % interval < u64::from(self.pulse_ms)
    }

    /// Number of pulses started so far
    pub fn pulse_count(&self) -> u64 {
        self.elapsed_ms / u64::from(self.interval_ms)
    }

    /// Stop pulsing; later `advance` calls do nothing
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for PulseTimer {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            pulse_ms: DEFAULT_PULSE_MS,
            elapsed_ms: 0,
            running: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config() {
        assert!(PulseTimer::new(0, 0).is_err());
        assert!(PulseTimer::new(500, 500).is_err());
        assert!(PulseTimer::new(500, 0).is_err());
    }

    #[test]
    fn test_pulse_window() {
        let mut pulse = PulseTimer::default();
        assert!(!pulse.is_pulsing());

        pulse.advance(4_999);
        assert!(!pulse.is_pulsing());

        pulse.advance(1);
        assert!(pulse.is_pulsing());
        assert_eq!(pulse.pulse_count(), 1);

        pulse.advance(499);
        assert!(pulse.is_pulsing());
        pulse.advance(1);
        assert!(!pulse.is_pulsing());

        pulse.advance(4_500);
        assert!(pulse.is_pulsing());
        assert_eq!(pulse.pulse_count(), 2);
    }

    #[test]
    fn test_stop_cancels() {
        let mut pulse = PulseTimer::new(1_000, 100).unwrap();
        pulse.advance(1_000);
        assert!(pulse.is_pulsing());

        pulse.stop();
        assert!(!pulse.is_pulsing());
        pulse.advance(5_000);
        assert!(!pulse.is_pulsing());
        assert_eq!(pulse.pulse_count(), 1);
    }
}

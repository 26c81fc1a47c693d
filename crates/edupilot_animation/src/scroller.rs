//! Seamless looping scroll offsets
//!
//! A [`CyclicScroller`] turns elapsed time into a horizontal offset for a row
//! that renders its collection twice back to back. Sweeping exactly one pass
//! (half of the doubled track) per period and wrapping at the period boundary
//! makes the loop point indistinguishable from mid-sequence motion.
//!
//! # Example
//!
//! ```rust
//! use edupilot_animation::CyclicScroller;
//! use edupilot_core::{Direction, ItemCollection};
//!
//! let row = ItemCollection::from(vec!["great course", "loved it"]);
//! let mut scroller = CyclicScroller::new(row, 30.0, Direction::Forward).unwrap();
//!
//! scroller.tick(7.5).unwrap();
//! assert_eq!(scroller.current_offset_fraction(), 0.25);
//! assert_eq!(scroller.offset_percent(), -12.5);
//! ```

use edupilot_core::{CyclerError, Direction, ItemCollection, Result};
use tracing::debug;

/// Share of the doubled track covered by one full pass
const PASS_PERCENT: f64 = 50.0;

/// Time-driven looping offset over a doubled collection
#[derive(Clone, Debug)]
pub struct CyclicScroller<T> {
    collection: ItemCollection<T>,
    direction: Direction,
    period_seconds: f64,
    elapsed: f64,
}

impl<T> CyclicScroller<T> {
    /// Create a scroller that completes one pass every `period_seconds`
    pub fn new(
        collection: ItemCollection<T>,
        period_seconds: f64,
        direction: Direction,
    ) -> Result<Self> {
        if !period_seconds.is_finite() || period_seconds <= 0.0 {
            return Err(CyclerError::config(
                "period_seconds",
                format!("must be a positive finite number, got {period_seconds}"),
            ));
        }

        Ok(Self {
            collection,
            direction,
            period_seconds,
            elapsed: 0.0,
        })
    }

    /// Advance the loop clock by `delta_seconds`
    ///
    /// Negative or non-finite deltas are rejected and leave the offset as it was.
    pub fn tick(&mut self, delta_seconds: f64) -> Result<()> {
        check_delta(delta_seconds)?;
        self.elapsed = (self.elapsed + delta_seconds) % self.period_seconds;
        Ok(())
    }

    /// Position within the current pass, in `[0, 1)`
    pub fn current_offset_fraction(&self) -> f64 {
        let fraction = self.elapsed / self.period_seconds;
        // Rounding in the division can land on 1.0 for an elapsed value just
        // under the period; that point is the seam and maps to the pass start.
        if fraction >= 1.0 {
            0.0
        } else {
            fraction
        }
    }

    /// Translation as a percentage of the doubled track's width
    ///
    /// Forward rows travel `0 → -50`, reverse rows travel `-50 → 0`.
    pub fn offset_percent(&self) -> f64 {
        let fraction = self.current_offset_fraction();
        match self.direction {
            Direction::Forward => -PASS_PERCENT * fraction,
            Direction::Reverse => -PASS_PERCENT * (1.0 - fraction),
        }
    }

    /// Translation in pixels given the measured width of one pass
    ///
    /// `pass_width` is the rendered width of a single copy of the collection,
    /// including inter-item gaps. Using the measured width keeps the loop
    /// seamless even when card widths vary at runtime.
    pub fn offset_for_pass_width(&self, pass_width: f64) -> Result<f64> {
        if !pass_width.is_finite() || pass_width < 0.0 {
            return Err(CyclerError::input(format!(
                "pass width must be a non-negative finite number, got {pass_width}"
            )));
        }

        let fraction = self.current_offset_fraction();
        Ok(match self.direction {
            Direction::Forward => -pass_width * fraction,
            Direction::Reverse => -pass_width * (1.0 - fraction),
        })
    }

    /// The doubled render sequence, each item paired with its source index
    pub fn rendered_items(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.collection.doubled()
    }

    /// Restart the loop from its initial offset
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn period_seconds(&self) -> f64 {
        self.period_seconds
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn collection(&self) -> &ItemCollection<T> {
        &self.collection
    }
}

fn check_delta(delta_seconds: f64) -> Result<()> {
    if delta_seconds.is_finite() && delta_seconds >= 0.0 {
        Ok(())
    } else {
        Err(CyclerError::input(format!(
            "delta_seconds must be a non-negative finite number, got {delta_seconds}"
        )))
    }
}

// ============================================================================
// Marquee Rows
// ============================================================================

/// Several independent looping rows driven by one clock
///
/// Each row owns its own scroller and period; rows never share elapsed time.
#[derive(Clone, Debug)]
pub struct MarqueeRows<T> {
    rows: Vec<CyclicScroller<T>>,
}

impl<T> MarqueeRows<T> {
    pub fn new(rows: Vec<CyclicScroller<T>>) -> Self {
        debug!(rows = rows.len(), "marquee rows created");
        Self { rows }
    }

    /// Advance every row by the same delta
    ///
    /// The delta is validated once up front, so a rejected tick moves no row.
    pub fn tick(&mut self, delta_seconds: f64) -> Result<()> {
        check_delta(delta_seconds)?;
        for row in &mut self.rows {
            row.tick(delta_seconds)?;
        }
        Ok(())
    }

    pub fn rows(&self) -> &[CyclicScroller<T>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&CyclicScroller<T>> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

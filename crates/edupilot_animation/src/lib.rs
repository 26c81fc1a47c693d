//! EduPilot Animation
//!
//! Time-driven UI state, advanced by an external frame clock.
//!
//! # Features
//!
//! - **Cyclic Scrolling**: seamless looping offsets over a doubled collection
//! - **Marquee Rows**: several independent scrollers ticked together
//! - **Typed Text**: character-by-character reveal with explicit cancellation
//! - **Single-Slot Timers**: one pending deadline per owner, re-arming replaces
//! - **Pulse Timers**: periodic short "attention" pulses
//!
//! Nothing in this crate spawns threads or registers global callbacks. Every
//! value is owned by the view that created it and only moves when that view
//! forwards elapsed time from its frame driver.

pub mod pulse;
pub mod scroller;
pub mod timer;
pub mod typewriter;

pub use pulse::PulseTimer;
pub use scroller::{CyclicScroller, MarqueeRows};
pub use timer::TimerSlot;
pub use typewriter::{RevealState, TickOutcome, TypedTextAnimator};

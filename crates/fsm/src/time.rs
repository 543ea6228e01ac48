//! Monotonic millisecond tick source.
//!
//! The executor never reads a clock directly; the host supplies one
//! through [`TickSource`]. Ticks are `u32` milliseconds and wrap at
//! `u32::MAX`; every elapsed-time comparison in the executor uses
//! `wrapping_sub`, so correctness holds across a wrap (roughly every
//! 49.7 days of uptime).

use core::sync::atomic::{AtomicU32, Ordering};

use crate::sync::Arc;

/// One unit of the monotonic millisecond counter.
pub type Tick = u32;

/// Monotonically increasing millisecond counter, wrapping at `u32::MAX`.
///
/// On bare metal this is typically the SysTick-driven HAL tick; on a host
/// it is [`SystemClock`](crate::time::SystemClock).
pub trait TickSource: Send + Sync {
    fn now(&self) -> Tick;
}

/// Shared handle to a tick source.
pub type ClockRef = Arc<dyn TickSource>;

/// Wall-clock tick source backed by [`std::time::Instant`].
///
/// Milliseconds since construction, truncated to `u32`; the truncation is
/// exactly the documented wrap.
#[cfg(feature = "std")]
pub struct SystemClock {
    epoch: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TickSource for SystemClock {
    fn now(&self) -> Tick {
        self.epoch.elapsed().as_millis() as Tick
    }
}

/// Hand-driven tick source for host tests and simulation.
#[derive(Default)]
pub struct ManualClock {
    ticks: AtomicU32,
}

impl ManualClock {
    /// Starts at tick zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts at an arbitrary tick, e.g. just below a wrap boundary.
    pub fn at(start: Tick) -> Self {
        Self {
            ticks: AtomicU32::new(start),
        }
    }

    pub fn set(&self, tick: Tick) {
        self.ticks.store(tick, Ordering::Relaxed);
    }

    /// Moves time forward; wraps like the real counter.
    pub fn advance(&self, ms: Tick) {
        self.ticks.fetch_add(ms, Ordering::Relaxed);
    }
}

impl TickSource for ManualClock {
    fn now(&self) -> Tick {
        self.ticks.load(Ordering::Relaxed)
    }
}

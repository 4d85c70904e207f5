//! Monotonic time sources for press gating.
//!
//! The press gate compares timestamps from a [`Clock`] rather than reading
//! wall time directly, so tests can drive time by hand with [`ManualClock`]
//! while production code uses [`SystemClock`].

use std::cell::Cell;
use std::time::Instant;

/// A monotonic millisecond clock.
///
/// Implementations must never go backwards. The zero point is arbitrary;
/// only differences between readings are meaningful.
pub trait Clock {
    /// Current monotonic time in milliseconds.
    fn now_millis(&self) -> u64;
}

/// Production clock backed by [`Instant`], anchored at construction.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock anchored at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for deterministic tests.
///
/// Single-threaded by design, matching the event-dispatch context the
/// interaction helpers run in.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<u64>,
}

impl ManualClock {
    /// Create a manual clock starting at `start_ms`.
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    /// Set the current time. Must not move backwards.
    pub fn set(&self, now_ms: u64) {
        debug_assert!(now_ms >= self.now_ms.get(), "ManualClock moved backwards");
        self.now_ms.set(now_ms);
    }

    /// Advance the current time by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now_ms.get()
    }
}

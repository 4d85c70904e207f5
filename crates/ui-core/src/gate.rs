//! Debounced press gate.
//!
//! A [`PressGate`] wraps a press handler so that repeated triggers inside a
//! configurable time window are dropped. Suppressed presses are never queued
//! or replayed; they simply do nothing.
//!
//! The bound action lives in a mutable single-slot holder so the owning
//! component can swap in a fresh closure on every render without resetting
//! the gate's timestamp state. The gate itself owns only the delay and the
//! last-fire timestamp.
//!
//! All calls happen on the UI event-dispatch context; there is no locking
//! and the gate is not re-entrant (an action must not trigger its own gate).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

use crate::clock::Clock;

/// Default suppression window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

type Action = Box<dyn FnMut()>;

/// Time-windowed press debouncer with a swappable action slot.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use ui_core::clock::ManualClock;
/// use ui_core::gate::PressGate;
///
/// let clock = Rc::new(ManualClock::new(0));
/// let gate = PressGate::new(1000, clock.clone());
/// gate.set_action(|| println!("pressed"));
///
/// assert!(gate.trigger());  // fires
/// clock.advance(500);
/// assert!(!gate.trigger()); // suppressed
/// clock.advance(500);
/// assert!(gate.trigger());  // window elapsed, fires again
/// ```
pub struct PressGate {
    delay_ms: u64,
    last_fire_ms: Cell<Option<u64>>,
    action: RefCell<Option<Action>>,
    clock: Rc<dyn Clock>,
}

impl PressGate {
    /// Create a gate with no action bound yet.
    ///
    /// A `delay_ms` of zero disables gating entirely: every trigger invokes
    /// the action.
    pub fn new(delay_ms: u64, clock: Rc<dyn Clock>) -> Self {
        Self {
            delay_ms,
            last_fire_ms: Cell::new(None),
            action: RefCell::new(None),
            clock,
        }
    }

    /// Create a gate with an action already bound.
    pub fn with_action(delay_ms: u64, clock: Rc<dyn Clock>, action: impl FnMut() + 'static) -> Self {
        let gate = Self::new(delay_ms, clock);
        gate.set_action(action);
        gate
    }

    /// Replace the bound action without touching the timestamp state.
    pub fn set_action(&self, action: impl FnMut() + 'static) {
        *self.action.borrow_mut() = Some(Box::new(action));
    }

    /// Remove the bound action. Subsequent triggers are silent no-ops.
    pub fn clear_action(&self) {
        *self.action.borrow_mut() = None;
    }

    /// Whether an action is currently bound.
    pub fn has_action(&self) -> bool {
        self.action.borrow().is_some()
    }

    /// The suppression window in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Fire the gate.
    ///
    /// Returns `true` if the action was invoked, `false` if the press was
    /// suppressed or no action is bound. The window boundary is inclusive:
    /// a trigger exactly `delay_ms` after the last fire fires again.
    pub fn trigger(&self) -> bool {
        if !self.has_action() {
            trace!("press ignored: no action bound");
            return false;
        }

        if self.delay_ms > 0 {
            let now = self.clock.now_millis();
            if let Some(last) = self.last_fire_ms.get() {
                let elapsed = now.saturating_sub(last);
                if elapsed < self.delay_ms {
                    trace!(elapsed, delay = self.delay_ms, "press suppressed");
                    return false;
                }
            }
            self.last_fire_ms.set(Some(now));
        }

        if let Some(action) = self.action.borrow_mut().as_mut() {
            action();
        }
        true
    }
}

impl std::fmt::Debug for PressGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PressGate")
            .field("delay_ms", &self.delay_ms)
            .field("last_fire_ms", &self.last_fire_ms.get())
            .field("has_action", &self.has_action())
            .finish()
    }
}

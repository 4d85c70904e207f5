//! Timed active/inactive transition.
//!
//! Tracks a boolean active state and animates a progress value between
//! `0.0` (inactive) and `1.0` (active) over a fixed duration. Visual
//! properties such as tint, label color, and scale interpolate against
//! this progress.

use std::cell::Cell;

use crate::animation::{ease_in_out_quad, AnimatedValue, EasingFn};

/// Default duration of the active transition, in milliseconds.
pub const DEFAULT_ACTIVE_DURATION_MS: u32 = 200;

/// Animates progress between inactive (0.0) and active (1.0).
pub struct ActiveTransition {
    progress: AnimatedValue,
    duration_ms: u32,
    easing: EasingFn,
    active: Cell<bool>,
}

impl ActiveTransition {
    /// Creates an inactive transition with progress at rest at `0.0`.
    pub fn new(duration_ms: u32) -> Self {
        Self::with_state(duration_ms, false)
    }

    /// Creates a transition already settled in the given state.
    pub fn with_state(duration_ms: u32, active: bool) -> Self {
        Self {
            progress: AnimatedValue::new(if active { 1.0 } else { 0.0 }),
            duration_ms,
            easing: ease_in_out_quad,
            active: Cell::new(active),
        }
    }

    /// Replaces the easing curve used for both directions.
    pub fn with_easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the active state, starting a transition when it changes.
    ///
    /// Setting the state it already holds is a no-op, so repeated
    /// activation does not restart a settled animation.
    pub fn set_active(&self, active: bool) {
        if self.active.get() == active {
            return;
        }
        self.active.set(active);
        let target = if active { 1.0 } else { 0.0 };
        self.progress.timed_to(target, self.duration_ms, self.easing);
    }

    /// The current logical state.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// The current progress in `[0.0, 1.0]`.
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    /// The configured transition duration in milliseconds.
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Advances the transition. Returns `true` while still in flight.
    pub fn tick(&self, dt_ms: f32) -> bool {
        self.progress.tick(dt_ms)
    }

    /// Cancels any in-flight transition, leaving progress where it is.
    pub fn stop(&self) {
        self.progress.stop();
    }
}

impl std::fmt::Debug for ActiveTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveTransition")
            .field("active", &self.active.get())
            .field("progress", &self.progress.value())
            .field("duration_ms", &self.duration_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::linear;

    #[test]
    fn test_initial_state_is_settled() {
        let inactive = ActiveTransition::new(DEFAULT_ACTIVE_DURATION_MS);
        assert!(!inactive.is_active());
        assert_eq!(inactive.progress(), 0.0);

        let active = ActiveTransition::with_state(DEFAULT_ACTIVE_DURATION_MS, true);
        assert!(active.is_active());
        assert_eq!(active.progress(), 1.0);
    }

    #[test]
    fn test_activation_completes_in_duration() {
        let transition = ActiveTransition::new(200).with_easing(linear);
        transition.set_active(true);
        assert!(transition.tick(100.0));
        assert!((transition.progress() - 0.5).abs() < 1e-6);
        assert!(!transition.tick(100.0));
        assert_eq!(transition.progress(), 1.0);
    }

    #[test]
    fn test_deactivation_runs_back_to_zero() {
        let transition = ActiveTransition::with_state(200, true).with_easing(linear);
        transition.set_active(false);
        while transition.tick(16.0) {}
        assert_eq!(transition.progress(), 0.0);
    }

    #[test]
    fn test_redundant_set_active_does_not_restart() {
        let transition = ActiveTransition::with_state(200, true);
        transition.set_active(true);
        assert!(!transition.tick(16.0));
        assert_eq!(transition.progress(), 1.0);
    }

    #[test]
    fn test_reversal_mid_flight_starts_from_current_progress() {
        let transition = ActiveTransition::new(200).with_easing(linear);
        transition.set_active(true);
        transition.tick(100.0);
        let midway = transition.progress();
        transition.set_active(false);
        transition.tick(50.0);
        assert!(transition.progress() < midway);
        while transition.tick(16.0) {}
        assert_eq!(transition.progress(), 0.0);
    }
}

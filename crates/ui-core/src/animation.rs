//! Frame-driven animated values.
//!
//! An [`AnimatedValue`] holds a single scalar and advances it toward a
//! target when [`AnimatedValue::tick`] is called with the elapsed frame
//! time. Two drivers are supported: a damped spring and a fixed-duration
//! eased timing curve. Values are single-threaded and use interior
//! mutability so that shared handles can observe and drive the same
//! animation without locks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

// ============================================================================
// Interpolation
// ============================================================================

/// Linear interpolation between two values of the same type.
pub trait Lerp {
    /// Interpolates from `self` toward `other` by factor `t` in `[0, 1]`.
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for f64 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t as f64
    }
}

// ============================================================================
// Easing
// ============================================================================

/// An easing curve mapping normalized time `[0, 1]` to progress `[0, 1]`.
pub type EasingFn = fn(f32) -> f32;

/// Constant-rate progress.
pub fn linear(t: f32) -> f32 {
    t
}

/// Accelerating from zero velocity.
pub fn ease_in_quad(t: f32) -> f32 {
    t * t
}

/// Decelerating to zero velocity.
pub fn ease_out_quad(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Acceleration until halfway, then deceleration.
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

// ============================================================================
// Spring configuration
// ============================================================================

/// Physical parameters for the spring driver.
///
/// The defaults produce a quick, slightly bouncy settle suitable for
/// press feedback: underdamped, with a small overshoot, converging well
/// under a second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Spring stiffness coefficient.
    pub stiffness: f32,
    /// Damping coefficient.
    pub damping: f32,
    /// Mass of the animated point.
    pub mass: f32,
    /// Displacement from target below which the spring may come to rest.
    pub rest_displacement: f32,
    /// Velocity magnitude below which the spring may come to rest.
    pub rest_velocity: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 520.0,
            damping: 30.0,
            mass: 1.0,
            rest_displacement: 0.001,
            rest_velocity: 0.005,
        }
    }
}

// ============================================================================
// Drivers
// ============================================================================

enum Driver {
    Spring {
        config: SpringConfig,
        target: f32,
        /// Units per second.
        velocity: f32,
    },
    Timed {
        duration_ms: f32,
        elapsed_ms: f32,
        from: f32,
        target: f32,
        easing: EasingFn,
    },
}

impl Driver {
    fn target(&self) -> f32 {
        match self {
            Driver::Spring { target, .. } => *target,
            Driver::Timed { target, .. } => *target,
        }
    }
}

// ============================================================================
// AnimatedValue
// ============================================================================

/// Identifies a change subscription on an [`AnimatedValue`].
pub type SubscriptionId = u64;

/// A scalar value that can be animated toward a target.
///
/// The value only changes inside [`AnimatedValue::tick`] (or when a
/// zero-duration animation or [`AnimatedValue::set`] applies a value
/// immediately). Subscribers registered with
/// [`AnimatedValue::subscribe`] are notified whenever the value changes.
pub struct AnimatedValue {
    current: Cell<f32>,
    driver: RefCell<Option<Driver>>,
    subscribers: RefCell<Vec<(SubscriptionId, Rc<dyn Fn(f32)>)>>,
    next_subscription: Cell<SubscriptionId>,
}

impl AnimatedValue {
    /// Creates a value at rest at `initial`.
    pub fn new(initial: f32) -> Self {
        Self {
            current: Cell::new(initial),
            driver: RefCell::new(None),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    /// The current value.
    pub fn value(&self) -> f32 {
        self.current.get()
    }

    /// The target of the in-flight animation, if any.
    pub fn target(&self) -> Option<f32> {
        self.driver.borrow().as_ref().map(Driver::target)
    }

    /// Whether an animation is currently in flight.
    pub fn is_animating(&self) -> bool {
        self.driver.borrow().is_some()
    }

    /// Sets the value immediately, cancelling any in-flight animation.
    pub fn set(&self, value: f32) {
        *self.driver.borrow_mut() = None;
        self.set_and_notify(value);
    }

    /// Starts (or redirects) a spring animation toward `target`.
    ///
    /// If a spring is already in flight its velocity carries over, so a
    /// redirect mid-animation stays continuous. Any timed animation is
    /// replaced and its implied velocity discarded.
    pub fn spring_to(&self, target: f32, config: SpringConfig) {
        let velocity = match &*self.driver.borrow() {
            Some(Driver::Spring { velocity, .. }) => *velocity,
            _ => 0.0,
        };
        trace!(from = self.current.get(), target, "spring animation started");
        *self.driver.borrow_mut() = Some(Driver::Spring {
            config,
            target,
            velocity,
        });
    }

    /// Starts a timed animation toward `target` over `duration_ms`,
    /// shaped by `easing`.
    ///
    /// The animation always restarts from the current value. A zero
    /// duration applies the target immediately.
    pub fn timed_to(&self, target: f32, duration_ms: u32, easing: EasingFn) {
        if duration_ms == 0 {
            self.set(target);
            return;
        }
        trace!(
            from = self.current.get(),
            target,
            duration_ms,
            "timed animation started"
        );
        *self.driver.borrow_mut() = Some(Driver::Timed {
            duration_ms: duration_ms as f32,
            elapsed_ms: 0.0,
            from: self.current.get(),
            target,
            easing,
        });
    }

    /// Cancels any in-flight animation, leaving the value where it is.
    pub fn stop(&self) {
        *self.driver.borrow_mut() = None;
    }

    /// Registers a callback invoked whenever the value changes.
    ///
    /// Callbacks may subscribe or unsubscribe during notification. A
    /// callback added mid-notification first runs on the next change,
    /// and one removed mid-notification may still observe the change
    /// being delivered.
    pub fn subscribe(&self, callback: impl Fn(f32) + 'static) -> SubscriptionId {
        let id = self.next_subscription.get();
        self.next_subscription.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Removes a previously registered callback.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    /// Advances the animation by `dt_ms` milliseconds of frame time.
    ///
    /// Returns `true` if an animation is still in flight afterwards.
    pub fn tick(&self, dt_ms: f32) -> bool {
        if dt_ms <= 0.0 {
            return self.is_animating();
        }
        let mut driver = self.driver.borrow_mut();
        let Some(active) = driver.as_mut() else {
            return false;
        };
        let (next, done) = match active {
            Driver::Timed {
                duration_ms,
                elapsed_ms,
                from,
                target,
                easing,
            } => {
                *elapsed_ms += dt_ms;
                let t = (*elapsed_ms / *duration_ms).min(1.0);
                if t >= 1.0 {
                    (*target, true)
                } else {
                    (from.lerp(target, easing(t)), false)
                }
            }
            Driver::Spring {
                config,
                target,
                velocity,
            } => {
                // Integrate in ~1ms substeps for stability at large dt.
                let steps = dt_ms.ceil().max(1.0) as u32;
                let h = dt_ms / steps as f32 / 1000.0;
                let mut position = self.current.get();
                for _ in 0..steps {
                    let displacement = position - *target;
                    let accel = (-config.stiffness * displacement
                        - config.damping * *velocity)
                        / config.mass;
                    *velocity += accel * h;
                    position += *velocity * h;
                }
                let at_rest = (position - *target).abs() < config.rest_displacement
                    && velocity.abs() < config.rest_velocity;
                if at_rest {
                    (*target, true)
                } else {
                    (position, false)
                }
            }
        };
        if done {
            *driver = None;
        }
        drop(driver);
        self.set_and_notify(next);
        !done
    }

    fn set_and_notify(&self, value: f32) {
        if self.current.get() == value {
            return;
        }
        self.current.set(value);
        // Notify from a snapshot so callbacks can subscribe or
        // unsubscribe without hitting the live borrow.
        let snapshot: Vec<Rc<dyn Fn(f32)>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            callback(value);
        }
    }
}

impl std::fmt::Debug for AnimatedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedValue")
            .field("current", &self.current.get())
            .field("animating", &self.is_animating())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn run_to_rest(value: &AnimatedValue, dt_ms: f32, max_ms: f32) -> f32 {
        let mut elapsed = 0.0;
        while value.tick(dt_ms) {
            elapsed += dt_ms;
            assert!(elapsed <= max_ms, "animation did not settle in {max_ms}ms");
        }
        elapsed + dt_ms
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(0.0f32.lerp(&10.0, 0.0), 0.0);
        assert_eq!(0.0f32.lerp(&10.0, 1.0), 10.0);
        assert_eq!(0.0f32.lerp(&10.0, 0.5), 5.0);
        assert_eq!(2.0f64.lerp(&4.0, 0.25), 2.5);
    }

    #[test]
    fn test_easing_curves_preserve_endpoints() {
        for easing in [linear, ease_in_quad, ease_out_quad, ease_in_out_quad] {
            assert_eq!(easing(0.0), 0.0);
            assert_eq!(easing(1.0), 1.0);
        }
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert!(ease_in_quad(0.5) < 0.5);
        assert!(ease_out_quad(0.5) > 0.5);
    }

    #[test]
    fn test_timed_animation_follows_curve() {
        let value = AnimatedValue::new(0.0);
        value.timed_to(1.0, 200, linear);
        assert!(value.is_animating());
        assert!(value.tick(100.0));
        assert!((value.value() - 0.5).abs() < 1e-6);
        assert!(!value.tick(100.0));
        assert_eq!(value.value(), 1.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_timed_animation_snaps_past_duration() {
        let value = AnimatedValue::new(0.0);
        value.timed_to(1.0, 200, ease_in_out_quad);
        assert!(!value.tick(350.0));
        assert_eq!(value.value(), 1.0);
    }

    #[test]
    fn test_zero_duration_applies_immediately() {
        let value = AnimatedValue::new(0.3);
        value.timed_to(1.0, 0, linear);
        assert_eq!(value.value(), 1.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_spring_settles_at_target() {
        let value = AnimatedValue::new(1.0);
        value.spring_to(0.95, SpringConfig::default());
        let settle = run_to_rest(&value, 16.0, 1000.0);
        assert_eq!(value.value(), 0.95);
        assert!(settle < 1000.0);
    }

    #[test]
    fn test_spring_redirect_carries_velocity() {
        let value = AnimatedValue::new(1.0);
        value.spring_to(0.5, SpringConfig::default());
        for _ in 0..4 {
            value.tick(16.0);
        }
        let mid = value.value();
        assert!(mid < 1.0 && mid > 0.5);
        value.spring_to(1.0, SpringConfig::default());
        run_to_rest(&value, 16.0, 1500.0);
        assert_eq!(value.value(), 1.0);
    }

    #[test]
    fn test_stop_freezes_value() {
        let value = AnimatedValue::new(0.0);
        value.timed_to(1.0, 200, linear);
        value.tick(50.0);
        let frozen = value.value();
        value.stop();
        assert!(!value.tick(100.0));
        assert_eq!(value.value(), frozen);
    }

    #[test]
    fn test_subscribers_see_changes() {
        let value = AnimatedValue::new(0.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = value.subscribe(move |v| sink.borrow_mut().push(v));
        value.timed_to(1.0, 100, linear);
        value.tick(50.0);
        value.tick(50.0);
        assert_eq!(seen.borrow().as_slice(), &[0.5, 1.0]);
        value.unsubscribe(id);
        value.set(0.0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_subscriber_may_register_another_during_notification() {
        let value = Rc::new(AnimatedValue::new(0.0));
        let late_calls = Rc::new(Cell::new(0u32));

        let handle = Rc::clone(&value);
        let late = Rc::clone(&late_calls);
        value.subscribe(move |_| {
            let inner = Rc::clone(&late);
            handle.subscribe(move |_| inner.set(inner.get() + 1));
        });

        value.set(1.0);
        // The mid-notification registration only sees later changes.
        assert_eq!(late_calls.get(), 0);
        value.set(2.0);
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_subscriber_may_unsubscribe_itself_during_notification() {
        let value = Rc::new(AnimatedValue::new(0.0));
        let calls = Rc::new(Cell::new(0u32));

        let handle = Rc::clone(&value);
        let counter = Rc::clone(&calls);
        let id = Rc::new(Cell::new(0));
        let id_slot = Rc::clone(&id);
        let subscription = value.subscribe(move |_| {
            counter.set(counter.get() + 1);
            handle.unsubscribe(id_slot.get());
        });
        id.set(subscription);

        value.set(1.0);
        value.set(2.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_tick_without_driver_is_noop() {
        let value = AnimatedValue::new(0.7);
        assert!(!value.tick(16.0));
        assert_eq!(value.value(), 0.7);
    }

    #[test]
    fn test_target_reports_in_flight_destination() {
        let value = AnimatedValue::new(0.0);
        assert_eq!(value.target(), None);
        value.spring_to(0.95, SpringConfig::default());
        assert_eq!(value.target(), Some(0.95));
    }
}

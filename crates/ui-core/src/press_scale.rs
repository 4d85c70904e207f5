//! Spring-driven press feedback.
//!
//! Shrinks a scale factor toward a pressed value while a press is held
//! and springs it back to rest on release.

use crate::animation::{AnimatedValue, SpringConfig};

/// Scale applied when no press is in progress.
pub const REST_SCALE: f32 = 1.0;

/// Default scale applied while a press is held.
pub const DEFAULT_PRESSED_SCALE: f32 = 0.95;

/// Drives a scale factor in response to press gestures.
///
/// Both transitions use the same spring, so a release mid-press-in
/// redirects the animation smoothly instead of snapping.
#[derive(Debug)]
pub struct PressScale {
    scale: AnimatedValue,
    pressed_scale: f32,
    spring: SpringConfig,
}

impl PressScale {
    /// Creates a controller at rest with the default pressed scale.
    pub fn new() -> Self {
        Self {
            scale: AnimatedValue::new(REST_SCALE),
            pressed_scale: DEFAULT_PRESSED_SCALE,
            spring: SpringConfig::default(),
        }
    }

    /// Creates a controller that shrinks to `pressed_scale` while held.
    pub fn with_pressed_scale(pressed_scale: f32) -> Self {
        Self {
            pressed_scale,
            ..Self::new()
        }
    }

    /// Replaces the spring parameters used for both transitions.
    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// The scale the controller animates to while a press is held.
    pub fn pressed_scale(&self) -> f32 {
        self.pressed_scale
    }

    /// Begins the press-in animation toward the pressed scale.
    pub fn on_press_start(&self) {
        self.scale.spring_to(self.pressed_scale, self.spring);
    }

    /// Begins the release animation back to the rest scale.
    pub fn on_press_end(&self) {
        self.scale.spring_to(REST_SCALE, self.spring);
    }

    /// The current scale factor.
    pub fn value(&self) -> f32 {
        self.scale.value()
    }

    /// The underlying animated value, for subscribing to changes.
    pub fn animated(&self) -> &AnimatedValue {
        &self.scale
    }

    /// Advances the animation. Returns `true` while still in flight.
    pub fn tick(&self, dt_ms: f32) -> bool {
        self.scale.tick(dt_ms)
    }

    /// Cancels any in-flight animation.
    pub fn stop(&self) {
        self.scale.stop();
    }
}

impl Default for PressScale {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(scale: &PressScale) {
        let mut elapsed = 0.0;
        while scale.tick(16.0) {
            elapsed += 16.0;
            assert!(elapsed < 2000.0, "press scale did not settle");
        }
    }

    #[test]
    fn test_press_in_reaches_pressed_scale() {
        let scale = PressScale::new();
        assert_eq!(scale.value(), REST_SCALE);
        scale.on_press_start();
        settle(&scale);
        assert_eq!(scale.value(), DEFAULT_PRESSED_SCALE);
    }

    #[test]
    fn test_release_returns_to_rest() {
        let scale = PressScale::new();
        scale.on_press_start();
        settle(&scale);
        scale.on_press_end();
        settle(&scale);
        assert_eq!(scale.value(), REST_SCALE);
    }

    #[test]
    fn test_release_mid_press_redirects() {
        let scale = PressScale::new();
        scale.on_press_start();
        for _ in 0..3 {
            scale.tick(16.0);
        }
        assert!(scale.value() < REST_SCALE);
        scale.on_press_end();
        settle(&scale);
        assert_eq!(scale.value(), REST_SCALE);
    }

    #[test]
    fn test_custom_pressed_scale() {
        let scale = PressScale::with_pressed_scale(0.9);
        assert_eq!(scale.pressed_scale(), 0.9);
        scale.on_press_start();
        settle(&scale);
        assert_eq!(scale.value(), 0.9);
    }
}

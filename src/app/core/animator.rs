//! Time-based tween that carries a released carousel onto its snap point.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Curve of the snap animation, configurable as `[gesture] easing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Advanced by explicit `dt` so callers (and tests) own the clock.
#[derive(Debug, Clone, Default)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl SnapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn start(&mut self, current: f32, target: f32, duration: Duration, easing: Easing) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.duration = duration;
        self.easing = easing;
    }

    /// Returns the next offset while animating. The call that reaches the end
    /// returns exactly `target` and leaves the animator inactive.
    pub fn tick(&mut self, dt: Duration) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    /// Scale both endpoints, used when the page width changes mid-flight.
    pub fn rescale(&mut self, ratio: f32) {
        self.start *= ratio;
        self.target *= ratio;
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_target_exactly_and_stops() {
        let mut a = SnapAnimator::new();
        a.start(0.0, 100.0, Duration::from_millis(200), Easing::Linear);
        let mid = a.tick(Duration::from_millis(100)).unwrap();
        assert!((mid - 50.0).abs() < 1e-3);
        assert_eq!(a.tick(Duration::from_millis(150)), Some(100.0));
        assert!(!a.is_active());
        assert_eq!(a.tick(Duration::from_millis(16)), None);
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut a = SnapAnimator::new();
        a.start(10.0, -20.0, Duration::ZERO, Easing::EaseOut);
        assert_eq!(a.tick(Duration::ZERO), Some(-20.0));
        assert!(!a.is_active());
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    }
}

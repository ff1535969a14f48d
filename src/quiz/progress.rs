//! Animated progress indicator.
//!
//! A continuous value that chases a discrete target. Time is always passed
//! in explicitly so the interpolation is deterministic under test; callers
//! supply `Instant::now()`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Default time for the bar to reach a new target.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

/// Easing curves for the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start and end.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear time `t` in [0, 1] onto the curve. Input is clamped.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A value animating from `from` to `to` over `duration`, starting at
/// `started_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressIndicator {
    from: f64,
    to: f64,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl ProgressIndicator {
    /// A bar resting at zero.
    pub fn new(duration: Duration, easing: Easing, now: Instant) -> Self {
        ProgressIndicator {
            from: 0.0,
            to: 0.0,
            started_at: now,
            duration,
            easing,
        }
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Value at `now` scaled into [0, 1] against `len` steps.
    pub fn fraction_at(&self, now: Instant, len: usize) -> f64 {
        if len == 0 {
            return 0.0;
        }
        (self.value_at(now) / len as f64).clamp(0.0, 1.0)
    }

    /// Head for a new target, continuing from wherever the bar is now.
    pub fn retarget(&mut self, target: usize, now: Instant) {
        self.from = self.value_at(now);
        self.to = target as f64;
        self.started_at = now;
    }

    /// Whether the bar is still moving at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) < self.duration && self.from != self.to
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn linear(now: Instant) -> ProgressIndicator {
        ProgressIndicator::new(Duration::from_millis(1000), Easing::Linear, now)
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert!((easing.apply(0.0)).abs() < EPS);
            assert!((easing.apply(1.0) - 1.0).abs() < EPS);
            assert!((easing.apply(0.5) - 0.5).abs() < EPS);
        }
    }

    #[test]
    fn easing_clamps_input() {
        assert_eq!(Easing::EaseInOut.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn ease_in_out_starts_slow() {
        assert!(Easing::EaseInOut.apply(0.1) < Easing::Linear.apply(0.1));
        assert!(Easing::EaseInOut.apply(0.9) > Easing::Linear.apply(0.9));
    }

    #[test]
    fn starts_at_rest_on_zero() {
        let t0 = Instant::now();
        let bar = linear(t0);
        assert_eq!(bar.value_at(t0), 0.0);
        assert!(!bar.is_animating(t0));
    }

    #[test]
    fn interpolates_linearly_towards_target() {
        let t0 = Instant::now();
        let mut bar = linear(t0);
        bar.retarget(2, t0);
        assert!(bar.is_animating(t0));
        assert!((bar.value_at(t0 + Duration::from_millis(250)) - 0.5).abs() < EPS);
        assert!((bar.value_at(t0 + Duration::from_millis(500)) - 1.0).abs() < EPS);
        assert_eq!(bar.value_at(t0 + Duration::from_millis(1000)), 2.0);
        assert_eq!(bar.value_at(t0 + Duration::from_secs(5)), 2.0);
        assert!(!bar.is_animating(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn retarget_mid_flight_continues_from_current_value() {
        let t0 = Instant::now();
        let mut bar = linear(t0);
        bar.retarget(1, t0);

        let t1 = t0 + Duration::from_millis(500);
        bar.retarget(2, t1);
        // picks up at 0.5, not 0 and not 1
        assert!((bar.value_at(t1) - 0.5).abs() < EPS);
        assert!((bar.value_at(t1 + Duration::from_millis(500)) - 1.25).abs() < EPS);
        assert_eq!(bar.value_at(t1 + Duration::from_millis(1000)), 2.0);
    }

    #[test]
    fn retarget_to_zero_animates_back() {
        let t0 = Instant::now();
        let mut bar = linear(t0);
        bar.retarget(4, t0);
        let t1 = t0 + Duration::from_secs(2);
        bar.retarget(0, t1);
        assert_eq!(bar.value_at(t1), 4.0);
        assert!((bar.value_at(t1 + Duration::from_millis(500)) - 2.0).abs() < EPS);
        assert_eq!(bar.value_at(t1 + Duration::from_millis(1000)), 0.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let t0 = Instant::now();
        let mut bar = ProgressIndicator::new(Duration::ZERO, Easing::EaseInOut, t0);
        bar.retarget(3, t0);
        assert_eq!(bar.value_at(t0), 3.0);
        assert!(!bar.is_animating(t0));
    }

    #[test]
    fn fraction_scales_by_length() {
        let t0 = Instant::now();
        let mut bar = linear(t0);
        bar.retarget(2, t0);
        let done = t0 + Duration::from_secs(1);
        assert!((bar.fraction_at(done, 4) - 0.5).abs() < EPS);
        assert_eq!(bar.fraction_at(done, 0), 0.0);
    }
}

use std::time::Duration;

pub const WRAPPER_THRESHOLD: f64 = 0.05;
pub const CONTENT_THRESHOLD: f64 = 0.12;
pub const GRID_THRESHOLD: f64 = 0.15;

/// One-shot latch fed with intersection ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTracker {
    threshold: f64,
    seen: bool,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            seen: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn has_been_seen(&self) -> bool {
        self.seen
    }

    /// Records an observation. Returns true only on the observation that
    /// revealed the element.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.seen {
            return false;
        }
        // a zero threshold still needs some part of the element on screen
        if ratio > 0.0 && ratio >= self.threshold {
            self.seen = true;
            return true;
        }
        false
    }
}

/// Entrance delay for the `index`th item of a staggered group.
pub fn stagger(base: Duration, step: Duration, index: usize) -> Duration {
    base + step * index as u32
}

pub fn stagger_css(base: Duration, step: Duration, index: usize) -> String {
    format!("{}ms", stagger(base, step, index).as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker = RevealTracker::new(WRAPPER_THRESHOLD);
        assert!(!tracker.has_been_seen());

        assert!(!tracker.observe(0.01));
        assert!(tracker.observe(0.2));
        assert!(tracker.has_been_seen());

        // scrolled back out and in again
        for ratio in [0.0, 0.0, 0.5, 1.0, 0.0] {
            assert!(!tracker.observe(ratio));
            assert!(tracker.has_been_seen());
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut tracker = RevealTracker::new(0.15);
        assert!(!tracker.observe(0.149));
        assert!(tracker.observe(0.15));
    }

    #[test]
    fn test_zero_threshold_needs_some_visibility() {
        let mut tracker = RevealTracker::new(0.0);
        assert!(!tracker.observe(0.0));
        assert!(tracker.observe(0.001));
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealTracker::new(3.0).threshold(), 1.0);
        assert_eq!(RevealTracker::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealTracker::new(f64::NAN).threshold(), 0.0);
    }

    #[test]
    fn test_stagger() {
        let base = Duration::from_millis(300);
        let step = Duration::from_millis(100);
        assert_eq!(stagger(base, step, 0), base);
        assert_eq!(stagger(base, step, 3), Duration::from_millis(600));
        assert_eq!(stagger_css(Duration::ZERO, Duration::from_millis(50), 4), "200ms");
    }
}

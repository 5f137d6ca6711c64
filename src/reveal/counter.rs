//! Animated numeric counter.
//!
//! Interpolates linearly from a starting value to a target over a fixed
//! number of ticks. Retargeting mid-animation restarts from the currently
//! displayed value, so the number never jumps.

/// Count-up animation toward a target value.
#[derive(Debug, Clone)]
pub struct CountUp {
    start: f64,
    target: f64,
    elapsed: u32,
    duration: u32,
    precision: usize,
    prefix: String,
    suffix: String,
}

impl CountUp {
    /// Animate from 0 to `target` over `duration` ticks.
    pub fn new(target: f64, duration: u32) -> Self {
        Self {
            start: 0.0,
            target,
            elapsed: 0,
            duration,
            precision: 0,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Decimal places used by [`format`](Self::format).
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Restart the animation from the current displayed value toward a new
    /// target.
    pub fn retarget(&mut self, target: f64) {
        self.start = self.value();
        self.target = target;
        self.elapsed = 0;
    }

    /// Advance the animation by one tick.
    pub fn on_tick(&mut self) {
        if self.elapsed < self.duration {
            self.elapsed += 1;
        }
    }

    /// The value displayed this tick.
    pub fn value(&self) -> f64 {
        if self.duration == 0 || self.elapsed >= self.duration {
            return self.target;
        }
        let t = f64::from(self.elapsed) / f64::from(self.duration);
        self.start + (self.target - self.start) * t
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// The value formatted with precision, prefix, and suffix.
    pub fn format(&self) -> String {
        format!(
            "{}{:.*}{}",
            self.prefix,
            self.precision,
            self.value(),
            self.suffix
        )
    }
}

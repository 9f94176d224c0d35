#![forbid(unsafe_code)]

//! Eased stat count-up.
//!
//! A fixed-duration ramp from zero to a target integer, re-rendered every
//! display frame while a stat element animates into view. Progress is the
//! linear time fraction clamped to `[0, 1]`; the displayed value is the
//! eased fraction times the target, rounded. The default curve is
//! [`ease_out_cubic`], so the count races up early and settles gently.

use core::time::Duration;

use crate::easing::{EasingFn, ease_out_cubic};

/// Ramp duration used by the stat counters.
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(1800);

/// Suffix appended to the rendered value when none is configured.
pub const DEFAULT_SUFFIX: &str = "+";

/// Tick-driven eased count-up toward a fixed target.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    suffix: String,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl CountUp {
    /// Ramp to `target` over [`COUNT_UP_DURATION`] with the default suffix.
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self {
            target,
            suffix: DEFAULT_SUFFIX.to_owned(),
            duration: COUNT_UP_DURATION,
            elapsed: Duration::ZERO,
            easing: ease_out_cubic,
        }
    }

    /// Replace the rendered suffix (builder-style).
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Replace the ramp duration (builder-style).
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Replace the easing curve (builder-style).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Advance the ramp by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Linear time fraction in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Currently displayed integer value.
    #[must_use]
    pub fn value(&self) -> u64 {
        let eased = f64::from((self.easing)(self.progress()));
        (eased * self.target as f64).round() as u64
    }

    /// Rendered text: the value followed by the suffix.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.value(), self.suffix)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Rewind to the start of the ramp.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

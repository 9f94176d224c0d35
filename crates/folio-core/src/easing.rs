#![forbid(unsafe_code)]

//! Easing curves for time-based animation.
//!
//! Progress in, progress out: every curve maps a linear time fraction in
//! `[0, 1]` to an eased fraction in `[0, 1]`. Inputs outside the unit
//! interval are clamped so callers can tick past an animation's end without
//! overshooting the final value.

/// Easing function type: maps linear progress `[0, 1]` to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// Linear easing (no transformation).
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Cubic ease-out: fast start, decelerating finish.
///
/// This is the stat counter's ramp: `1 - (1 - t)^3`.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [linear, ease_out_cubic] {
            assert_eq!(easing(0.0), 0.0);
            assert_eq!(easing(1.0), 1.0);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for easing in [linear, ease_out_cubic] {
            assert_eq!(easing(-3.0), 0.0);
            assert_eq!(easing(42.0), 1.0);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in [linear, ease_out_cubic] {
            let mut prev = 0.0f32;
            for i in 0..=100 {
                let v = easing(i as f32 / 100.0);
                assert!(v >= prev - 0.001, "non-monotonic at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn ease_out_cubic_leads_linear() {
        // Deceleration means the eased value stays at or above the linear one.
        for i in 1..100 {
            let t = i as f32 / 100.0;
            assert!(ease_out_cubic(t) >= linear(t));
        }
    }
}

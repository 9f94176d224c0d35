#![forbid(unsafe_code)]

//! Scroll-position thresholds with change detection.
//!
//! Two behaviors hang off the page scroll offset: the navbar grows a
//! `scrolled` style class past a shallow threshold, and the back-to-top
//! button becomes visible past a deep one. Scroll events arrive in floods,
//! so the watcher reports edges rather than levels: the host only touches
//! the DOM when a flag actually changes (the first observation always
//! reports, to establish the initial classes).

/// Scroll offset (px) beyond which the navbar takes its `scrolled` style.
pub const NAVBAR_THRESHOLD: f64 = 60.0;

/// Scroll offset (px) beyond which the back-to-top control shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

/// Flag transitions produced by one scroll observation.
///
/// `None` means "unchanged since the last observation".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollChange {
    pub navbar_scrolled: Option<bool>,
    pub back_to_top_visible: Option<bool>,
}

impl ScrollChange {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.navbar_scrolled.is_none() && self.back_to_top_visible.is_none()
    }
}

/// Edge-detecting watcher over the page scroll offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollWatcher {
    navbar_scrolled: bool,
    back_to_top_visible: bool,
    primed: bool,
}

impl ScrollWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current scroll offset; get back the flags that changed.
    pub fn observe(&mut self, offset: f64) -> ScrollChange {
        let navbar = offset > NAVBAR_THRESHOLD;
        let back_to_top = offset > BACK_TO_TOP_THRESHOLD;
        let change = ScrollChange {
            navbar_scrolled: (!self.primed || navbar != self.navbar_scrolled).then_some(navbar),
            back_to_top_visible: (!self.primed || back_to_top != self.back_to_top_visible)
                .then_some(back_to_top),
        };
        self.navbar_scrolled = navbar;
        self.back_to_top_visible = back_to_top;
        self.primed = true;
        change
    }

    #[must_use]
    pub const fn navbar_scrolled(&self) -> bool {
        self.navbar_scrolled
    }

    #[must_use]
    pub const fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_reports_both_flags() {
        let mut watcher = ScrollWatcher::new();
        let change = watcher.observe(0.0);
        assert_eq!(change.navbar_scrolled, Some(false));
        assert_eq!(change.back_to_top_visible, Some(false));
    }

    #[test]
    fn thresholds_are_strictly_greater_than() {
        let mut watcher = ScrollWatcher::new();
        watcher.observe(0.0);

        assert!(watcher.observe(60.0).is_empty(), "60 is not past the navbar threshold");
        assert_eq!(watcher.observe(60.1).navbar_scrolled, Some(true));

        assert!(watcher.observe(500.0).back_to_top_visible.is_none());
        assert_eq!(watcher.observe(500.1).back_to_top_visible, Some(true));
    }

    #[test]
    fn unchanged_levels_report_nothing() {
        let mut watcher = ScrollWatcher::new();
        watcher.observe(0.0);
        for offset in [10.0, 20.0, 59.0, 3.0] {
            assert!(watcher.observe(offset).is_empty());
        }
    }

    #[test]
    fn crossing_back_down_reports_the_drop() {
        let mut watcher = ScrollWatcher::new();
        watcher.observe(800.0);
        let change = watcher.observe(30.0);
        assert_eq!(change.navbar_scrolled, Some(false));
        assert_eq!(change.back_to_top_visible, Some(false));
    }

    #[test]
    fn deep_scroll_sets_both_flags() {
        let mut watcher = ScrollWatcher::new();
        let change = watcher.observe(1500.0);
        assert_eq!(change.navbar_scrolled, Some(true));
        assert_eq!(change.back_to_top_visible, Some(true));
        assert!(watcher.navbar_scrolled());
        assert!(watcher.back_to_top_visible());
    }

    #[test]
    fn mid_range_shows_navbar_only() {
        let mut watcher = ScrollWatcher::new();
        watcher.observe(0.0);
        let change = watcher.observe(250.0);
        assert_eq!(change.navbar_scrolled, Some(true));
        assert!(change.back_to_top_visible.is_none());
    }
}

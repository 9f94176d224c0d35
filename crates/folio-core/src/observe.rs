#![forbid(unsafe_code)]

//! Visibility-observation contracts.
//!
//! Three behaviors watch elements entering the viewport, with two distinct
//! firing contracts:
//!
//! - **Reveal** and **stat counters** fire at most once per element and then
//!   unsubscribe. [`RevealGate`] latches that contract in the engine so a
//!   host that forgets to unobserve still cannot double-fire.
//! - **Active-section tracking** fires repeatedly as the user scrolls
//!   between sections; [`SectionTracker`] keeps the current section and
//!   reports changes.
//!
//! The observer profiles (threshold, root margin, policy) live here as data
//! so the host builds its platform observers from one source of truth.

use core::time::Duration;

/// How often a qualifying intersection may fire its callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirePolicy {
    /// At most once per element; unsubscribe after the first firing.
    Once,
    /// Every qualifying intersection, for the life of the page.
    Repeat,
}

/// Platform-observer construction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverProfile {
    /// Visibility fraction that must be crossed.
    pub threshold: f32,
    /// Root margin in CSS margin shorthand, applied to the viewport.
    pub root_margin: &'static str,
    pub policy: FirePolicy,
}

/// Reveal-on-scroll: fires early (12% visible) with the viewport bottom
/// pulled up 40px so elements start animating just before they fully enter.
pub const REVEAL_PROFILE: ObserverProfile = ObserverProfile {
    threshold: 0.12,
    root_margin: "0px 0px -40px 0px",
    policy: FirePolicy::Once,
};

/// Stat counters: fire once half the element is visible.
pub const STATS_PROFILE: ObserverProfile = ObserverProfile {
    threshold: 0.5,
    root_margin: "0px",
    policy: FirePolicy::Once,
};

/// Active-section tracking: the viewport is shrunk below the fixed navbar
/// and to its upper half so the "current" section is the one under the
/// reader's eyes, not the one entering at the bottom.
pub const SECTIONS_PROFILE: ObserverProfile = ObserverProfile {
    threshold: 0.3,
    root_margin: "-80px 0px -50% 0px",
    policy: FirePolicy::Repeat,
};

/// Gap between consecutive reveals admitted from one observation batch.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(80);

/// At-most-once latch over a fixed set of reveal targets.
#[derive(Debug, Clone)]
pub struct RevealGate {
    fired: Vec<bool>,
}

impl RevealGate {
    /// Gate for `targets` elements, none revealed yet.
    #[must_use]
    pub fn new(targets: usize) -> Self {
        Self {
            fired: vec![false; targets],
        }
    }

    /// Admit target `index` seen at `batch_position` within its observation
    /// batch.
    ///
    /// Returns the stagger delay for this reveal, or `None` if the target
    /// already fired (or is out of range). The delay scales with the batch
    /// position so simultaneous reveals cascade instead of popping at once.
    pub fn admit(&mut self, index: usize, batch_position: usize) -> Option<Duration> {
        let fired = self.fired.get_mut(index)?;
        if *fired {
            return None;
        }
        *fired = true;
        Some(REVEAL_STAGGER * batch_position as u32)
    }

    /// True once every target has revealed.
    #[must_use]
    pub fn exhausted(&self) -> bool {
        self.fired.iter().all(|f| *f)
    }
}

/// Repeatable tracker for the section currently under the viewport's
/// reading band.
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    current: Option<String>,
}

impl SectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` became the visible section. Returns `true` when the
    /// active section changed and the host should re-point the highlight.
    pub fn enter(&mut self, id: &str) -> bool {
        if self.current.as_deref() == Some(id) {
            return false;
        }
        self.current = Some(id.to_owned());
        true
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

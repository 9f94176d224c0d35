#![forbid(unsafe_code)]

//! Resume download counter projection.
//!
//! The authoritative count lives in a remote realtime database; this side
//! only projects it. Snapshots arrive over a live subscription (an unset
//! remote value reads as zero) and render parenthesized next to the
//! download control. The increment is a pure transaction function the host
//! submits to the remote store's read-modify-write primitive — there is no
//! optimistic local bump, so the label always shows the authoritative
//! value.

/// Local projection of the remote download count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DownloadCounter {
    count: i64,
}

impl DownloadCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a snapshot from the live subscription. `None` (value never
    /// written remotely) reads as zero. Returns `true` when the projected
    /// count changed.
    pub fn apply_snapshot(&mut self, value: Option<i64>) -> bool {
        let next = value.unwrap_or(0);
        if next == self.count {
            return false;
        }
        self.count = next;
        true
    }

    #[must_use]
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Rendered text for the count, e.g. `(42)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("({})", self.count)
    }

    /// Transaction function for the remote increment: an unset value counts
    /// as zero, so the first download writes 1.
    #[must_use]
    pub const fn increment(current: Option<i64>) -> i64 {
        match current {
            Some(count) => count + 1,
            None => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_remote_value_projects_zero() {
        let mut counter = DownloadCounter::new();
        assert!(!counter.apply_snapshot(None), "zero to zero is no change");
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.label(), "(0)");
    }

    #[test]
    fn snapshots_drive_the_label() {
        let mut counter = DownloadCounter::new();
        assert!(counter.apply_snapshot(Some(41)));
        assert_eq!(counter.label(), "(41)");
        assert!(counter.apply_snapshot(Some(42)));
        assert_eq!(counter.label(), "(42)");
    }

    #[test]
    fn repeated_snapshot_reports_no_change() {
        let mut counter = DownloadCounter::new();
        counter.apply_snapshot(Some(7));
        assert!(!counter.apply_snapshot(Some(7)));
    }

    #[test]
    fn increment_counts_from_an_unset_value() {
        assert_eq!(DownloadCounter::increment(None), 1);
        assert_eq!(DownloadCounter::increment(Some(0)), 1);
        assert_eq!(DownloadCounter::increment(Some(41)), 42);
    }
}

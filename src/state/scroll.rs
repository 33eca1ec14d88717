/// Scroll offset (in pixels) past which the home header turns solid
pub const DEFAULT_SCROLL_THRESHOLD: f32 = 50.0;

/// Tracks whether the home page has been scrolled past a threshold.
/// Only the header's styling depends on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWatcher {
    threshold: f32,
    scrolled: bool,
}

impl ScrollWatcher {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Record a new vertical offset. Returns true if the flag flipped.
    pub fn observe(&mut self, offset_y: f32) -> bool {
        let scrolled = offset_y.max(0.0) > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Default for ScrollWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut watcher = ScrollWatcher::default();
        assert!(!watcher.is_scrolled());

        assert!(!watcher.observe(50.0));
        assert!(!watcher.is_scrolled());

        assert!(watcher.observe(50.5));
        assert!(watcher.is_scrolled());
    }

    #[test]
    fn test_reports_only_changes() {
        let mut watcher = ScrollWatcher::new(10.0);
        assert!(watcher.observe(200.0));
        assert!(!watcher.observe(300.0));
        assert!(watcher.observe(0.0));
        assert!(!watcher.is_scrolled());
    }

    #[test]
    fn test_overscroll_counts_as_top() {
        let mut watcher = ScrollWatcher::new(0.0);
        watcher.observe(-40.0);
        assert!(!watcher.is_scrolled());
    }
}

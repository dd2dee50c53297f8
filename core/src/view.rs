//! Small per-component view latches

/// Vertical offset past which the header turns opaque
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Header scroll state, recomputed on every scroll event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    scrolled: bool,
}

impl ScrollState {
    /// Record a new offset. Returns true when `is_scrolled` flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

/// Mobile navigation drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link from the drawer always closes it.
    pub fn navigate(&mut self) {
        self.open = false;
    }
}

/// One-shot "has entered the viewport" flag
///
/// Once triggered it stays triggered for the lifetime of the mount. There
/// is no way to re-arm it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Report a visibility sample. Only `true` has an effect.
    ///
    /// Returns true when this call caused the reveal.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let mut state = ScrollState::default();
        assert!(!state.is_scrolled());

        assert!(!state.observe(50.0));
        assert!(!state.is_scrolled());

        assert!(state.observe(50.5));
        assert!(state.is_scrolled());

        assert!(!state.observe(400.0));
        assert!(state.observe(0.0));
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_mobile_menu() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.navigate();
        assert!(!menu.is_open());
        menu.navigate();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());

        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        for sample in [false, true, false, false] {
            assert!(!latch.observe(sample));
            assert!(latch.is_revealed());
        }
    }
}

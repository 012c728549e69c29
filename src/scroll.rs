/// Offset in pixels past which the scroll-to-top button shows.
pub const SCROLL_THRESHOLD: f64 = 300.0;

pub fn past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Visibility of the scroll-to-top button, re-evaluated on every scroll sample.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollVisibility {
    visible: bool,
}

impl ScrollVisibility {
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Returns true when the sample flipped visibility.
    pub fn observe(&mut self, offset: f64) -> bool {
        let visible = past_threshold(offset);
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

/// Trigger-once reveal state of a page section.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true only for the first visible sample; later samples never hide it again.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.revealed {
            self.revealed = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(300.0));
        assert!(past_threshold(300.5));
        assert!(past_threshold(301.0));
    }

    #[test]
    fn test_visibility_flips() {
        let mut v = ScrollVisibility::default();
        assert!(!v.visible());

        assert!(!v.observe(0.0));
        assert!(v.observe(301.0));
        assert!(v.visible());

        // same side of the threshold, no flip
        assert!(!v.observe(1200.0));
        assert!(v.visible());

        assert!(v.observe(300.0));
        assert!(!v.visible());
    }

    #[test]
    fn test_reveal_latches() {
        let mut r = Reveal::default();
        assert!(!r.observe(false));
        assert!(!r.revealed());

        assert!(r.observe(true));
        assert!(r.revealed());

        // scrolling away and back leaves it revealed
        assert!(!r.observe(false));
        assert!(r.revealed());
        assert!(!r.observe(true));
        assert!(r.revealed());
    }
}

//! Fire-once entrance reveals driven by viewport visibility.

use crate::content::Side;

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const ENTRANCE_OFFSET_PX: f64 = 100.0;

pub const TIMELINE_THRESHOLD: f64 = 0.5;
pub const ABOUT_THRESHOLD: f64 = 0.5;
pub const SKILLS_THRESHOLD: f64 = 0.2;
pub const PROJECTS_THRESHOLD: f64 = 0.1;
pub const CONTACT_THRESHOLD: f64 = 0.3;
pub const FOOTER_THRESHOLD: f64 = 0.5;

/// Latches once the observed element is at least `threshold` visible.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one visibility sample. Returns `true` only on the sample that reveals.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.revealed || !is_intersecting || ratio < self.threshold {
            return false;
        }

        self.revealed = true;
        true
    }

    /// Reveals without a sample, for browsers that cannot observe.
    pub fn force(&mut self) -> bool {
        let fired = !self.revealed;
        self.revealed = true;
        fired
    }
}

/// Horizontal start offset for a timeline item's entrance.
pub fn entrance_offset(side: Side, viewport_width: f64) -> f64 {
    if viewport_width < MOBILE_BREAKPOINT_PX {
        return -ENTRANCE_OFFSET_PX;
    }

    match side {
        Side::Left => -ENTRANCE_OFFSET_PX,
        Side::Right => ENTRANCE_OFFSET_PX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TIMELINE;

    #[test]
    fn fires_once_across_repeated_scrolls() {
        let mut latch = RevealLatch::new(TIMELINE_THRESHOLD);
        let samples = [
            (false, 0.0),
            (true, 0.2),
            (true, 0.5),
            (false, 0.0),
            (true, 0.9),
            (true, 1.0),
        ];

        let fired: Vec<bool> = samples
            .iter()
            .map(|(intersecting, ratio)| latch.observe(*intersecting, *ratio))
            .collect();

        assert_eq!(fired, vec![false, false, true, false, false, false]);
        assert!(latch.is_revealed());
    }

    #[test]
    fn below_threshold_never_reveals() {
        let mut latch = RevealLatch::new(0.5);
        assert!(!latch.observe(true, 0.49));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn non_intersecting_sample_is_ignored_even_with_ratio() {
        let mut latch = RevealLatch::new(0.1);
        assert!(!latch.observe(false, 0.8));
    }

    #[test]
    fn forced_reveal_counts_as_the_single_firing() {
        let mut latch = RevealLatch::new(0.3);
        assert!(latch.force());
        assert!(!latch.force());
        assert!(!latch.observe(true, 1.0));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealLatch::new(3.0).threshold(), 1.0);
        assert_eq!(RevealLatch::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn desktop_entries_enter_from_their_own_side() {
        for entry in TIMELINE {
            let offset = entrance_offset(entry.side, 1280.0);
            let mirrored = entrance_offset(entry.side.opposite(), 1280.0);
            assert_eq!(offset, -mirrored);
        }
        assert!(entrance_offset(Side::Left, 1280.0) < 0.0);
        assert!(entrance_offset(Side::Right, 1280.0) > 0.0);
    }

    #[test]
    fn mobile_entries_all_enter_from_the_left() {
        assert_eq!(entrance_offset(Side::Right, 767.0), -ENTRANCE_OFFSET_PX);
        assert_eq!(entrance_offset(Side::Left, 767.0), -ENTRANCE_OFFSET_PX);
        assert_eq!(entrance_offset(Side::Right, MOBILE_BREAKPOINT_PX), ENTRANCE_OFFSET_PX);
    }
}

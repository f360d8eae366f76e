//! Side-by-side comparison state: two clamped years and a toggle.

use crate::timeline::{YEAR_MAX, YEAR_MIN};

/// Split-view comparison store. Both years saturate into the store bounds,
/// mirroring the timeline clamping.
#[derive(Clone, Copy, Debug)]
pub struct SplitView {
    min: i32,
    max: i32,
    enabled: bool,
    left: i32,
    right: i32,
}

impl SplitView {
    /// Store over `[min, max]`: disabled, left at `min`, right at `max`.
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max, enabled: false, left: min, right: max }
    }

    /// Whether the comparison view is active.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle the comparison view.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Year framed on the left side.
    pub fn left_year(&self) -> i32 {
        self.left
    }

    /// Year framed on the right side.
    pub fn right_year(&self) -> i32 {
        self.right
    }

    /// Set the left year, saturating into bounds.
    pub fn set_left(&mut self, year: i32) {
        self.left = year.clamp(self.min, self.max);
    }

    /// Set the right year, saturating into bounds.
    pub fn set_right(&mut self, year: i32) {
        self.right = year.clamp(self.min, self.max);
    }
}

impl Default for SplitView {
    /// Comparison over the core timeline bounds.
    fn default() -> Self {
        Self::new(YEAR_MIN, YEAR_MAX)
    }
}

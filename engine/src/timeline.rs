//! The year domain of the data model and the clamped current-year store.

use std::time::Duration;

/// First year of the data model; growth is measured from here.
pub const YEAR_MIN: i32 = 2012;
/// Last observed year of the core timeline.
pub const YEAR_MAX: i32 = 2024;
/// Far edge of forward projection; generator year shaping saturates here.
pub const YEAR_HORIZON: i32 = 2050;

/// Fraction of the full year domain covered at `year`, in `[0, 1]`.
#[inline]
pub fn year_frac(year: i32) -> f64 {
    let span = (YEAR_HORIZON - YEAR_MIN) as f64;
    (((year - YEAR_MIN) as f64) / span).clamp(0.0, 1.0)
}

/// Interval between autoplay steps.
const STEP_INTERVAL: Duration = Duration::from_secs(1);

/// Clamped current-year store with optional autoplay.
///
/// Autoplay has no timer of its own: the owner feeds a monotonic `Duration`
/// into [`Timeline::tick`] every frame and the store steps once per elapsed
/// second.
#[derive(Clone, Copy, Debug)]
pub struct Timeline {
    min: i32,
    max: i32,
    current: i32,
    playing: bool,
    last_step: Duration,
}

impl Timeline {
    /// Store over `[min, max]`, starting at `min`, autoplay off.
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max, current: min, playing: false, last_step: Duration::ZERO }
    }

    /// Inclusive bounds of the store.
    pub fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    /// Current year.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Set the year, saturating into the store bounds.
    pub fn set(&mut self, year: i32) {
        self.current = year.clamp(self.min, self.max);
    }

    /// Whether autoplay is running.
    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Toggle autoplay; the next step is measured from `now`.
    pub fn toggle(&mut self, now: Duration) {
        self.playing = !self.playing;
        if self.playing {
            self.last_step = now;
        }
    }

    /// Advance autoplay: one year per elapsed second, wrapping past the
    /// maximum back to the minimum. Returns true when the year stepped.
    pub fn tick(&mut self, now: Duration) -> bool {
        if !self.playing || now.saturating_sub(self.last_step) < STEP_INTERVAL {
            return false;
        }
        self.last_step = now;
        self.current = if self.current >= self.max { self.min } else { self.current + 1 };
        true
    }
}

impl Default for Timeline {
    /// The core [`YEAR_MIN`]`..=`[`YEAR_MAX`] timeline.
    fn default() -> Self {
        Self::new(YEAR_MIN, YEAR_MAX)
    }
}

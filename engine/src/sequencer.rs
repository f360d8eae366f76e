//! Guided-tour playback: an explicit state machine driven by caller time.
//!
//! Nothing here touches the wall clock. The owner supplies a monotonic
//! `Duration` on every call; a scene change fires when that time passes the
//! armed deadline, so the whole machine runs unchanged under test clocks.

use std::time::Duration;

use tracing::debug;

use crate::camera::CameraRequest;
use crate::layers::LayerSet;
use crate::storyboard::{StoryScene, STORYBOARD};

/// Host callbacks fired on every scene entry.
///
/// The sequencer publishes the complete state a scene needs: a camera
/// flight, the full five-layer visibility set, and the pinned year when the
/// scene declares one. Clamping and rendering belong to the host.
pub trait SceneSink {
    /// Fly the camera to the scene frame.
    fn fly_to(&mut self, request: CameraRequest);
    /// Replace the whole visibility set.
    fn set_layers(&mut self, layers: LayerSet);
    /// Pin the data year. Called only when the scene declares a year.
    fn set_year(&mut self, year: i32);
    /// Scene entry notification, after the setters above have run.
    fn scene_changed(&mut self, index: usize, scene: &StoryScene);
}

/// Playback position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Stopped; the next start enters scene 0.
    Idle,
    /// Playing the scene at this index.
    Playing(usize),
}

/// Cinematic playback over a scene list.
#[derive(Debug)]
pub struct Sequencer {
    scenes: Vec<StoryScene>,
    state: Playback,
    entered_at: Duration,
    deadline: Duration,
}

impl Sequencer {
    /// Sequencer over a copy of `scenes`, starting idle.
    pub fn new(scenes: &[StoryScene]) -> Self {
        Self {
            scenes: scenes.to_vec(),
            state: Playback::Idle,
            entered_at: Duration::ZERO,
            deadline: Duration::ZERO,
        }
    }

    /// Sequencer over the built-in guided tour.
    pub fn tour() -> Self {
        Self::new(&STORYBOARD)
    }

    /// Current playback state.
    pub fn state(&self) -> Playback {
        self.state
    }

    /// True while a scene is playing.
    pub fn is_playing(&self) -> bool {
        matches!(self.state, Playback::Playing(_))
    }

    /// Index of the playing scene, or 0 when idle (the next start index).
    pub fn scene_index(&self) -> usize {
        match self.state {
            Playback::Playing(index) => index,
            Playback::Idle => 0,
        }
    }

    /// The playing scene, while one plays.
    pub fn current_scene(&self) -> Option<&StoryScene> {
        match self.state {
            Playback::Playing(index) => self.scenes.get(index),
            Playback::Idle => None,
        }
    }

    /// Scene list the sequencer plays.
    pub fn scenes(&self) -> &[StoryScene] {
        &self.scenes
    }

    /// Time spent in the current scene at `now`; zero when idle.
    pub fn scene_elapsed(&self, now: Duration) -> Duration {
        if self.is_playing() {
            now.saturating_sub(self.entered_at)
        } else {
            Duration::ZERO
        }
    }

    /// Begin playback at scene 0.
    ///
    /// Restarting while playing re-enters scene 0 and re-fires its side
    /// effects; progress restarts from zero.
    pub fn start(&mut self, now: Duration, sink: &mut dyn SceneSink) {
        self.enter(0, now, sink);
    }

    /// Halt playback without touching published camera, layer or year
    /// state. The pending deadline is discarded; nothing fires afterwards.
    pub fn stop(&mut self) {
        if self.is_playing() {
            debug!(target: "tour", "playback stopped");
        }
        self.state = Playback::Idle;
        self.entered_at = Duration::ZERO;
        self.deadline = Duration::ZERO;
    }

    /// Advance playback when `now` has passed the scene deadline.
    ///
    /// At most one scene change fires per call, and the next deadline is
    /// armed from `now`, matching a chain of one-shot timers. Past the
    /// final scene the machine returns to idle with the index reset.
    pub fn tick(&mut self, now: Duration, sink: &mut dyn SceneSink) {
        let Playback::Playing(index) = self.state else {
            return;
        };
        if now < self.deadline {
            return;
        }
        let next = index + 1;
        if next >= self.scenes.len() {
            debug!(target: "tour", scenes = self.scenes.len(), "tour complete");
            self.state = Playback::Idle;
            self.entered_at = Duration::ZERO;
            self.deadline = Duration::ZERO;
        } else {
            self.enter(next, now, sink);
        }
    }

    /// Global progress through the tour in `[0, 1]`.
    ///
    /// Observational only: reading progress never advances the machine.
    /// The value is `(index + scene_fraction) / scene_count`, non-decreasing
    /// while a scene plays, exactly `index / scene_count` at entry, and 0
    /// when idle.
    pub fn progress(&self, now: Duration) -> f32 {
        let Playback::Playing(index) = self.state else {
            return 0.0;
        };
        let total = self.scenes.len() as f32;
        let dwell = self.deadline.saturating_sub(self.entered_at);
        let elapsed = now.saturating_sub(self.entered_at);
        let frac = if dwell.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / dwell.as_secs_f32()).min(1.0)
        };
        ((index as f32 + frac) / total).clamp(0.0, 1.0)
    }

    fn enter(&mut self, index: usize, now: Duration, sink: &mut dyn SceneSink) {
        let Some(scene) = self.scenes.get(index).copied() else {
            self.state = Playback::Idle;
            return;
        };
        self.state = Playback::Playing(index);
        self.entered_at = now;
        self.deadline = now + Duration::from_millis(scene.duration_ms);
        sink.fly_to(CameraRequest::scene_entry(scene.view));
        sink.set_layers(scene.layers);
        if let Some(year) = scene.year {
            sink.set_year(year);
        }
        sink.scene_changed(index, &scene);
        debug!(target: "tour", index, id = scene.id, dwell_ms = scene.duration_ms, "scene entered");
    }
}

//! Camera value types and the fly-to requests playback hands the host.

/// Full viewport state mirrored from the rendering host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Latitude of the camera target in degrees.
    pub latitude: f64,
    /// Longitude of the camera target in degrees.
    pub longitude: f64,
    /// Renderer zoom level.
    pub zoom: f32,
    /// Camera pitch in degrees.
    pub pitch: f32,
    /// Camera bearing in degrees.
    pub bearing: f32,
}

/// The camera triple a storyboard scene frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneView {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Renderer zoom level.
    pub zoom: f32,
}

impl SceneView {
    /// Full view state with pitch and bearing level.
    pub fn view_state(&self) -> ViewState {
        ViewState {
            latitude: self.latitude,
            longitude: self.longitude,
            zoom: self.zoom,
            ..ViewState::default()
        }
    }
}

/// Fly-to interpolator options understood by the rendering host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlyTo {
    /// Animation speed multiplier.
    pub speed: f32,
    /// Zoom-out curve of the flight arc.
    pub curve: f32,
}

impl Default for FlyTo {
    fn default() -> Self {
        Self { speed: 1.2, curve: 1.414 }
    }
}

/// Transition length for scene entries and quick travel, in milliseconds.
pub const SCENE_TRANSITION_MS: u64 = 2000;
/// Transition length of the opening fly-in from the zero state.
pub const INTRO_TRANSITION_MS: u64 = 4000;
/// Lower viewport zoom bound the host enforces.
pub const ZOOM_MIN: f32 = 0.5;
/// Upper viewport zoom bound the host enforces.
pub const ZOOM_MAX: f32 = 8.0;

/// Resting view after the opening fly-in.
pub const HOME_VIEW: SceneView = SceneView { latitude: 20.0, longitude: 0.0, zoom: 1.2 };

/// A camera transition request published on scene entry or quick travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRequest {
    /// Target viewport.
    pub view: ViewState,
    /// Transition duration in milliseconds.
    pub duration_ms: u64,
    /// Interpolator options for the flight.
    pub fly_to: FlyTo,
}

impl CameraRequest {
    /// Standard scene-entry flight to `view`.
    pub fn scene_entry(view: SceneView) -> Self {
        Self {
            view: view.view_state(),
            duration_ms: SCENE_TRANSITION_MS,
            fly_to: FlyTo::default(),
        }
    }

    /// Opening flight from the zero state to [`HOME_VIEW`].
    pub fn intro() -> Self {
        Self {
            view: HOME_VIEW.view_state(),
            duration_ms: INTRO_TRANSITION_MS,
            fly_to: FlyTo { curve: 2.0, ..FlyTo::default() },
        }
    }
}

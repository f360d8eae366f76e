//! Session wiring: the stores, the sequencer, and the dataset cache.

use std::time::Duration;

use tracing::info;

use engine::camera::{CameraRequest, ViewState, HOME_VIEW, ZOOM_MAX, ZOOM_MIN};
use engine::cities::{self, CityCenter};
use engine::dataset::{FeatureCollection, LightSample, PolygonFeature, SurfaceSample};
use engine::layers::{Layer, LayerSet};
use engine::mask;
use engine::sequencer::{SceneSink, Sequencer};
use engine::split::SplitView;
use engine::storyboard::StoryScene;
use engine::timeline::Timeline;
use engine::{lights, projection, temperature, urban, vegetation};

/// Earliest future year the projection slider reaches.
pub const FUTURE_YEAR_MIN: i32 = 2025;
/// Latest future year the projection slider reaches.
pub const FUTURE_YEAR_MAX: i32 = 2050;
/// Default point budget for the point-cloud layers.
pub const DEFAULT_POINT_COUNT: usize = 500;

// The spotlight stays invisible this long after a scene entry so the camera
// flight settles before the dimming fades in.
const SPOTLIGHT_DELAY: Duration = Duration::from_millis(800);
const SPOTLIGHT_OPACITY: f32 = 0.75;

/// The spotlight overlay the host should draw this frame.
#[derive(Clone, Debug)]
pub struct Spotlight {
    /// World-covering polygon with the circular window cut out.
    pub mask: PolygonFeature,
    /// Fill opacity; zero while the camera flight settles.
    pub opacity: f32,
}

/// One build of the five layer datasets.
pub struct Datasets {
    /// Night-lights point cloud.
    pub night_lights: Vec<LightSample>,
    /// Urban boundary polygons.
    pub urban: FeatureCollection,
    /// Vegetation cover columns.
    pub vegetation: Vec<SurfaceSample>,
    /// Temperature heat cloud.
    pub temperature: Vec<LightSample>,
    /// Forward-projection ghost rings.
    pub predictive: FeatureCollection,
}

// Everything the sequencer is allowed to write into. Split out of Session so
// the sequencer can be driven with a mutable borrow of the stores alone.
struct Stores {
    timeline: Timeline,
    split: SplitView,
    layers: LayerSet,
    camera: ViewState,
    last_flight: Option<CameraRequest>,
}

impl SceneSink for Stores {
    fn fly_to(&mut self, request: CameraRequest) {
        self.camera = request.view;
        self.last_flight = Some(request);
    }

    fn set_layers(&mut self, layers: LayerSet) {
        self.layers = layers;
    }

    fn set_year(&mut self, year: i32) {
        // Scene years past the timeline maximum saturate here.
        self.timeline.set(year);
    }

    fn scene_changed(&mut self, index: usize, scene: &StoryScene) {
        info!(target: "stage", index, id = scene.id, title = scene.title, "scene entered");
    }
}

/// The composition root: owns every store the UI reads, drives playback,
/// and caches dataset builds keyed on the inputs that shape them.
pub struct Session {
    sequencer: Sequencer,
    stores: Stores,
    dashboard_open: bool,
    selected_city: Option<&'static str>,
    future_year: i32,
    seed: u64,
    point_count: usize,
    cache: Option<((i32, i32), Datasets)>,
}

impl Session {
    /// Session over the built-in tour, camera resting on the home view.
    pub fn new(seed: u64) -> Self {
        Self {
            sequencer: Sequencer::tour(),
            stores: Stores {
                timeline: Timeline::default(),
                split: SplitView::default(),
                layers: LayerSet::NONE.with(Layer::NightLights),
                camera: HOME_VIEW.view_state(),
                last_flight: None,
            },
            dashboard_open: false,
            selected_city: None,
            future_year: 2035,
            seed,
            point_count: DEFAULT_POINT_COUNT,
            cache: None,
        }
    }

    /// Override the point budget for the point-cloud layers.
    pub fn with_point_count(mut self, count: usize) -> Self {
        self.point_count = count;
        self
    }

    /// Advance playback and autoplay against the session clock.
    pub fn frame(&mut self, now: Duration) {
        self.sequencer.tick(now, &mut self.stores);
        self.stores.timeline.tick(now);
    }

    /// Start the guided tour from scene 0.
    pub fn start_tour(&mut self, now: Duration) {
        self.sequencer.start(now, &mut self.stores);
    }

    /// Stop the tour, leaving camera, layers and year as last published.
    pub fn stop_tour(&mut self) {
        self.sequencer.stop();
    }

    /// Whether the tour is running.
    pub fn touring(&self) -> bool {
        self.sequencer.is_playing()
    }

    /// Tour progress in `[0, 1]` at `now`.
    pub fn tour_progress(&self, now: Duration) -> f32 {
        self.sequencer.progress(now)
    }

    /// The playing scene, while the tour runs.
    pub fn current_scene(&self) -> Option<&StoryScene> {
        self.sequencer.current_scene()
    }

    /// The spotlight overlay for this frame: present only while a scene
    /// with a focus city plays, invisible until the camera flight settles.
    pub fn spotlight(&self, now: Duration) -> Option<Spotlight> {
        let scene = self.sequencer.current_scene()?;
        let city = scene.active_city?;
        let opacity = if self.sequencer.scene_elapsed(now) < SPOTLIGHT_DELAY {
            0.0
        } else {
            SPOTLIGHT_OPACITY
        };
        Some(Spotlight {
            mask: mask::inverted_mask(
                city.lat,
                city.lng,
                mask::SPOTLIGHT_RADIUS_KM,
                mask::DEFAULT_STEPS,
            ),
            opacity,
        })
    }

    /// Current data year.
    pub fn year(&self) -> i32 {
        self.stores.timeline.current()
    }

    /// Set the data year, saturating into the timeline bounds.
    pub fn set_year(&mut self, year: i32) {
        self.stores.timeline.set(year);
    }

    /// The clamped year store.
    pub fn timeline(&self) -> &Timeline {
        &self.stores.timeline
    }

    /// Mutable access to the year store, for autoplay toggles.
    pub fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.stores.timeline
    }

    /// The comparison-view store.
    pub fn split(&self) -> &SplitView {
        &self.stores.split
    }

    /// Mutable access to the comparison-view store.
    pub fn split_mut(&mut self) -> &mut SplitView {
        &mut self.stores.split
    }

    /// Interactive layer visibility.
    pub fn layers(&self) -> LayerSet {
        self.stores.layers
    }

    /// Flip one layer's visibility.
    pub fn toggle_layer(&mut self, layer: Layer) {
        self.stores.layers.toggle(layer);
    }

    /// Current camera mirror.
    pub fn camera(&self) -> ViewState {
        self.stores.camera
    }

    /// The camera flight most recently requested, if any.
    pub fn last_flight(&self) -> Option<CameraRequest> {
        self.stores.last_flight
    }

    /// Whether the dashboard panel is open.
    pub fn dashboard_open(&self) -> bool {
        self.dashboard_open
    }

    /// Toggle the dashboard panel.
    pub fn toggle_dashboard(&mut self) {
        self.dashboard_open = !self.dashboard_open;
    }

    /// The quick-travel city currently selected.
    pub fn selected_city(&self) -> Option<&'static CityCenter> {
        self.selected_city.and_then(cities::city_named)
    }

    /// Fly the camera to a quick-travel preset. Unknown names are ignored.
    pub fn select_city(&mut self, name: &str) {
        let Some(city) = cities::fly_to_cities().iter().find(|c| c.name == name) else {
            return;
        };
        self.selected_city = Some(city.name);
        let view = ViewState {
            latitude: city.lat,
            longitude: city.lng,
            zoom: cities::FLY_TO_ZOOM,
            ..ViewState::default()
        };
        self.stores.fly_to(CameraRequest {
            view,
            duration_ms: engine::camera::SCENE_TRANSITION_MS,
            fly_to: engine::camera::FlyTo::default(),
        });
        info!(target: "stage", city = city.name, "quick travel");
    }

    /// Step the viewport zoom in by half a level.
    pub fn zoom_in(&mut self) {
        self.stores.camera.zoom = (self.stores.camera.zoom + 0.5).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Step the viewport zoom out by half a level.
    pub fn zoom_out(&mut self) {
        self.stores.camera.zoom = (self.stores.camera.zoom - 0.5).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Target year of the forward projection.
    pub fn future_year(&self) -> i32 {
        self.future_year
    }

    /// Set the projection target year, saturating into the slider range.
    pub fn set_future_year(&mut self, year: i32) {
        self.future_year = year.clamp(FUTURE_YEAR_MIN, FUTURE_YEAR_MAX);
    }

    /// Growth assumption behind the projection ghost, in percent: three
    /// points per year of lookahead, never below ten.
    pub fn growth_percent(&self) -> i32 {
        ((self.future_year - self.year()) * 3).max(10)
    }

    /// The five layer datasets for the current year and growth assumption.
    ///
    /// Builds are cached on `(year, growth_percent)`; repeated calls within
    /// a frame or across unchanged frames return the same build.
    pub fn datasets(&mut self) -> &Datasets {
        let key = (self.year(), self.growth_percent());
        let stale = !matches!(&self.cache, Some((cached, _)) if *cached == key);
        if stale {
            self.cache = Some((key, self.build_datasets()));
        }
        // The arm above always fills the cache.
        match &self.cache {
            Some((_, data)) => data,
            None => unreachable!(),
        }
    }

    fn build_datasets(&self) -> Datasets {
        let year = self.year();
        let count = self.point_count;
        let seed = self.seed;
        info!(target: "stage", year, count, "rebuilding datasets");
        Datasets {
            night_lights: lights::generate(&lights::LightsParams { count, year, seed }),
            urban: urban::generate(&urban::UrbanParams { count: 8, year, seed }),
            vegetation: vegetation::generate(&vegetation::VegetationParams {
                count,
                year,
                seed,
            }),
            temperature: temperature::generate(&temperature::TemperatureParams {
                count,
                year,
                seed,
            }),
            predictive: projection::generate(&projection::ProjectionParams {
                base_year: year,
                growth_percent: self.growth_percent() as f32,
            }),
        }
    }
}

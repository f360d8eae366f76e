//! The fixed guided tour: six scenes walking the globe story from the
//! night-time planet down to single cities and back out.

use crate::camera::SceneView;
use crate::layers::{Layer, LayerSet};

/// A city spotlighted by a scene. Coordinates duplicate the geography
/// table entry so scene data stays const-buildable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CityRef {
    /// City name matching the geography table.
    pub name: &'static str,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// One scene of the guided tour.
#[derive(Clone, Copy, Debug)]
pub struct StoryScene {
    /// Stable scene identifier.
    pub id: &'static str,
    /// Headline shown while the scene plays.
    pub title: &'static str,
    /// Narration line for the scene.
    pub description: &'static str,
    /// Camera frame for the scene.
    pub view: SceneView,
    /// Dwell time before advancing, in milliseconds.
    pub duration_ms: u64,
    /// Complete visibility set published on entry. Layers a scene does not
    /// name stay hidden, so nothing leaks from the previous scene.
    pub layers: LayerSet,
    /// Spotlighted city, when the scene focuses one.
    pub active_city: Option<CityRef>,
    /// Data year the scene pins, when it pins one. Hosts clamp it into
    /// their timeline bounds.
    pub year: Option<i32>,
}

/// The guided tour, in play order.
pub const STORYBOARD: [StoryScene; 6] = [
    StoryScene {
        id: "intro",
        title: "Global System",
        description: "Earth at night reveals the pulse of human civilization.",
        view: SceneView { latitude: 20.0, longitude: 0.0, zoom: 1.5 },
        duration_ms: 6000,
        layers: LayerSet::NONE.with(Layer::NightLights),
        active_city: None,
        year: Some(2012),
    },
    StoryScene {
        id: "tokyo-growth",
        title: "Tokyo: Urban Density",
        description: "The world's largest metropolitan economy showing massive night footprint.",
        view: SceneView { latitude: 35.7, longitude: 139.7, zoom: 5.5 },
        duration_ms: 8000,
        layers: LayerSet::NONE.with(Layer::NightLights).with(Layer::UrbanBoundaries),
        active_city: Some(CityRef { name: "Tokyo", lat: 35.7, lng: 139.7 }),
        year: Some(2018),
    },
    StoryScene {
        id: "amazon-tradeoff",
        title: "São Paulo: The Edge",
        description: "Witness the relationship between urbanization and green cover loss.",
        view: SceneView { latitude: -23.5, longitude: -46.6, zoom: 6.0 },
        duration_ms: 8000,
        layers: LayerSet::NONE.with(Layer::UrbanBoundaries).with(Layer::Vegetation),
        active_city: Some(CityRef { name: "São Paulo", lat: -23.5, lng: -46.6 }),
        year: Some(2020),
    },
    StoryScene {
        id: "mumbai-heat",
        title: "Mumbai: Heat Island",
        description: "Dense population centers correlate with higher local temperatures.",
        view: SceneView { latitude: 19.1, longitude: 72.9, zoom: 7.0 },
        duration_ms: 8000,
        layers: LayerSet::NONE.with(Layer::UrbanBoundaries).with(Layer::Temperature),
        active_city: Some(CityRef { name: "Mumbai", lat: 19.1, lng: 72.9 }),
        year: Some(2022),
    },
    StoryScene {
        id: "ny-future",
        title: "New York: Future",
        description: "Projected urban expansion if current trends continue through 2035.",
        view: SceneView { latitude: 40.7, longitude: -74.0, zoom: 6.0 },
        duration_ms: 10000,
        layers: LayerSet::NONE.with(Layer::UrbanBoundaries).with(Layer::PredictiveGhost),
        active_city: Some(CityRef { name: "New York", lat: 40.7, lng: -74.0 }),
        year: Some(2035),
    },
    StoryScene {
        id: "outro",
        title: "One Planet",
        description: "Understanding our footprint is the first step toward balance.",
        view: SceneView { latitude: 10.0, longitude: 100.0, zoom: 1.8 },
        duration_ms: 6000,
        layers: LayerSet::NONE.with(Layer::NightLights).with(Layer::Vegetation),
        active_city: None,
        year: Some(2024),
    },
];

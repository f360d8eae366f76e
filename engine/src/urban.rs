//! Urban boundary polygons: one jagged growth ring per city.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::cities::{CityCenter, CITY_CENTERS};
use crate::dataset::{FeatureCollection, PolygonFeature, Properties, Ring};
use crate::timeline::YEAR_MIN;

/// Parameters for [`generate`].
#[derive(Clone, Copy, Debug)]
pub struct UrbanParams {
    /// Number of cities to outline; caps at the table size.
    pub count: usize,
    /// Data year; ring radii grow from the base year.
    pub year: i32,
    /// Base RNG seed; namespaced internally.
    pub seed: u64,
}

/// Distinct vertices per boundary ring.
const RING_STEPS: usize = 24;
/// Rim perturbation amplitude, as a fraction of the ring radius.
const RIM_AMPLITUDE: f64 = 0.12;
/// Lobes of the rim perturbation around a full turn.
const RIM_LOBES: f64 = 5.0;
/// North-south flattening of every ring.
const LAT_FLATTEN: f64 = 0.7;

/// Generate boundary rings for the first `count` table cities.
///
/// Each ring starts from a random base radius, grows linearly with years
/// since [`YEAR_MIN`], and is clamped so the perturbed rim stays inside the
/// city's `safe_spread`. A sinusoidal perturbation of the vertex index with
/// a per-city random phase keeps the outline jagged rather than circular.
pub fn generate(p: &UrbanParams) -> FeatureCollection {
    let ns: u64 = 0x7572_6261_6E; // "urban"
    let mut rng = StdRng::seed_from_u64(p.seed ^ ns);
    let growth = ((p.year - YEAR_MIN) as f64 / 12.0).max(0.0);
    let n = p.count.min(CITY_CENTERS.len());
    let mut features = Vec::with_capacity(n);
    for city in CITY_CENTERS.iter().take(n) {
        let base = 0.5 + rng.gen::<f64>() * 0.5;
        let phase = rng.gen::<f64>() * std::f64::consts::TAU;
        let radius = (base + growth * 0.8).min(city.safe_spread / (1.0 + RIM_AMPLITUDE));
        features.push(PolygonFeature::new(
            rim_ring(city, radius, phase),
            Properties {
                name: Some(city.name.to_string()),
                year: Some(p.year),
                ..Properties::default()
            },
        ));
    }
    FeatureCollection::new(features)
}

/// Closed jagged ring around a city, flattened north-south.
fn rim_ring(city: &CityCenter, radius: f64, phase: f64) -> Ring {
    let mut ring = Vec::with_capacity(RING_STEPS + 1);
    for i in 0..RING_STEPS {
        let angle = (i as f64 / RING_STEPS as f64) * std::f64::consts::TAU;
        let rim = radius * (1.0 + RIM_AMPLITUDE * (angle * RIM_LOBES + phase).sin());
        ring.push([
            city.lng + angle.cos() * rim,
            city.lat + angle.sin() * rim * LAT_FLATTEN,
        ]);
    }
    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    ring
}

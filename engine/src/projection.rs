//! Forward-projection ghosts: smooth rings showing where city boundaries
//! land if a growth assumption holds.

use crate::cities::CITY_CENTERS;
use crate::dataset::{FeatureCollection, PolygonFeature, Properties, Ring};
use crate::timeline::YEAR_MIN;

/// Parameters for [`generate`].
#[derive(Clone, Copy, Debug)]
pub struct ProjectionParams {
    /// Year the projection extends from.
    pub base_year: i32,
    /// Assumed footprint growth over the projection, in percent.
    pub growth_percent: f32,
}

/// How many table cities receive a projection ring.
const PROJECTED_CITIES: usize = 15;
/// Distinct vertices per ghost ring.
const RING_STEPS: usize = 12;
/// Years the projection looks ahead.
const LOOKAHEAD_YEARS: i32 = 10;
/// North-south flattening, matching the urban rings.
const LAT_FLATTEN: f64 = 0.7;

/// Generate projection rings for the first [`PROJECTED_CITIES`] cities.
///
/// The ghost is deterministic: the current footprint is the idealized growth
/// radius at `base_year`, and the future ring scales it by the growth
/// assumption, clamped to each city's `safe_spread`.
pub fn generate(p: &ProjectionParams) -> FeatureCollection {
    let projection = (p.growth_percent as f64 / 100.0).max(0.0);
    let current = current_radius(p.base_year);
    let mut features = Vec::with_capacity(PROJECTED_CITIES);
    for city in CITY_CENTERS.iter().take(PROJECTED_CITIES) {
        let future = (current * (1.0 + projection)).min(city.safe_spread);
        let mut ring: Ring = Vec::with_capacity(RING_STEPS + 1);
        for i in 0..RING_STEPS {
            let angle = (i as f64 / RING_STEPS as f64) * std::f64::consts::TAU;
            ring.push([
                city.lng + angle.cos() * future,
                city.lat + angle.sin() * future * LAT_FLATTEN,
            ]);
        }
        if let Some(first) = ring.first().copied() {
            ring.push(first);
        }
        features.push(PolygonFeature::new(
            ring,
            Properties {
                name: Some(format!("{} (Projected)", city.name)),
                projection_year: Some(p.base_year + LOOKAHEAD_YEARS),
                growth_percent: Some(p.growth_percent),
                ..Properties::default()
            },
        ));
    }
    FeatureCollection::new(features)
}

/// Idealized growth radius at `year`, in degrees.
pub fn current_radius(year: i32) -> f64 {
    0.5 + ((year - YEAR_MIN) as f64 / 12.0).max(0.0) * 0.8
}

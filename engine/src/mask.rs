//! Spotlight masks: a circular window ring and the inverted world polygon
//! that dims everything outside it.

use crate::dataset::{PolygonFeature, Properties, Ring};
use crate::geo;

/// Distinct vertices used to trace the spotlight circle.
pub const DEFAULT_STEPS: usize = 64;
/// Spotlight radius used during guided playback, in kilometres.
pub const SPOTLIGHT_RADIUS_KM: f64 = 600.0;
/// Latitude extent of the world rectangle. The poles are excluded so the
/// outer ring stays renderable on the globe projection.
const WORLD_LAT: f64 = 85.0;

/// Closed circular ring around a centre, for drawing the spotlight rim.
pub fn spotlight_ring(lat: f64, lng: f64, radius_km: f64, steps: usize) -> Ring {
    geo::circle_ring(lat, lng, radius_km, steps)
}

/// World-covering polygon with a circular hole at (`lat`, `lng`).
///
/// The outer rectangle spans the full longitude range at latitude ±85. The
/// hole is the spotlight circle traced in the opposite winding, so fill
/// renderers cut it out and everything except the window is dimmed.
/// Longitude scaling degenerates near the poles; centres are expected well
/// inside the rectangle.
pub fn inverted_mask(lat: f64, lng: f64, radius_km: f64, steps: usize) -> PolygonFeature {
    let outer: Ring = vec![
        [-180.0, -WORLD_LAT],
        [180.0, -WORLD_LAT],
        [180.0, WORLD_LAT],
        [-180.0, WORLD_LAT],
        [-180.0, -WORLD_LAT],
    ];
    let mut hole = geo::circle_ring(lat, lng, radius_km, steps);
    hole.reverse();
    PolygonFeature::with_rings(vec![outer, hole], Properties::default())
}

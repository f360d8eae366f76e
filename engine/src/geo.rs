//! Planar lat/lng helpers shared by the dataset generators and masks.
//!
//! Rings are `[lng, lat]` vertex lists in degrees, traced counter-clockwise
//! and closed by repeating the first vertex. Footprints are small enough on
//! the globe card that flat-degree math is used throughout.

/// Kilometres per degree of latitude (spherical approximation).
pub const KM_PER_DEG_LAT: f64 = 111.0;

/// Convert a north-south distance in kilometres to degrees of latitude.
#[inline]
pub fn km_to_deg_lat(km: f64) -> f64 {
    km / KM_PER_DEG_LAT
}

/// Convert an east-west distance in kilometres to degrees of longitude at
/// `lat_deg`. The cosine scaling degenerates as `|lat_deg|` approaches 90;
/// callers keep circle centres away from the poles.
#[inline]
pub fn km_to_deg_lng(km: f64, lat_deg: f64) -> f64 {
    km / (KM_PER_DEG_LAT * lat_deg.to_radians().cos())
}

/// Flat pseudo-distance in degrees between two (`lat`, `lng`) points.
#[inline]
pub fn flat_dist_deg(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64) -> f64 {
    let dlat = lat_a - lat_b;
    let dlng = lng_a - lng_b;
    (dlat * dlat + dlng * dlng).sqrt()
}

/// Closed counter-clockwise circle of `steps` distinct vertices around
/// (`lat`, `lng`), radius in kilometres. The first vertex is repeated last.
pub fn circle_ring(lat: f64, lng: f64, radius_km: f64, steps: usize) -> Vec<[f64; 2]> {
    let mut ring = Vec::with_capacity(steps + 1);
    for i in 0..steps {
        let angle = (i as f64 / steps as f64) * std::f64::consts::TAU;
        let dlat = km_to_deg_lat(radius_km) * angle.sin();
        let dlng = km_to_deg_lng(radius_km, lat) * angle.cos();
        ring.push([lng + dlng, lat + dlat]);
    }
    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    ring
}

/// Shoelace signed area of a ring in squared degrees. Positive for
/// counter-clockwise winding in the `[lng, lat]` plane.
pub fn signed_area(ring: &[[f64; 2]]) -> f64 {
    let mut sum = 0.0;
    for pair in ring.windows(2) {
        let [x0, y0] = pair[0];
        let [x1, y1] = pair[1];
        sum += x0 * y1 - x1 * y0;
    }
    0.5 * sum
}

/// True when the ring repeats its first vertex last (within 1e-9 degrees).
pub fn is_closed(ring: &[[f64; 2]]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(a), Some(b)) if ring.len() > 2 => {
            (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
        }
        _ => false,
    }
}

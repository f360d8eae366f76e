//! Vegetation columns: forest-region point fills that thin out with year
//! and keep clear of the city centres.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::cities::{CITY_CENTERS, FOREST_REGIONS};
use crate::dataset::SurfaceSample;
use crate::geo;
use crate::timeline::YEAR_MIN;

/// Parameters for [`generate`].
#[derive(Clone, Copy, Debug)]
pub struct VegetationParams {
    /// Point budget at the base year; later years retain a decayed share.
    pub count: usize,
    /// Data year; cover decays multiplicatively from [`YEAR_MIN`].
    pub year: i32,
    /// Base RNG seed; namespaced per region internally.
    pub seed: u64,
}

/// Share of cover retained per year since [`YEAR_MIN`].
const RETAIN_PER_YEAR: f64 = 0.985;
/// Flat-degree halo around city centres kept free of vegetation.
const CITY_EXCLUSION_DEG: f64 = 4.0;

/// Generate the vegetation fill, region by region in table order.
///
/// The yearly retained budget splits evenly across the forest regions. Each
/// region owns a namespaced RNG, so a smaller budget draws a stable prefix
/// of the same candidate stream; emitted counts are therefore exactly
/// non-increasing in year for a fixed seed. Candidates inside the city
/// exclusion halo are dropped.
pub fn generate(p: &VegetationParams) -> Vec<SurfaceSample> {
    let ns: u64 = 0x666F_7265_7374; // "forest"
    let years = (p.year - YEAR_MIN).max(0);
    let retained = (p.count as f64 * RETAIN_PER_YEAR.powi(years)) as usize;
    let per_region = retained / FOREST_REGIONS.len();
    let mut out = Vec::with_capacity(per_region * FOREST_REGIONS.len());
    for (index, region) in FOREST_REGIONS.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(p.seed ^ ns ^ index as u64);
        for _ in 0..per_region {
            let dlat = (rng.gen::<f64>() - 0.5) * region.spread;
            let dlng = (rng.gen::<f64>() - 0.5) * region.spread;
            let lat = region.lat + dlat;
            let lng = region.lng + dlng;
            if near_city(lat, lng) {
                continue;
            }
            out.push(SurfaceSample {
                position: [lng, lat],
                intensity: 0.6 + rng.gen::<f32>() * 0.4,
                weight: 50.0 + rng.gen::<f32>() * 50.0,
                height: 0.5 + rng.gen::<f32>() * 0.5,
            });
        }
    }
    out
}

/// True when a candidate falls inside any city's exclusion halo.
fn near_city(lat: f64, lng: f64) -> bool {
    CITY_CENTERS
        .iter()
        .any(|c| geo::flat_dist_deg(lat, lng, c.lat, c.lng) < CITY_EXCLUSION_DEG)
}

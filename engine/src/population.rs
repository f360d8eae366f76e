//! Population density cloud: a year-independent weight field over the
//! city table, for aggregation layers.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::cities::CITY_CENTERS;
use crate::dataset::LightSample;

/// Parameters for [`generate`].
#[derive(Clone, Copy, Debug)]
pub struct PopulationParams {
    /// Total point budget, split evenly across the city table.
    pub count: usize,
    /// Base RNG seed; namespaced internally.
    pub seed: u64,
}

/// Jitter width as a fraction of each city's `safe_spread`.
const SPREAD_FRAC: f64 = 0.35;

/// Generate the density cloud, emitted city by city in table order.
pub fn generate(p: &PopulationParams) -> Vec<LightSample> {
    let ns: u64 = 0x7065_6F70_6C65; // "people"
    let mut rng = StdRng::seed_from_u64(p.seed ^ ns);
    let per_city = p.count / CITY_CENTERS.len();
    let mut out = Vec::with_capacity(per_city * CITY_CENTERS.len());
    for city in &CITY_CENTERS {
        let spread = city.safe_spread * SPREAD_FRAC;
        for _ in 0..per_city {
            let dlng = (rng.gen::<f64>() - 0.5) * spread;
            let dlat = (rng.gen::<f64>() - 0.5) * spread;
            out.push(LightSample {
                position: [city.lng + dlng, city.lat + dlat],
                intensity: 0.3 + rng.gen::<f32>() * 0.7,
                weight: 20.0 + rng.gen::<f32>() * 80.0,
            });
        }
    }
    out
}

//! Temperature point cloud: urban heat cores inside a wider ambient halo.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::cities::CITY_CENTERS;
use crate::dataset::LightSample;
use crate::timeline::{self, YEAR_MIN};

/// Parameters for [`generate`].
#[derive(Clone, Copy, Debug)]
pub struct TemperatureParams {
    /// Total point budget, split evenly across the city table.
    pub count: usize,
    /// Data year; the halo widens and a warming offset raises intensities.
    pub year: i32,
    /// Base RNG seed; namespaced internally.
    pub seed: u64,
}

/// Intensity added per year since [`YEAR_MIN`].
const WARMING_PER_YEAR: f32 = 0.004;

/// Generate the temperature cloud, emitted city by city in table order.
///
/// Each city's budget splits evenly between a hot core and an ambient halo.
/// Jitter widths are fractions of the city's `safe_spread`; the halo widens
/// with [`timeline::year_frac`]. A linear warming offset is added to every
/// intensity before clamping to `[0, 1]`.
pub fn generate(p: &TemperatureParams) -> Vec<LightSample> {
    let ns: u64 = 0x6865_6174; // "heat"
    let mut rng = StdRng::seed_from_u64(p.seed ^ ns);
    let per_city = p.count / CITY_CENTERS.len();
    let core_n = per_city / 2;
    let yf = timeline::year_frac(p.year);
    let warming = WARMING_PER_YEAR * (p.year - YEAR_MIN).max(0) as f32;
    let halo_frac = 0.55 + 0.25 * yf;
    let mut out = Vec::with_capacity(per_city * CITY_CENTERS.len());
    for city in &CITY_CENTERS {
        for i in 0..per_city {
            let (spread_frac, intensity_base, intensity_span, weight_base, weight_span) =
                if i < core_n {
                    (0.30, 0.85, 0.15, 70.0, 30.0)
                } else {
                    (halo_frac, 0.5, 0.35, 30.0, 40.0)
                };
            let spread = city.safe_spread * spread_frac;
            let dlng = (rng.gen::<f64>() - 0.5) * spread;
            let dlat = (rng.gen::<f64>() - 0.5) * spread;
            let intensity =
                (intensity_base + rng.gen::<f32>() * intensity_span + warming).clamp(0.0, 1.0);
            let weight = weight_base + rng.gen::<f32>() * weight_span;
            out.push(LightSample {
                position: [city.lng + dlng, city.lat + dlat],
                intensity,
                weight,
            });
        }
    }
    out
}

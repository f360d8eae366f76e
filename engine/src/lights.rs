//! Night-lights point cloud: concentric luminous clusters around each city.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::cities::{CityCenter, CITY_CENTERS};
use crate::dataset::LightSample;
use crate::timeline;

/// Parameters for [`generate`].
#[derive(Clone, Copy, Debug)]
pub struct LightsParams {
    /// Total point budget, split evenly across the city table. Budgets below
    /// the table size floor to an empty dataset.
    pub count: usize,
    /// Data year; mid-ring and suburb footprints widen towards the
    /// projection horizon.
    pub year: i32,
    /// Base RNG seed; namespaced internally.
    pub seed: u64,
}

/// Share of each city's budget placed in the dense core.
const CORE_SHARE: f64 = 0.40;
/// Share placed in the mid ring; the remainder goes to the suburbs.
const MID_SHARE: f64 = 0.35;

/// Generate the night-lights cloud.
///
/// Samples are emitted city by city in table order. Each city splits its
/// budget into a tight high-intensity core, a mid ring and a dim suburb
/// fringe whose jitter widths are fractions of the city's `safe_spread`;
/// the outer fractions widen with [`timeline::year_frac`], so mean spread is
/// non-decreasing in year while no sample ever leaves half the safe spread.
pub fn generate(p: &LightsParams) -> Vec<LightSample> {
    let ns: u64 = 0x6C69_6768_7473; // "lights"
    let mut rng = StdRng::seed_from_u64(p.seed ^ ns);
    let per_city = p.count / CITY_CENTERS.len();
    let yf = timeline::year_frac(p.year);
    let mut out = Vec::with_capacity(per_city * CITY_CENTERS.len());
    for city in &CITY_CENTERS {
        let core_n = (per_city as f64 * CORE_SHARE) as usize;
        let mid_n = (per_city as f64 * MID_SHARE) as usize;
        let suburb_n = per_city - core_n - mid_n;
        cluster(&mut rng, &mut out, city, core_n, 0.25, 0.8, 0.2, 80.0, 20.0);
        cluster(&mut rng, &mut out, city, mid_n, 0.45 + 0.10 * yf, 0.5, 0.3, 40.0, 40.0);
        cluster(&mut rng, &mut out, city, suburb_n, 0.60 + 0.40 * yf, 0.2, 0.3, 10.0, 30.0);
    }
    out
}

/// One sub-cluster: `n` samples jittered uniformly within
/// `spread_frac * safe_spread`, centred on the city.
fn cluster(
    rng: &mut StdRng,
    out: &mut Vec<LightSample>,
    city: &CityCenter,
    n: usize,
    spread_frac: f64,
    intensity_base: f32,
    intensity_span: f32,
    weight_base: f32,
    weight_span: f32,
) {
    let spread = city.safe_spread * spread_frac;
    for _ in 0..n {
        let dlng = (rng.gen::<f64>() - 0.5) * spread;
        let dlat = (rng.gen::<f64>() - 0.5) * spread;
        let intensity = (intensity_base + rng.gen::<f32>() * intensity_span).clamp(0.0, 1.0);
        let weight = weight_base + rng.gen::<f32>() * weight_span;
        out.push(LightSample {
            position: [city.lng + dlng, city.lat + dlat],
            intensity,
            weight,
        });
    }
}

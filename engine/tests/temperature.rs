use engine::cities::CITY_CENTERS;
use engine::dataset::LightSample;
use engine::geo;
use engine::temperature::{self, TemperatureParams};

fn mean_spread(samples: &[LightSample]) -> f64 {
    let per_city = samples.len() / CITY_CENTERS.len();
    let mut sum = 0.0;
    for (i, chunk) in samples.chunks(per_city).enumerate() {
        let city = &CITY_CENTERS[i];
        for s in chunk {
            sum += geo::flat_dist_deg(s.position[1], s.position[0], city.lat, city.lng);
        }
    }
    sum / samples.len() as f64
}

#[test]
fn zero_count_yields_empty() {
    let out = temperature::generate(&TemperatureParams { count: 0, year: 2012, seed: 7 });
    assert!(out.is_empty());
}

#[test]
fn deterministic_for_equal_params() {
    let p = TemperatureParams { count: 600, year: 2022, seed: 9 };
    assert_eq!(temperature::generate(&p), temperature::generate(&p));
}

#[test]
fn intensity_clamped_at_projection_horizon() {
    let out = temperature::generate(&TemperatureParams { count: 600, year: 2050, seed: 3 });
    assert!(out.iter().all(|s| (0.0..=1.0).contains(&s.intensity)));
    // The warming offset pushes every core sample past 1.0 by 2050, so the
    // clamp must be visible in the output.
    assert!(
        out.iter().any(|s| s.intensity == 1.0),
        "expected saturated core intensities at the horizon"
    );
}

#[test]
fn spread_grows_with_year() {
    let early = temperature::generate(&TemperatureParams { count: 600, year: 2012, seed: 11 });
    let late = temperature::generate(&TemperatureParams { count: 600, year: 2040, seed: 11 });
    let (a, b) = (mean_spread(&early), mean_spread(&late));
    assert!(b > a, "spread 2040={} should exceed 2012={}", b, a);
}

#[test]
fn warming_raises_mean_intensity() {
    let early = temperature::generate(&TemperatureParams { count: 600, year: 2012, seed: 11 });
    let late = temperature::generate(&TemperatureParams { count: 600, year: 2040, seed: 11 });
    let mean = |v: &[LightSample]| v.iter().map(|s| s.intensity as f64).sum::<f64>() / v.len() as f64;
    assert!(mean(&late) > mean(&early));
}

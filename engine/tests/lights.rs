use engine::cities::CITY_CENTERS;
use engine::dataset::LightSample;
use engine::geo;
use engine::lights::{self, LightsParams};

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
    let out = lights::generate(&LightsParams { count: 0, year: 2012, seed: 7 });
    assert!(out.is_empty());
}

#[test]
fn deterministic_for_equal_params() {
    let p = LightsParams { count: 600, year: 2020, seed: 42 };
    let a = lights::generate(&p);
    let b = lights::generate(&p);
    assert_eq!(a, b);
}

#[test]
fn seeds_diverge() {
    let a = lights::generate(&LightsParams { count: 600, year: 2020, seed: 1 });
    let b = lights::generate(&LightsParams { count: 600, year: 2020, seed: 2 });
    assert_ne!(a, b);
}

#[test]
fn budget_splits_evenly_across_cities() {
    let out = lights::generate(&LightsParams { count: 600, year: 2012, seed: 7 });
    assert_eq!(out.len(), 600);
    let small = lights::generate(&LightsParams { count: 19, year: 2012, seed: 7 });
    assert!(small.is_empty(), "sub-table budgets floor to empty");
}

#[test]
fn intensity_clamped_across_year_domain() {
    for year in [2012, 2024, 2050] {
        let out = lights::generate(&LightsParams { count: 600, year, seed: 3 });
        for s in &out {
            assert!(
                (0.0..=1.0).contains(&s.intensity),
                "year={} intensity={}",
                year,
                s.intensity
            );
        }
    }
}

#[test]
fn spread_grows_with_year() {
    let early = lights::generate(&LightsParams { count: 600, year: 2012, seed: 11 });
    let late = lights::generate(&LightsParams { count: 600, year: 2035, seed: 11 });
    let (a, b) = (mean_spread(&early), mean_spread(&late));
    assert!(b > a, "spread 2035={} should exceed 2012={}", b, a);
}

#[test]
fn points_stay_within_half_safe_spread() {
    let out = lights::generate(&LightsParams { count: 600, year: 2050, seed: 5 });
    let per_city = out.len() / CITY_CENTERS.len();
    for (i, chunk) in out.chunks(per_city).enumerate() {
        let city = &CITY_CENTERS[i];
        let bound = city.safe_spread / 2.0 + 1e-9;
        for s in chunk {
            let dlng = (s.position[0] - city.lng).abs();
            let dlat = (s.position[1] - city.lat).abs();
            assert!(
                dlng <= bound && dlat <= bound,
                "{}: dlng={} dlat={} bound={}",
                city.name,
                dlng,
                dlat,
                bound
            );
        }
    }
}

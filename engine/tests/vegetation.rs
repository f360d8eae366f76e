use engine::cities::CITY_CENTERS;
use engine::geo;
use engine::vegetation::{self, VegetationParams};

#[test]
fn zero_count_yields_empty() {
    let out = vegetation::generate(&VegetationParams { count: 0, year: 2012, seed: 7 });
    assert!(out.is_empty());
}

#[test]
fn deterministic_for_equal_params() {
    let p = VegetationParams { count: 1200, year: 2020, seed: 42 };
    assert_eq!(vegetation::generate(&p), vegetation::generate(&p));
}

#[test]
fn count_never_grows_with_year() {
    let mut prev = usize::MAX;
    for year in [2012, 2016, 2020, 2024, 2035, 2050] {
        let out = vegetation::generate(&VegetationParams { count: 1200, year, seed: 5 });
        assert!(
            out.len() <= prev,
            "year={} emitted {} after {} the year before",
            year,
            out.len(),
            prev
        );
        prev = out.len();
    }
}

#[test]
fn decay_is_visible_over_the_timeline() {
    let early = vegetation::generate(&VegetationParams { count: 1200, year: 2012, seed: 5 });
    let late = vegetation::generate(&VegetationParams { count: 1200, year: 2050, seed: 5 });
    assert!(
        late.len() < early.len(),
        "2050 count {} should sit below 2012 count {}",
        late.len(),
        early.len()
    );
}

#[test]
fn keeps_clear_of_city_centres() {
    let out = vegetation::generate(&VegetationParams { count: 1200, year: 2012, seed: 9 });
    for s in &out {
        for city in &CITY_CENTERS {
            let d = geo::flat_dist_deg(s.position[1], s.position[0], city.lat, city.lng);
            assert!(d >= 4.0, "sample at {:?} sits {}deg from {}", s.position, d, city.name);
        }
    }
}

#[test]
fn fields_stay_in_range() {
    let out = vegetation::generate(&VegetationParams { count: 1200, year: 2018, seed: 3 });
    assert!(!out.is_empty());
    for s in &out {
        assert!((0.6..=1.0).contains(&s.intensity), "intensity={}", s.intensity);
        assert!((50.0..=100.0).contains(&s.weight), "weight={}", s.weight);
        assert!((0.5..=1.0).contains(&s.height), "height={}", s.height);
    }
}

use engine::geo;
use engine::projection::{self, current_radius, ProjectionParams};

/// Longitude radius of a ring: first vertex sits at angle zero, and the mean
/// of the distinct vertices recovers the centre longitude exactly.
fn lng_radius(ring: &[[f64; 2]]) -> f64 {
    let distinct = ring.len() - 1;
    let centre = ring.iter().take(distinct).map(|v| v[0]).sum::<f64>() / distinct as f64;
    ring[0][0] - centre
}

#[test]
fn covers_the_first_fifteen_cities() {
    let fc = projection::generate(&ProjectionParams { base_year: 2024, growth_percent: 10.0 });
    assert_eq!(fc.features.len(), 15);
}

#[test]
fn rings_are_closed_thirteen_vertex_loops() {
    let fc = projection::generate(&ProjectionParams { base_year: 2024, growth_percent: 25.0 });
    for feature in &fc.features {
        let ring = &feature.geometry.coordinates[0];
        assert_eq!(ring.len(), 13);
        assert!(geo::is_closed(ring));
    }
}

#[test]
fn future_ring_exceeds_current_footprint() {
    let base_year = 2024;
    let fc = projection::generate(&ProjectionParams { base_year, growth_percent: 10.0 });
    let current = current_radius(base_year);
    for feature in &fc.features {
        let name = feature.properties.name.clone().unwrap_or_default();
        let future = lng_radius(&feature.geometry.coordinates[0]);
        assert!(future > current, "{}: future={} current={}", name, future, current);
    }
}

#[test]
fn zero_growth_matches_current_footprint() {
    let fc = projection::generate(&ProjectionParams { base_year: 2020, growth_percent: 0.0 });
    let current = current_radius(2020);
    let radius = lng_radius(&fc.features[0].geometry.coordinates[0]);
    assert!((radius - current).abs() < 1e-9, "radius={} current={}", radius, current);
}

#[test]
fn properties_label_the_projection() {
    let fc = projection::generate(&ProjectionParams { base_year: 2024, growth_percent: 33.0 });
    for feature in &fc.features {
        let name = feature.properties.name.as_deref().unwrap_or("");
        assert!(name.ends_with(" (Projected)"), "name={:?}", name);
        assert_eq!(feature.properties.projection_year, Some(2034));
        assert_eq!(feature.properties.growth_percent, Some(33.0));
        assert!(feature.properties.year.is_none());
    }
}

use engine::geo;
use engine::mask;

#[test]
fn inverted_mask_has_world_rect_and_hole() {
    let feature = mask::inverted_mask(35.7, 139.7, 600.0, 64);
    assert_eq!(feature.geometry.coordinates.len(), 2);
    let outer = &feature.geometry.coordinates[0];
    let hole = &feature.geometry.coordinates[1];
    assert_eq!(outer.len(), 5);
    assert_eq!(outer[0], [-180.0, -85.0]);
    assert_eq!(outer[2], [180.0, 85.0]);
    assert!(geo::is_closed(outer));
    assert_eq!(hole.len(), 64 + 1, "hole keeps the configured step count");
    assert!(geo::is_closed(hole));
}

#[test]
fn hole_winds_opposite_to_outer_ring() {
    let feature = mask::inverted_mask(19.1, 72.9, 600.0, 64);
    let outer = geo::signed_area(&feature.geometry.coordinates[0]);
    let hole = geo::signed_area(&feature.geometry.coordinates[1]);
    assert!(outer > 0.0, "outer ring should wind counter-clockwise, area {}", outer);
    assert!(hole < 0.0, "hole should wind clockwise, area {}", hole);
}

#[test]
fn hole_surrounds_the_centre() {
    let (lat, lng) = (40.7, -74.0);
    let feature = mask::inverted_mask(lat, lng, mask::SPOTLIGHT_RADIUS_KM, mask::DEFAULT_STEPS);
    let hole = &feature.geometry.coordinates[1];
    let r_lat = geo::km_to_deg_lat(mask::SPOTLIGHT_RADIUS_KM);
    for v in hole {
        let d = geo::flat_dist_deg(v[1], v[0], lat, lng);
        assert!(d >= r_lat - 1e-9, "vertex {:?} inside the window radius", v);
    }
}

#[test]
fn spotlight_ring_matches_circle_tracer() {
    let ring = mask::spotlight_ring(51.5, -0.1, 600.0, 32);
    assert_eq!(ring.len(), 33);
    assert!(geo::is_closed(&ring));
    assert!(geo::signed_area(&ring) > 0.0);
}

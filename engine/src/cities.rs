//! Fixed geography: the city table every point generator samples around,
//! the forest regions vegetation fills, and the quick-travel presets.

/// A metropolitan centre with a per-city jitter bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CityCenter {
    /// Display name.
    pub name: &'static str,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Maximum jitter footprint in degrees. Point generators keep every
    /// emitted sample within half of this around the centre; boundary
    /// generators keep ring radii within the whole of it.
    pub safe_spread: f64,
}

const fn city(name: &'static str, lat: f64, lng: f64, safe_spread: f64) -> CityCenter {
    CityCenter { name, lat, lng, safe_spread }
}

/// The 20 metropolitan centres datasets are distributed across, in a fixed
/// order generators and tests rely on. Coastal and island cities carry
/// tighter spreads than inland sprawl.
pub const CITY_CENTERS: [CityCenter; 20] = [
    city("New York", 40.7, -74.0, 4.5),
    city("London", 51.5, -0.1, 4.0),
    city("Tokyo", 35.7, 139.7, 4.0),
    city("Mumbai", 19.1, 72.9, 3.5),
    city("Shanghai", 31.2, 121.5, 4.5),
    city("São Paulo", -23.5, -46.6, 5.0),
    city("Lagos", 6.5, 3.4, 3.5),
    city("Cairo", 30.0, 31.2, 5.5),
    city("Sydney", -33.9, 151.2, 4.0),
    city("Moscow", 55.8, 37.6, 6.0),
    city("Delhi", 28.6, 77.2, 6.0),
    city("Beijing", 39.9, 116.4, 5.5),
    city("Los Angeles", 34.1, -118.2, 5.0),
    city("Paris", 48.9, 2.4, 4.5),
    city("Istanbul", 41.0, 29.0, 4.0),
    city("Karachi", 24.9, 67.1, 4.0),
    city("Buenos Aires", -34.6, -58.4, 4.5),
    city("Jakarta", -6.2, 106.8, 3.5),
    city("Seoul", 37.6, 127.0, 4.0),
    city("Singapore", 1.3, 103.8, 2.5),
];

/// Table lookup by display name.
pub fn city_named(name: &str) -> Option<&'static CityCenter> {
    CITY_CENTERS.iter().find(|c| c.name == name)
}

/// A forested region the vegetation generator fills.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForestRegion {
    /// Display name.
    pub name: &'static str,
    /// Latitude of the region centre in degrees.
    pub lat: f64,
    /// Longitude of the region centre in degrees.
    pub lng: f64,
    /// Uniform jitter footprint in degrees.
    pub spread: f64,
}

const fn forest(name: &'static str, lat: f64, lng: f64, spread: f64) -> ForestRegion {
    ForestRegion { name, lat, lng, spread }
}

/// The six forest regions, in a fixed order.
pub const FOREST_REGIONS: [ForestRegion; 6] = [
    forest("Amazon", 0.0, -60.0, 25.0),
    forest("Congo Basin", 5.0, 20.0, 15.0),
    forest("Borneo", 0.0, 115.0, 12.0),
    forest("Pacific Northwest", 45.0, -120.0, 10.0),
    forest("Siberian Taiga", 60.0, 90.0, 20.0),
    forest("East Australia", -35.0, 150.0, 8.0),
];

/// Zoom level quick travel flies to.
pub const FLY_TO_ZOOM: f32 = 4.0;

/// Quick-travel presets: the first ten table cities.
pub fn fly_to_cities() -> &'static [CityCenter] {
    &CITY_CENTERS[..10]
}

//! Value types the generators emit and the GeoJSON-like wire shape the
//! rendering host consumes.

use serde::Serialize;

/// A weighted luminous point on the globe.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LightSample {
    /// `[lng, lat]` in degrees.
    pub position: [f64; 2],
    /// Normalised brightness in `[0, 1]`.
    pub intensity: f32,
    /// Aggregation weight for density layers.
    pub weight: f32,
}

/// A surface point with canopy height, emitted by the vegetation layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SurfaceSample {
    /// `[lng, lat]` in degrees.
    pub position: [f64; 2],
    /// Normalised cover density in `[0, 1]`.
    pub intensity: f32,
    /// Aggregation weight.
    pub weight: f32,
    /// Canopy height scale in `[0.5, 1]`.
    pub height: f32,
}

/// A polygon ring: `[lng, lat]` vertices, closed by repeating the first.
pub type Ring = Vec<[f64; 2]>;

/// Properties attached to a generated polygon feature. `None` fields are
/// omitted from the serialized form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    /// Feature label, usually a city name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Data year the feature was generated for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Target year of a forward projection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_year: Option<i32>,
    /// Growth assumption behind a projection, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_percent: Option<f32>,
}

/// Polygon geometry node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polygon {
    /// Always `"Polygon"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Exterior ring first, then holes; all closed.
    pub coordinates: Vec<Ring>,
}

/// A feature with polygon geometry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolygonFeature {
    /// Always `"Feature"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Polygon geometry.
    pub geometry: Polygon,
    /// Attached properties.
    pub properties: Properties,
}

impl PolygonFeature {
    /// Feature with a single exterior ring.
    pub fn new(ring: Ring, properties: Properties) -> Self {
        Self::with_rings(vec![ring], properties)
    }

    /// Feature with an exterior ring followed by holes.
    pub fn with_rings(rings: Vec<Ring>, properties: Properties) -> Self {
        Self {
            kind: "Feature",
            geometry: Polygon { kind: "Polygon", coordinates: rings },
            properties,
        }
    }
}

/// A collection of polygon features.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureCollection {
    /// Always `"FeatureCollection"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Member features.
    pub features: Vec<PolygonFeature>,
}

impl FeatureCollection {
    /// Collection over `features`.
    pub fn new(features: Vec<PolygonFeature>) -> Self {
        Self { kind: "FeatureCollection", features }
    }
}

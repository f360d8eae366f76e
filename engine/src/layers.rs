//! Layer identity and the visibility set published on every scene entry.

/// The five renderable data layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Night-lights point cloud.
    NightLights,
    /// Urban boundary polygons.
    UrbanBoundaries,
    /// Vegetation cover columns.
    Vegetation,
    /// Temperature heat cloud.
    Temperature,
    /// Forward-projection ghost rings.
    PredictiveGhost,
}

impl Layer {
    /// All layers, in publish order.
    pub const ALL: [Layer; 5] = [
        Layer::NightLights,
        Layer::UrbanBoundaries,
        Layer::Vegetation,
        Layer::Temperature,
        Layer::PredictiveGhost,
    ];

    /// Display label used by layer panels.
    pub fn label(self) -> &'static str {
        match self {
            Layer::NightLights => "Night Lights",
            Layer::UrbanBoundaries => "Urban Growth",
            Layer::Vegetation => "Green Cover",
            Layer::Temperature => "Temperature",
            Layer::PredictiveGhost => "Future Projection",
        }
    }

    /// Display colour as RGB bytes.
    pub fn color(self) -> [u8; 3] {
        match self {
            Layer::NightLights => [255, 180, 50],
            Layer::UrbanBoundaries => [100, 200, 255],
            Layer::Vegetation => [34, 197, 94],
            Layer::Temperature => [249, 115, 22],
            Layer::PredictiveGhost => [168, 85, 247],
        }
    }
}

/// Visibility flags for every known layer. `Default` hides everything.
///
/// Scene entries publish a complete set, so switching scenes is always a
/// full reset followed by the scene's own flags; nothing leaks across.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayerSet {
    /// Night-lights point cloud.
    pub night_lights: bool,
    /// Urban boundary polygons.
    pub urban_boundaries: bool,
    /// Vegetation cover columns.
    pub vegetation: bool,
    /// Temperature heat cloud.
    pub temperature: bool,
    /// Forward-projection ghost rings.
    pub predictive_ghost: bool,
}

impl LayerSet {
    /// The empty set.
    pub const NONE: LayerSet = LayerSet {
        night_lights: false,
        urban_boundaries: false,
        vegetation: false,
        temperature: false,
        predictive_ghost: false,
    };

    /// Copy of the set with `layer` visible; const so scene tables can
    /// chain it.
    pub const fn with(mut self, layer: Layer) -> Self {
        match layer {
            Layer::NightLights => self.night_lights = true,
            Layer::UrbanBoundaries => self.urban_boundaries = true,
            Layer::Vegetation => self.vegetation = true,
            Layer::Temperature => self.temperature = true,
            Layer::PredictiveGhost => self.predictive_ghost = true,
        }
        self
    }

    /// Visibility of one layer.
    pub fn get(&self, layer: Layer) -> bool {
        match layer {
            Layer::NightLights => self.night_lights,
            Layer::UrbanBoundaries => self.urban_boundaries,
            Layer::Vegetation => self.vegetation,
            Layer::Temperature => self.temperature,
            Layer::PredictiveGhost => self.predictive_ghost,
        }
    }

    /// Set the visibility of one layer.
    pub fn set(&mut self, layer: Layer, visible: bool) {
        match layer {
            Layer::NightLights => self.night_lights = visible,
            Layer::UrbanBoundaries => self.urban_boundaries = visible,
            Layer::Vegetation => self.vegetation = visible,
            Layer::Temperature => self.temperature = visible,
            Layer::PredictiveGhost => self.predictive_ghost = visible,
        }
    }

    /// Flip the visibility of one layer.
    pub fn toggle(&mut self, layer: Layer) {
        let visible = self.get(layer);
        self.set(layer, !visible);
    }

    /// Layers currently visible, in publish order.
    pub fn active(&self) -> impl Iterator<Item = Layer> {
        let set = *self;
        Layer::ALL.into_iter().filter(move |layer| set.get(*layer))
    }
}

//! Dataset writers for piping generated layers to external tooling.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;

use engine::dataset::{FeatureCollection, LightSample, SurfaceSample};

/// Write a feature collection as pretty-printed GeoJSON.
pub fn write_geojson(path: &Path, collection: &FeatureCollection) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), collection)
        .with_context(|| format!("serialize {}", path.display()))?;
    Ok(())
}

/// Write light samples as CSV, one row per sample.
///
/// Format:
/// - Header: `lng,lat,intensity,weight`
/// - Positions in degrees, intensity in `[0, 1]`.
pub fn write_samples_csv(path: &Path, samples: &[LightSample]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "lng,lat,intensity,weight")?;
    for s in samples {
        writeln!(file, "{},{},{},{}", s.position[0], s.position[1], s.intensity, s.weight)?;
    }
    Ok(())
}

/// Write surface samples as CSV, one row per sample, with the canopy height
/// column appended.
pub fn write_surface_csv(path: &Path, samples: &[SurfaceSample]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "lng,lat,intensity,weight,height")?;
    for s in samples {
        writeln!(
            file,
            "{},{},{},{},{}",
            s.position[0], s.position[1], s.intensity, s.weight, s.height
        )?;
    }
    Ok(())
}

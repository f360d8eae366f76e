//! Nocturne core: the procedural data model behind the globe story.
//! CPU-only and deterministic: seeded dataset generators for the five
//! renderable layers, spotlight mask geometry, the fixed storyboard, and the
//! playback machine plus value stores that drive a rendering host through
//! callbacks. No wall clock, no I/O, no GPU.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod camera;
pub mod cities;
pub mod dataset;
pub mod geo;
pub mod layers;
pub mod lights;
pub mod mask;
pub mod population;
pub mod projection;
pub mod sequencer;
pub mod split;
pub mod storyboard;
pub mod temperature;
pub mod timeline;
pub mod urban;
pub mod vegetation;

/// Returns the engine version string from Cargo metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_semver_like() {
        assert!(version().split('.').count() >= 3);
    }
}

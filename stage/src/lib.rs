//! Host composition root for the globe story: owns the state stores and the
//! playback machine, receives scene callbacks, and assembles render-ready
//! datasets for whatever draws them.
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod export;
pub mod session;

pub use session::{Datasets, Session, Spotlight};

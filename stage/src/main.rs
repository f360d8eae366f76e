//! Headless tour runner: plays the guided storyboard against the real
//! clock, logging scene entries and progress, or exports the generated
//! datasets and exits.
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stage::{export, Session};

#[derive(Parser)]
#[command(name = "stage", about = "Globe-story tour runner and dataset exporter")]
struct Args {
    /// Session seed shared by every generator.
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Point budget for the point-cloud layers.
    #[arg(long, default_value_t = 500)]
    count: usize,

    /// Clock multiplier for the tour (2.0 plays twice as fast).
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Pin the data year instead of starting at the timeline minimum.
    #[arg(long)]
    year: Option<i32>,

    /// Write the five datasets into this directory and exit.
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut session = Session::new(args.seed).with_point_count(args.count);
    if let Some(year) = args.year {
        session.set_year(year);
    }

    if let Some(dir) = args.export {
        return export_all(&mut session, &dir);
    }
    run_tour(&mut session, args.speed);
    Ok(())
}

fn export_all(session: &mut Session, dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let year = session.year();
    let data = session.datasets();
    export::write_samples_csv(&dir.join("night_lights.csv"), &data.night_lights)?;
    export::write_samples_csv(&dir.join("temperature.csv"), &data.temperature)?;
    export::write_surface_csv(&dir.join("vegetation.csv"), &data.vegetation)?;
    export::write_geojson(&dir.join("urban.geojson"), &data.urban)?;
    export::write_geojson(&dir.join("predictive.geojson"), &data.predictive)?;
    info!(target: "stage", year, dir = %dir.display(), "datasets exported");
    Ok(())
}

fn run_tour(session: &mut Session, speed: f64) {
    let start = Instant::now();
    let speed = speed.max(0.01);
    let clock = |start: Instant| Duration::from_secs_f64(start.elapsed().as_secs_f64() * speed);

    session.start_tour(clock(start));
    info!(
        target: "stage",
        engine = engine::version(),
        scenes = engine::storyboard::STORYBOARD.len(),
        speed,
        "tour started"
    );

    let mut last_scene = "";
    while session.touring() {
        let now = clock(start);
        session.frame(now);
        if let Some(scene) = session.current_scene() {
            if scene.id != last_scene {
                last_scene = scene.id;
                if let Some(flight) = session.last_flight() {
                    info!(
                        target: "stage",
                        lat = flight.view.latitude,
                        lng = flight.view.longitude,
                        zoom = flight.view.zoom,
                        duration_ms = flight.duration_ms,
                        "camera flight"
                    );
                }
                info!(
                    target: "stage",
                    year = session.year(),
                    progress = format!("{:.0}%", session.tour_progress(now) * 100.0),
                    "{}", scene.title
                );
            }
        }
        std::thread::sleep(Duration::from_millis(16));
    }
    info!(target: "stage", "tour complete");
}

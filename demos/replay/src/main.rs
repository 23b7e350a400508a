//! replay — drive a navigation session from a recorded sensor track.
//!
//! Loads a tower dataset (GeoJSON or CSV, chosen by extension), then feeds a
//! CSV track of timestamped location and compass events through a
//! `NavigationSession`, printing what a compass screen would show after each
//! processed update.
//!
//! ```text
//! cargo run -p replay -- --towers demos/replay/data/towers.geojson \
//!                        --track  demos/replay/data/track.csv
//! ```
//!
//! Set `RUST_LOG=tc_nav=debug` to see nearest-target rescans.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use tc_core::{GeoPoint, NavConfig, Timestamp};
use tc_heading::{HeadingSample, RawOrientation};
use tc_nav::{DisplaySink, NavigationSession, Phase, Reading, Status, TextDisplay, UpdateOutcome};
use tc_spatial::{load_csv_path, load_geojson_path, DatasetOptions};

#[derive(Parser, Debug)]
#[command(name = "replay")]
#[command(about = "Replay a recorded sensor track against a tower dataset", long_about = None)]
struct Args {
    /// Tower dataset (.geojson/.json or .csv)
    #[arg(long)]
    towers: PathBuf,

    /// Sensor track CSV with header `t_ms,event,lat,lon,heading`
    #[arg(long)]
    track: PathBuf,

    /// Optional JSON file overriding `NavConfig` fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Feature property holding the tower name
    #[arg(long, default_value = "name")]
    name_key: String,

    /// Feature property holding the tower's county
    #[arg(long, default_value = "county")]
    category_key: String,
}

// ── Track ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Event {
    Location,
    Compass,
    Alpha,
}

#[derive(Debug, Deserialize)]
struct TrackRow {
    t_ms:    u64,
    event:   Event,
    lat:     Option<f64>,
    lon:     Option<f64>,
    heading: Option<f64>,
}

// ── Console sink ──────────────────────────────────────────────────────────────

/// Wraps a [`TextDisplay`] and prints whenever its text changes.
struct Console {
    display: TextDisplay,
    now:     Timestamp,
}

impl DisplaySink for Console {
    fn on_reading(&mut self, reading: &Reading) {
        self.display.on_reading(reading);
        let needle = self.display.needle.rotation_deg();
        println!("[{}] {} | needle {needle:.0}°", self.now, self.display.info.replace('\n', " | "));
    }

    fn on_waiting(&mut self, phase: Phase) {
        self.display.on_waiting(phase);
        println!("[{}] {} ({phase})", self.now, self.display.info);
    }

    fn on_status(&mut self, status: &Status) {
        self.display.on_status(status);
        let tag = if status.is_error() { "error" } else { "status" };
        println!("[{}] {tag}: {status}", self.now);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => NavConfig::default(),
    };
    tracing::info!(?config, "starting replay");

    let mut session = NavigationSession::new(config)?;
    let mut console = Console { display: TextDisplay::new(), now: Timestamp::ZERO };

    let options = DatasetOptions {
        name_key: args.name_key.clone(),
        category_key: args.category_key.clone(),
        ..DatasetOptions::default()
    };
    let dataset = load_towers(&args.towers, &options);
    // A failed load is reported through the console; the replay carries on
    // so the waiting phases are still visible.
    if let Err(e) = session.load_dataset(dataset, &mut console) {
        tracing::warn!(error = %e, "continuing without towers");
    }

    let mut processed = 0usize;
    let mut throttled = 0usize;
    let mut reader = csv::Reader::from_path(&args.track)
        .with_context(|| format!("opening track {}", args.track.display()))?;
    for (i, row) in reader.deserialize::<TrackRow>().enumerate() {
        let row = row.with_context(|| format!("track row {}", i + 1))?;
        let now = Timestamp(row.t_ms);
        console.now = now;

        let outcome = match row.event {
            Event::Location => {
                let (Some(lat), Some(lon)) = (row.lat, row.lon) else {
                    bail!("track row {}: location event needs lat and lon", i + 1);
                };
                let position = GeoPoint::try_new(lat, lon)
                    .with_context(|| format!("track row {}", i + 1))?;
                session.on_location(now, position, &mut console)
            }
            Event::Compass => {
                let heading = HeadingSample::new(required_heading(&row, i)?)?;
                session.on_heading(now, heading, &mut console)
            }
            Event::Alpha => {
                let raw = RawOrientation::Alpha(required_heading(&row, i)?);
                session.on_orientation(now, raw, &mut console)?
            }
        };

        match outcome {
            UpdateOutcome::Throttled => throttled += 1,
            UpdateOutcome::Processed(_) => processed += 1,
        }
    }

    println!();
    println!("Replay complete: {processed} updates processed, {throttled} throttled");
    println!("Final phase: {}", session.state().phase());
    if let Some(poi) = session.state().nearest_poi() {
        println!("Nearest tower: {poi}");
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: &Path) -> Result<NavConfig> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config: NavConfig = serde_json::from_reader(file)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn load_towers(path: &Path, options: &DatasetOptions) -> tc_spatial::SpatialResult<tc_spatial::Dataset> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        load_csv_path(path, options)
    } else {
        load_geojson_path(path, options)
    }
}

fn required_heading(row: &TrackRow, i: usize) -> Result<f64> {
    row.heading
        .with_context(|| format!("track row {}: {:?} event needs a heading", i + 1, row.event))
}

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use travelmap::config::MapConfig;
use travelmap::model::{load_visits, Visit};
use travelmap::{draw_travel_map, PngPresenter, ProjectionKind, RasterCanvas};
#[cfg(feature = "window")]
use travelmap::WindowPresenter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a travel map of visited places", long_about = None)]
struct Cli {
    /// JSON file with an array of {"name", "lat", "lon"} visits
    #[arg(short, long)]
    visits: Option<PathBuf>,

    /// Inline visit as NAME:LAT:LON (repeatable, appended after --visits)
    #[arg(long = "visit", value_name = "NAME:LAT:LON")]
    inline_visits: Vec<Visit>,

    /// Projection used for the map
    #[arg(short, long, value_enum, default_value_t = ProjectionKind::Globe)]
    projection: ProjectionKind,

    /// Write the map to this image file instead of opening a window
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TrueType font for labels and the caption (defaults to the bundled DejaVu Sans)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Width and height of the canvas in pixels
    #[arg(long, default_value_t = 800)]
    size: u32,

    /// Globe radius in pixels
    #[arg(long, default_value_t = 280.0)]
    radius: f64,

    /// Title of the map
    #[arg(long)]
    title: Option<String>,

    /// Home town named when there are no visits
    #[arg(long)]
    home: Option<String>,

    /// Longitude to face the viewer (defaults to the mean of all visits)
    #[arg(long, allow_negative_numbers = true)]
    center_lon: Option<f64>,
}

impl Cli {
    fn map_config(&self) -> MapConfig {
        let defaults = MapConfig::default();
        MapConfig {
            width: self.size,
            height: self.size,
            title: self.title.clone().unwrap_or(defaults.title),
            radius: self.radius,
            center_lon: self.center_lon,
            home: self.home.clone().unwrap_or(defaults.home),
            font_path: self.font.clone(),
            ..MapConfig::default()
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.map_config();

    let mut visits = match &cli.visits {
        Some(path) => load_visits(path)
            .with_context(|| format!("Failed to load visits from {:?}", path))?,
        None => Vec::new(),
    };
    visits.extend(cli.inline_visits.iter().cloned());

    let font = match &config.font_path {
        Some(path) => RasterCanvas::load_font(path)
            .with_context(|| format!("Failed to load font {:?}", path))?,
        None => RasterCanvas::bundled_font().context("Failed to load bundled font")?,
    };
    let mut canvas = RasterCanvas::new(Some(font));

    info!("Drawing {} visits", visits.len());
    match &cli.output {
        Some(output) => {
            let mut presenter = PngPresenter::new(output);
            draw_travel_map(&visits, cli.projection, &config, &mut canvas, &mut presenter)
                .context("Failed to render travel map")?;
            println!("Travel map saved to {:?}", presenter.path());
        }
        None => show_in_window(&visits, cli.projection, &config, &mut canvas)?,
    }

    Ok(())
}

/// Show the map and block until the window is closed
#[cfg(feature = "window")]
fn show_in_window(
    visits: &[Visit],
    projection: ProjectionKind,
    config: &MapConfig,
    canvas: &mut RasterCanvas,
) -> Result<()> {
    draw_travel_map(visits, projection, config, canvas, &mut WindowPresenter)
        .context("Failed to show travel map")
}

#[cfg(not(feature = "window"))]
fn show_in_window(
    _visits: &[Visit],
    _projection: ProjectionKind,
    _config: &MapConfig,
    _canvas: &mut RasterCanvas,
) -> Result<()> {
    anyhow::bail!("Built without the `window` feature; pass --output to write an image instead")
}

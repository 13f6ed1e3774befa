use thiserror::Error;

pub mod canvas;
pub mod config;
pub mod model;
pub mod presenter;
pub mod projection;
pub mod render;

pub use canvas::raster::RasterCanvas;
pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use config::{MapConfig, MapStyle};
pub use model::Visit;
pub use presenter::{Headless, PngPresenter, Presenter};
#[cfg(feature = "window")]
pub use presenter::WindowPresenter;
pub use projection::{Flat, MapProjection, Orthographic, Projected, ProjectionKind, Projector};
pub use render::{draw_travel_map, render_map};

#[derive(Error, Debug)]
pub enum TravelMapError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse travel data: {0}")]
    ParseError(String),

    #[error("Failed to generate image: {0}")]
    ImageError(String),

    #[error("Failed to load font: {0}")]
    FontError(String),

    #[error("Failed to show map window: {0}")]
    DisplayError(String),
}

pub type StatusOr<T> = Result<T, TravelMapError>;

use std::path::{Path, PathBuf};

use log::info;

use crate::canvas::raster::RasterCanvas;
use crate::{StatusOr, TravelMapError};

#[cfg(feature = "window")]
pub mod window;

#[cfg(feature = "window")]
pub use window::WindowPresenter;

/// Final step of a render: show the finished canvas and return when the viewer is done.
///
/// `WindowPresenter` blocks until its window is closed; `Headless` returns at once.
pub trait Presenter<C> {
    fn present(&mut self, canvas: &C) -> StatusOr<()>;
}

/// Presenter that discards the canvas, for tests and dry runs
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl<C> Presenter<C> for Headless {
    fn present(&mut self, _canvas: &C) -> StatusOr<()> {
        Ok(())
    }
}

/// Writes the finished raster to an image file (format taken from the extension)
#[derive(Debug, Clone)]
pub struct PngPresenter {
    path: PathBuf,
}

impl PngPresenter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Presenter<RasterCanvas> for PngPresenter {
    fn present(&mut self, canvas: &RasterCanvas) -> StatusOr<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        canvas
            .image()
            .save(&self.path)
            .map_err(|e| TravelMapError::ImageError(format!("Failed to save {:?}: {}", self.path, e)))?;
        info!("\"{}\" saved to {}", canvas.title(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::model::Visit;
    use crate::projection::ProjectionKind;
    use crate::render::draw_travel_map;

    #[test]
    fn test_png_presenter_writes_image() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("maps").join("trip.png");

        let config = MapConfig {
            width: 200,
            height: 200,
            radius: 70.0,
            ..MapConfig::default()
        };
        let visits = vec![Visit::new("Paris", 48.85, 2.35), Visit::new("Berlin", 52.52, 13.4)];
        let mut canvas = RasterCanvas::new(None);
        let mut presenter = PngPresenter::new(&path);

        draw_travel_map(&visits, ProjectionKind::Globe, &config, &mut canvas, &mut presenter)
            .expect("Render should succeed");

        let saved = image::open(&path).expect("Saved map should decode").to_rgb8();
        assert_eq!(saved.dimensions(), (200, 200));
        assert_eq!(*saved.get_pixel(0, 0), config.style.background);
        // Just east of the central meridian, clear of the grid and the route
        assert_eq!(*saved.get_pixel(110, 100), config.style.ocean);
    }
}

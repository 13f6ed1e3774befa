use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_text_mut, text_size,
};
use log::{debug, warn};
use rusttype::{Font, Scale};

use super::{Align, Canvas, CanvasSetup, TextStyle};
use crate::{StatusOr, TravelMapError};

const BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Canvas backed by an in-memory RGB image
pub struct RasterCanvas {
    image: RgbImage,
    title: String,
    font: Option<Font<'static>>,
    warned_no_font: bool,
}

impl RasterCanvas {
    pub fn new(font: Option<Font<'static>>) -> Self {
        Self {
            image: RgbImage::new(1, 1),
            title: String::new(),
            font,
            warned_no_font: false,
        }
    }

    /// DejaVu Sans compiled into the binary, used when no font file is given
    pub fn bundled_font() -> StatusOr<Font<'static>> {
        Font::try_from_bytes(BUNDLED_FONT)
            .ok_or_else(|| TravelMapError::FontError("bundled font failed to parse".to_string()))
    }

    /// Load a TrueType font from disk for labels and captions
    pub fn load_font<P: AsRef<Path>>(path: P) -> StatusOr<Font<'static>> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        Font::try_from_vec(data).ok_or_else(|| {
            TravelMapError::FontError(format!("{} is not a usable TrueType font", path.display()))
        })
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Convert map coordinates (origin at center, y up) to image pixels (origin top-left, y down)
    pub fn to_img_coords(&self, point: (f64, f64)) -> (f32, f32) {
        let x = self.image.width() as f64 / 2.0 + point.0;
        let y = self.image.height() as f64 / 2.0 - point.1;
        (x as f32, y as f32)
    }

    fn to_pixel(&self, point: (f64, f64)) -> (i32, i32) {
        let (x, y) = self.to_img_coords(point);
        (x.round() as i32, y.round() as i32)
    }
}

/// Stroke a polyline given in image pixels.
///
/// Thick strokes stamp discs at every vertex and along every segment, so
/// caps and joins come out round.
fn stroke_polyline(image: &mut RgbImage, points: &[(f32, f32)], color: Rgb<u8>, width: f32) {
    if width <= 1.0 {
        for pair in points.windows(2) {
            draw_line_segment_mut(image, pair[0], pair[1], color);
        }
        return;
    }

    let radius = (width / 2.0).round().max(1.0) as i32;
    let spacing = (radius as f32 * 0.5).max(0.5);
    let stamp = |image: &mut RgbImage, (x, y): (f32, f32)| {
        draw_filled_circle_mut(image, (x.round() as i32, y.round() as i32), radius, color);
    };

    for &vertex in points {
        stamp(image, vertex);
    }
    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let (dx, dy) = (end.0 - start.0, end.1 - start.1);
        let steps = (dx.hypot(dy) / spacing).ceil() as i32;
        for i in 1..steps {
            let t = i as f32 / steps as f32;
            stamp(image, (start.0 + t * dx, start.1 + t * dy));
        }
    }
}

impl Canvas for RasterCanvas {
    fn setup(&mut self, setup: &CanvasSetup) {
        debug!("Raster canvas {}x{} \"{}\"", setup.width, setup.height, setup.title);
        self.image = RgbImage::from_pixel(setup.width, setup.height, setup.background);
        self.title = setup.title.clone();
    }

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb<u8>) {
        let center = self.to_pixel(center);
        draw_filled_circle_mut(&mut self.image, center, radius.round() as i32, color);
    }

    fn stroke_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb<u8>, width: f32) {
        let center = self.to_pixel(center);
        let radius = radius.round() as i32;
        let width = (width.round() as i32).max(1);
        // Rings straddle the nominal radius
        let inner = radius - (width - 1) / 2;
        for r in inner..inner + width {
            if r > 0 {
                draw_hollow_circle_mut(&mut self.image, center, r, color);
            }
        }
    }

    fn polyline(&mut self, points: &[(f64, f64)], color: Rgb<u8>, width: f32) {
        let pixels: Vec<(f32, f32)> = points.iter().map(|&p| self.to_img_coords(p)).collect();
        stroke_polyline(&mut self.image, &pixels, color, width);
    }

    fn dot(&mut self, center: (f64, f64), diameter: f32, color: Rgb<u8>) {
        let center = self.to_pixel(center);
        let radius = ((diameter / 2.0).round() as i32).max(1);
        draw_filled_circle_mut(&mut self.image, center, radius, color);
    }

    fn text(&mut self, position: (f64, f64), text: &str, style: &TextStyle) {
        let Some(font) = self.font.as_ref() else {
            if !self.warned_no_font {
                warn!("No font loaded; labels and captions are not rendered");
                self.warned_no_font = true;
            }
            return;
        };

        let scale = Scale::uniform(style.size * 1.5);
        let (text_width, _) = text_size(scale, font, text);
        let v_metrics = font.v_metrics(scale);
        let (x, y) = self.to_pixel(position);
        let left = match style.align {
            Align::Left => x,
            Align::Center => x - text_width / 2,
            Align::Right => x - text_width,
        };
        // Bottom of the line box sits on `position`
        let top = y - (v_metrics.ascent - v_metrics.descent).ceil() as i32;

        draw_text_mut(&mut self.image, style.color, left, top, scale, font, text);
        if style.bold {
            draw_text_mut(&mut self.image, style.color, left + 1, top, scale, font, text);
        }
    }
}

use eframe::egui;
use image::RgbImage;
use log::info;

use super::Presenter;
use crate::canvas::raster::RasterCanvas;
use crate::{StatusOr, TravelMapError};

/// Shows the finished map in a native window and blocks until it is closed
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowPresenter;

/// Convert the rendered raster into an egui image of the same size
pub fn to_color_image(image: &RgbImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgb(size, image.as_raw())
}

struct MapWindow {
    pending: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
}

impl eframe::App for MapWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.texture.is_none() {
            if let Some(image) = self.pending.take() {
                self.texture = Some(ctx.load_texture("travel_map", image, egui::TextureOptions::NEAREST));
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if let Some(texture) = &self.texture {
                    let sized = egui::load::SizedTexture::new(texture.id(), texture.size_vec2());
                    ui.add(egui::Image::new(sized));
                }
            });
    }
}

impl Presenter<RasterCanvas> for WindowPresenter {
    fn present(&mut self, canvas: &RasterCanvas) -> StatusOr<()> {
        let image = canvas.image();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(canvas.title())
                .with_inner_size([image.width() as f32, image.height() as f32])
                .with_resizable(false),
            ..Default::default()
        };
        let window = MapWindow {
            pending: Some(to_color_image(image)),
            texture: None,
        };

        info!("Showing \"{}\"; close the window to exit", canvas.title());
        eframe::run_native(canvas.title(), options, Box::new(|_cc| Ok(Box::new(window))))
            .map_err(|e| TravelMapError::DisplayError(e.to_string()))
    }
}

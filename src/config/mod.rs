use std::path::PathBuf;

use image::Rgb;

/// Longitude facing the viewer when there is nothing to average (East Lansing, MI)
pub const DEFAULT_CENTER_LON: f64 = -84.5;

/// Canvas and layout settings for one render.
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub radius: f64,
    pub default_center_lon: f64,
    pub center_lon: Option<f64>, // Overrides the averaged meridian when set
    pub home: String,            // Town named in the "stayed home" caption
    pub font_path: Option<PathBuf>,
    pub style: MapStyle,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "Your Post-Grad Travel Map".to_string(),
            radius: 280.0,
            default_center_lon: DEFAULT_CENTER_LON,
            center_lon: None,
            home: "East Lansing".to_string(),
            font_path: None,
            style: MapStyle::default(),
        }
    }
}

/// Colors, pen widths and text sizes used by the renderers
#[derive(Debug, Clone)]
pub struct MapStyle {
    pub background: Rgb<u8>,
    pub ocean: Rgb<u8>,
    pub highlight: Rgb<u8>,
    pub highlight_inset: f64,
    pub grid: Rgb<u8>,
    pub grid_width: f32,
    pub outline: Rgb<u8>,
    pub outline_width: f32,
    pub path: Rgb<u8>,
    pub path_width: f32,
    pub marker: Rgb<u8>,
    pub marker_size: f32,
    pub label_color: Rgb<u8>,
    pub label_size: f32,
    pub caption_color: Rgb<u8>,
    pub caption_size: f32,
    pub caption_position: (f64, f64),
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            background: Rgb([25, 25, 112]), // midnight blue
            ocean: Rgb([0x0a, 0x23, 0x42]),
            highlight: Rgb([0x15, 0x3b, 0x6d]),
            highlight_inset: 8.0,
            grid: Rgb([0x4f, 0xa3, 0xd1]),
            grid_width: 1.0,
            outline: Rgb([173, 216, 230]), // light blue
            outline_width: 2.0,
            path: Rgb([255, 215, 0]), // gold
            path_width: 2.0,
            marker: Rgb([0xf4, 0xe4, 0x09]),
            marker_size: 10.0,
            label_color: Rgb([0xf4, 0xe4, 0x09]),
            label_size: 10.0,
            caption_color: Rgb([255, 255, 255]),
            caption_size: 12.0,
            caption_position: (0.0, 260.0),
        }
    }
}

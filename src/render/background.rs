use log::debug;

use crate::canvas::{Canvas, Pen};
use crate::config::MapStyle;
use crate::projection::{Flat, MapProjection, Orthographic, Projector};

/// Latitudes of the drawn parallels, in degrees
pub const PARALLELS: [f64; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];

/// Meridian offsets from the center longitude, in degrees
pub const MERIDIAN_OFFSETS: [f64; 5] = [-120.0, -60.0, 0.0, 60.0, 120.0];

/// Meridians are sampled every 5 degrees between -80 and 80 latitude
const MERIDIAN_STEP: usize = 5;
const MERIDIAN_LIMIT: i32 = 80;

pub fn draw_background(canvas: &mut dyn Canvas, projection: &MapProjection, style: &MapStyle) {
    match projection {
        MapProjection::Globe(globe) => draw_globe(canvas, globe, style),
        MapProjection::Flat(flat) => draw_flat(canvas, flat, style),
    }
}

/// Ocean disk, parallels, the visible meridians and a rim
pub fn draw_globe(canvas: &mut dyn Canvas, globe: &Orthographic, style: &MapStyle) {
    let radius = globe.radius;

    canvas.fill_circle((0.0, 0.0), radius, style.ocean);
    canvas.stroke_circle((0.0, 0.0), radius - style.highlight_inset, style.highlight, 1.0);

    for lat in PARALLELS {
        let lat_r = lat.to_radians();
        let y = radius * lat_r.sin();
        let r = radius * lat_r.cos();
        canvas.stroke_circle((0.0, y), r, style.grid, style.grid_width);
    }

    let mut pen = Pen::new(style.grid, style.grid_width);
    for offset in MERIDIAN_OFFSETS {
        let lon = globe.center_lon + offset;
        for lat in (-MERIDIAN_LIMIT..=MERIDIAN_LIMIT).step_by(MERIDIAN_STEP) {
            let p = globe.project(lat as f64, lon);
            if p.visible {
                pen.goto(p.point());
            } else {
                pen.pen_up(canvas);
            }
        }
        pen.pen_up(canvas);
    }
    debug!("Drew {} visible meridian traces", pen.runs_drawn());

    canvas.stroke_circle((0.0, 0.0), radius, style.outline, style.outline_width);
}

/// Outline circle and a straight graticule
pub fn draw_flat(canvas: &mut dyn Canvas, flat: &Flat, style: &MapStyle) {
    let radius = flat.radius;

    canvas.stroke_circle((0.0, 0.0), radius, style.outline, style.outline_width);

    for lat in PARALLELS {
        let y = flat.project(lat, 0.0).y;
        canvas.polyline(&[(-radius, y), (radius, y)], style.grid, style.grid_width);
    }

    for offset in MERIDIAN_OFFSETS {
        let x = flat.project(0.0, offset).x;
        canvas.polyline(&[(x, -radius), (x, radius)], style.grid, style.grid_width);
    }
}

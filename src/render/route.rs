use log::debug;

use crate::canvas::{Align, Canvas, Pen, TextStyle};
use crate::config::MapStyle;
use crate::model::Visit;
use crate::projection::Projector;

/// Draw the travel path with a marker and label at every visible stop.
///
/// Hidden stops lift the pen, so the path breaks instead of cutting across
/// the globe. Returns the number of stops that were drawn.
pub fn draw_route(
    canvas: &mut dyn Canvas,
    projector: &dyn Projector,
    visits: &[Visit],
    style: &MapStyle,
) -> usize {
    let mut path = Pen::new(style.path, style.path_width);
    let label = TextStyle {
        size: style.label_size,
        bold: false,
        align: Align::Left,
        color: style.label_color,
    };

    let mut markers = Vec::with_capacity(visits.len());
    for visit in visits {
        let p = projector.project(visit.lat(), visit.lon());
        if !p.visible {
            debug!("{} is on the far side of the globe, skipping", visit.name());
            path.pen_up(canvas);
            continue;
        }
        path.goto(p.point());
        markers.push((p.point(), visit.name()));
    }
    path.pen_up(canvas);

    // Markers go on top of the path
    for (point, name) in &markers {
        canvas.dot(*point, style.marker_size, style.marker);
        canvas.text(*point, name, &label);
    }

    markers.len()
}

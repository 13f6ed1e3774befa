use crate::canvas::{Align, Canvas, TextStyle};
use crate::config::MapStyle;
use crate::model::Visit;

/// Caption text for a trip
pub fn summary_text(visits: &[Visit], home: &str) -> String {
    if visits.is_empty() {
        return format!("You stayed in {} this time.", home);
    }
    let locations: Vec<&str> = visits.iter().map(Visit::name).collect();
    format!("You traveled to: {}", locations.join(", "))
}

pub fn write_summary(canvas: &mut dyn Canvas, visits: &[Visit], home: &str, style: &MapStyle) {
    let caption = TextStyle {
        size: style.caption_size,
        bold: true,
        align: Align::Center,
        color: style.caption_color,
    };
    canvas.text(style.caption_position, &summary_text(visits, home), &caption);
}

//! Drawing surface abstraction.
//!
//! All coordinates handed to a [`Canvas`] are map coordinates: origin at the
//! center of the canvas, x to the right and y up.

use image::Rgb;

pub mod raster;

/// Horizontal anchoring of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub align: Align,
    pub color: Rgb<u8>,
}

/// Initial state of a canvas
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSetup {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub background: Rgb<u8>,
}

/// Render context owned by a single render call
pub trait Canvas {
    /// Resize and clear the surface
    fn setup(&mut self, setup: &CanvasSetup);

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb<u8>);

    fn stroke_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb<u8>, width: f32);

    /// Connected line segments through `points`, in order
    fn polyline(&mut self, points: &[(f64, f64)], color: Rgb<u8>, width: f32);

    /// Filled marker of the given diameter
    fn dot(&mut self, center: (f64, f64), diameter: f32, color: Rgb<u8>);

    /// Text whose bottom edge sits on `position`; `style.align` picks the horizontal anchor
    fn text(&mut self, position: (f64, f64), text: &str, style: &TextStyle);
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Setup(CanvasSetup),
    FillCircle {
        center: (f64, f64),
        radius: f64,
        color: Rgb<u8>,
    },
    StrokeCircle {
        center: (f64, f64),
        radius: f64,
        color: Rgb<u8>,
        width: f32,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        color: Rgb<u8>,
        width: f32,
    },
    Dot {
        center: (f64, f64),
        diameter: f32,
        color: Rgb<u8>,
    },
    Text {
        position: (f64, f64),
        text: String,
        style: TextStyle,
    },
}

/// Canvas that only remembers what was drawn, for headless use
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn polylines(&self) -> Vec<&[(f64, f64)]> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polyline { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn dots(&self) -> Vec<(f64, f64)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Dot { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn setup(&mut self, setup: &CanvasSetup) {
        self.commands.clear();
        self.commands.push(DrawCommand::Setup(setup.clone()));
    }

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb<u8>) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb<u8>, width: f32) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, color, width });
    }

    fn polyline(&mut self, points: &[(f64, f64)], color: Rgb<u8>, width: f32) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn dot(&mut self, center: (f64, f64), diameter: f32, color: Rgb<u8>) {
        self.commands.push(DrawCommand::Dot { center, diameter, color });
    }

    fn text(&mut self, position: (f64, f64), text: &str, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_string(),
            style: *style,
        });
    }
}

/// Turtle-style pen that turns a stream of points into polylines.
///
/// Lifting the pen ends the current run; runs shorter than two points are
/// dropped instead of being drawn as degenerate segments.
pub struct Pen {
    color: Rgb<u8>,
    width: f32,
    run: Vec<(f64, f64)>,
    runs_drawn: usize,
}

impl Pen {
    pub fn new(color: Rgb<u8>, width: f32) -> Self {
        Self {
            color,
            width,
            run: Vec::new(),
            runs_drawn: 0,
        }
    }

    /// Extend the current run to `point`, starting a new one if the pen is up
    pub fn goto(&mut self, point: (f64, f64)) {
        self.run.push(point);
    }

    /// Draw the current run (if any) and lift the pen
    pub fn pen_up(&mut self, canvas: &mut dyn Canvas) {
        if self.run.len() >= 2 {
            canvas.polyline(&self.run, self.color, self.width);
            self.runs_drawn += 1;
        }
        self.run.clear();
    }

    pub fn runs_drawn(&self) -> usize {
        self.runs_drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_splits_runs() {
        let mut canvas = RecordingCanvas::new();
        let mut pen = Pen::new(Rgb([1, 2, 3]), 2.0);

        pen.goto((0.0, 0.0));
        pen.goto((1.0, 1.0));
        pen.pen_up(&mut canvas);
        pen.goto((5.0, 5.0));
        pen.pen_up(&mut canvas);
        pen.goto((2.0, 2.0));
        pen.goto((3.0, 3.0));
        pen.goto((4.0, 4.0));
        pen.pen_up(&mut canvas);

        let lines = canvas.polylines();
        assert_eq!(lines.len(), 2, "Single-point run should not be drawn");
        assert_eq!(lines[0], &[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(lines[1].len(), 3);
        assert_eq!(pen.runs_drawn(), 2);
    }

    #[test]
    fn test_recording_setup_resets() {
        let mut canvas = RecordingCanvas::new();
        canvas.dot((0.0, 0.0), 4.0, Rgb([0, 0, 0]));
        canvas.setup(&CanvasSetup {
            width: 10,
            height: 10,
            title: "t".to_string(),
            background: Rgb([0, 0, 0]),
        });
        assert_eq!(canvas.commands().len(), 1);
        assert!(canvas.dots().is_empty());
    }
}

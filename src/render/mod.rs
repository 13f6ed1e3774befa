use log::info;

use crate::canvas::{Canvas, CanvasSetup};
use crate::config::MapConfig;
use crate::model::{self, Visit};
use crate::presenter::Presenter;
use crate::projection::{MapProjection, ProjectionKind};
use crate::StatusOr;

pub mod background;
pub mod route;
pub mod summary;

/// Meridian the globe is turned to: explicit override, else the mean visit longitude
pub fn resolve_center_lon(visits: &[Visit], config: &MapConfig) -> f64 {
    config
        .center_lon
        .unwrap_or_else(|| model::center_longitude(visits, config.default_center_lon))
}

/// Draw the complete map onto `canvas`
pub fn render_map(
    canvas: &mut dyn Canvas,
    projection: &MapProjection,
    visits: &[Visit],
    config: &MapConfig,
) {
    let style = &config.style;

    canvas.setup(&CanvasSetup {
        width: config.width,
        height: config.height,
        title: config.title.clone(),
        background: style.background,
    });

    background::draw_background(canvas, projection, style);
    if !visits.is_empty() {
        let drawn = route::draw_route(canvas, projection, visits, style);
        info!("Drew {} of {} stops", drawn, visits.len());
    }
    summary::write_summary(canvas, visits, &config.home, style);
}

/// Render the travel map and hand it to `presenter`
pub fn draw_travel_map<C, P>(
    visits: &[Visit],
    kind: ProjectionKind,
    config: &MapConfig,
    canvas: &mut C,
    presenter: &mut P,
) -> StatusOr<()>
where
    C: Canvas,
    P: Presenter<C>,
{
    model::warn_out_of_range(visits);

    let center_lon = resolve_center_lon(visits, config);
    let projection = MapProjection::new(kind, config.radius, center_lon);
    info!(
        "Rendering {} visits with {:?} projection, center longitude {:.2}",
        visits.len(),
        kind,
        center_lon
    );

    render_map(canvas, &projection, visits, config);
    presenter.present(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::raster::RasterCanvas;
    use crate::canvas::{DrawCommand, RecordingCanvas};
    use crate::presenter::Headless;
    use crate::projection::Projector;

    #[test]
    fn test_empty_trip_renders_background_and_caption() {
        let mut canvas = RecordingCanvas::new();
        draw_travel_map(&[], ProjectionKind::Globe, &MapConfig::default(), &mut canvas, &mut Headless)
            .expect("Empty trip should render");

        assert_eq!(canvas.texts(), vec!["You stayed in East Lansing this time."]);
        assert!(canvas.dots().is_empty(), "No markers without visits");
        assert!(matches!(
            &canvas.commands()[0],
            DrawCommand::Setup(setup) if setup.width == 800 && setup.height == 800 && setup.title == "Your Post-Grad Travel Map"
        ));
    }

    #[test]
    fn test_empty_trip_flat() {
        let mut canvas = RecordingCanvas::new();
        draw_travel_map(&[], ProjectionKind::Flat, &MapConfig::default(), &mut canvas, &mut Headless)
            .expect("Empty trip should render");
        assert_eq!(canvas.polylines().len(), 10);
        assert_eq!(canvas.texts(), vec!["You stayed in East Lansing this time."]);
    }

    #[test]
    fn test_center_resolution() {
        let visits = vec![Visit::new("W", 0.0, -90.0), Visit::new("M", 0.0, 0.0), Visit::new("E", 0.0, 90.0)];
        let mut config = MapConfig::default();
        assert_eq!(resolve_center_lon(&visits, &config), 0.0);
        assert_eq!(resolve_center_lon(&[], &config), -84.5);

        config.center_lon = Some(140.0);
        assert_eq!(resolve_center_lon(&visits, &config), 140.0);
    }

    #[test]
    fn test_full_trip_draw_order() {
        let visits = vec![Visit::new("A", 10.0, 10.0), Visit::new("B", 20.0, 20.0)];
        let mut canvas = RecordingCanvas::new();
        draw_travel_map(&visits, ProjectionKind::Globe, &MapConfig::default(), &mut canvas, &mut Headless)
            .expect("Trip should render");

        assert_eq!(canvas.texts(), vec!["A", "B", "You traveled to: A, B"]);
        assert_eq!(canvas.dots().len(), 2);

        // Background grid first, then the route
        let lines = canvas.polylines();
        let route = lines.last().expect("Route should be drawn");
        assert_eq!(route.len(), 2);

        // Globe turned to the mean longitude of 15
        let globe = MapProjection::new(ProjectionKind::Globe, 280.0, 15.0);
        assert_eq!(canvas.dots()[0], globe.project(10.0, 10.0).point());
    }

    fn raster_with_bundled_font() -> RasterCanvas {
        RasterCanvas::new(Some(RasterCanvas::bundled_font().expect("Bundled font should parse")))
    }

    #[test]
    fn test_stayed_home_caption_is_rasterized() {
        let mut canvas = raster_with_bundled_font();
        draw_travel_map(&[], ProjectionKind::Globe, &MapConfig::default(), &mut canvas, &mut Headless)
            .expect("Empty trip should render");

        // Nothing but the caption is white
        let caption: Vec<(u32, u32)> = canvas
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0.iter().all(|&c| c >= 200))
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(caption.len() > 100, "Only {} caption pixels", caption.len());

        let min_x = caption.iter().map(|p| p.0).min().unwrap();
        let max_x = caption.iter().map(|p| p.0).max().unwrap();
        assert!(((min_x + max_x) / 2).abs_diff(400) <= 6, "Caption should be centered");
        // Positioned at y = 260 above the center, i.e. row 140
        assert!(caption.iter().all(|&(_, y)| (100..=141).contains(&y)));
    }

    #[test]
    fn test_stop_label_is_rasterized() {
        let style = MapConfig::default().style;
        let mut canvas = raster_with_bundled_font();
        draw_travel_map(
            &[Visit::new("Null Island", 0.0, 0.0)],
            ProjectionKind::Flat,
            &MapConfig::default(),
            &mut canvas,
            &mut Headless,
        )
        .expect("Trip should render");

        assert_eq!(*canvas.image().get_pixel(400, 400), style.marker, "Marker at the origin");

        // Label runs to the right of the marker, just above it
        let label_pixels = canvas
            .image()
            .enumerate_pixels()
            .filter(|&(x, y, p)| x > 406 && (370..=401).contains(&y) && p.0[0] >= 200 && p.0[1] >= 180 && p.0[2] <= 80)
            .count();
        assert!(label_pixels > 20, "Only {} label pixels", label_pixels);
    }
}

//! Geographic projections from (lat, lng) in degrees to canvas coordinates.
//!
//! Canvas coordinates are centered on the map with y pointing up; the
//! projected map fits inside a circle of `radius`.

use clap::ValueEnum;
use s2::latlng::LatLng;

/// A projected point. `visible` is false for points on the far side of the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl Projected {
    pub fn point(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

pub trait Projector {
    /// Project a latitude/longitude pair given in degrees
    fn project(&self, lat: f64, lon: f64) -> Projected;

    fn radius(&self) -> f64;
}

/// Orthographic globe seen from infinitely far away above `center_lon` on the equator
#[derive(Debug, Clone, Copy)]
pub struct Orthographic {
    pub radius: f64,
    pub center_lon: f64,
}

impl Orthographic {
    pub fn new(radius: f64, center_lon: f64) -> Self {
        Self { radius, center_lon }
    }
}

impl Projector for Orthographic {
    fn project(&self, lat: f64, lon: f64) -> Projected {
        let rel = LatLng::from_degrees(lat, lon - self.center_lon);
        let lat_r = rel.lat.rad();
        let lon_r = rel.lng.rad();

        Projected {
            x: self.radius * lat_r.cos() * lon_r.sin(),
            y: self.radius * lat_r.sin(),
            visible: lat_r.cos() * lon_r.cos() >= 0.0,
        }
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

/// Naive linear rescale: longitude spans [-radius, radius] horizontally, latitude vertically
#[derive(Debug, Clone, Copy)]
pub struct Flat {
    pub radius: f64,
}

impl Flat {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Projector for Flat {
    fn project(&self, lat: f64, lon: f64) -> Projected {
        Projected {
            x: lon / 180.0 * self.radius,
            y: lat / 90.0 * self.radius,
            visible: true,
        }
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

/// Which projection strategy to render with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ProjectionKind {
    #[default]
    Globe,
    Flat,
}

/// A concrete projection chosen at render time
#[derive(Debug, Clone, Copy)]
pub enum MapProjection {
    Globe(Orthographic),
    Flat(Flat),
}

impl MapProjection {
    pub fn new(kind: ProjectionKind, radius: f64, center_lon: f64) -> Self {
        match kind {
            ProjectionKind::Globe => MapProjection::Globe(Orthographic::new(radius, center_lon)),
            ProjectionKind::Flat => MapProjection::Flat(Flat::new(radius)),
        }
    }

    pub fn kind(&self) -> ProjectionKind {
        match self {
            MapProjection::Globe(_) => ProjectionKind::Globe,
            MapProjection::Flat(_) => ProjectionKind::Flat,
        }
    }
}

impl Projector for MapProjection {
    fn project(&self, lat: f64, lon: f64) -> Projected {
        match self {
            MapProjection::Globe(p) => p.project(lat, lon),
            MapProjection::Flat(p) => p.project(lat, lon),
        }
    }

    fn radius(&self) -> f64 {
        match self {
            MapProjection::Globe(p) => p.radius(),
            MapProjection::Flat(p) => p.radius(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < EPS && (actual.1 - expected.1).abs() < EPS,
            "Expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_flat_projection_axes() {
        let flat = Flat::new(280.0);
        assert_close(flat.project(0.0, 0.0).point(), (0.0, 0.0));
        assert_close(flat.project(90.0, 0.0).point(), (0.0, 280.0));
        assert_close(flat.project(0.0, 180.0).point(), (280.0, 0.0));
        assert_close(flat.project(-45.0, -90.0).point(), (-140.0, -140.0));
    }

    #[test]
    fn test_flat_projection_always_visible() {
        let flat = Flat::new(100.0);
        for lon in [-180.0, -90.0, 0.0, 90.0, 180.0] {
            assert!(flat.project(10.0, lon).visible);
        }
    }

    #[test]
    fn test_orthographic_center_is_origin() {
        for center_lon in [-84.5, 0.0, 37.0, 179.0] {
            let globe = Orthographic::new(280.0, center_lon);
            let p = globe.project(0.0, center_lon);
            assert!(p.visible, "Center point should face the viewer");
            assert_close(p.point(), (0.0, 0.0));
        }
    }

    #[test]
    fn test_orthographic_antipode_hidden() {
        for center_lon in [-84.5, 0.0, 37.0, 120.0] {
            let globe = Orthographic::new(280.0, center_lon);
            for lat in [-60.0, 0.0, 45.0] {
                let p = globe.project(lat, center_lon + 180.0);
                assert!(!p.visible, "Antipodal point at lat {} should be hidden", lat);
            }
        }
    }

    #[test]
    fn test_orthographic_pole_and_limb() {
        let globe = Orthographic::new(200.0, 0.0);
        assert_close(globe.project(90.0, 0.0).point(), (0.0, 200.0));
        assert_close(globe.project(0.0, 90.0).point(), (200.0, 0.0));
        assert_close(globe.project(0.0, -90.0).point(), (-200.0, 0.0));
        assert!(!globe.project(0.0, 120.0).visible);
    }

    #[test]
    fn test_map_projection_dispatch() {
        let globe = MapProjection::new(ProjectionKind::Globe, 100.0, 10.0);
        assert_eq!(globe.kind(), ProjectionKind::Globe);
        assert!(!globe.project(0.0, 190.0).visible);

        let flat = MapProjection::new(ProjectionKind::Flat, 100.0, 10.0);
        assert_eq!(flat.kind(), ProjectionKind::Flat);
        assert_close(flat.project(0.0, 180.0).point(), (100.0, 0.0));
        assert_eq!(flat.radius(), 100.0);
    }
}

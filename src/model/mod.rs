use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};
use s2::latlng::LatLng;
use serde::Deserialize;

use crate::{StatusOr, TravelMapError};

/// A named stop on the trip
///
/// Visits are immutable once built; their order in a list is the order the
/// route is drawn in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Visit {
    name: String,
    lat: f64,
    lon: f64,
}

impl Visit {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn latlng(&self) -> LatLng {
        LatLng::from_degrees(self.lat, self.lon)
    }

    /// Whether latitude is within [-90, 90] and longitude within [-180, 180]
    pub fn in_range(&self) -> bool {
        self.latlng().is_valid()
    }
}

/// Parses `NAME:LAT:LON`. The name may contain colons; the last two fields are the coordinates.
impl FromStr for Visit {
    type Err = TravelMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (lon, lat, name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(lon), Some(lat), Some(name)) => (lon, lat, name),
            _ => {
                return Err(TravelMapError::ParseError(format!(
                    "Expected NAME:LAT:LON, got {:?}",
                    s
                )));
            }
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(TravelMapError::ParseError(format!("Visit without a name: {:?}", s)));
        }

        let lat: f64 = lat.trim().parse().map_err(|e| {
            TravelMapError::ParseError(format!("Invalid latitude {:?} in {:?}: {}", lat, s, e))
        })?;
        let lon: f64 = lon.trim().parse().map_err(|e| {
            TravelMapError::ParseError(format!("Invalid longitude {:?} in {:?}: {}", lon, s, e))
        })?;

        Ok(Visit::new(name, lat, lon))
    }
}

/// Meridian that should face the viewer: the mean longitude of all visits,
/// or `fallback` when there are none.
pub fn center_longitude(visits: &[Visit], fallback: f64) -> f64 {
    if visits.is_empty() {
        return fallback;
    }
    let total: f64 = visits.iter().map(Visit::lon).sum();
    total / visits.len() as f64
}

/// Logs a warning for every visit outside the usual lat/lng ranges.
///
/// Out-of-range values are still projected as-is.
pub fn warn_out_of_range(visits: &[Visit]) -> usize {
    let mut count = 0;
    for visit in visits.iter().filter(|v| !v.in_range()) {
        warn!(
            "Visit {:?} has out-of-range coordinates ({}, {}); projecting anyway",
            visit.name(),
            visit.lat(),
            visit.lon()
        );
        count += 1;
    }
    count
}

/// Read visits from a JSON array of `{"name", "lat", "lon"}` objects
pub fn read_visits<R: Read>(reader: R) -> StatusOr<Vec<Visit>> {
    serde_json::from_reader(reader)
        .map_err(|e| TravelMapError::ParseError(format!("Invalid visits JSON: {}", e)))
}

/// Load visits from a JSON file on disk
pub fn load_visits<P: AsRef<Path>>(path: P) -> StatusOr<Vec<Visit>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let visits = read_visits(BufReader::new(file))?;
    info!("Loaded {} visits from {}", visits.len(), path.display());
    Ok(visits)
}

use super::Location;
use crate::geo::normalize_lon;

/// Represents a rectangle in latitude/longitude space, defined by minimum
/// and maximum latitude and longitude.
///
/// Longitudes may run past ±180 so that a box crossing the antimeridian
/// stays one contiguous range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl MapBounds {
    /// A degenerate rectangle holding a single point.
    pub fn from_point(point: Location) -> Self {
        Self {
            min_lat: point.lat,
            max_lat: point.lat,
            min_lon: point.lon,
            max_lon: point.lon,
        }
    }

    /// Grows the rectangle so it also contains `point`.
    pub fn extend(&mut self, point: Location) {
        self.min_lat = self.min_lat.min(point.lat);
        self.max_lat = self.max_lat.max(point.lat);
        self.min_lon = self.min_lon.min(point.lon);
        self.max_lon = self.max_lon.max(point.lon);
    }

    /// Checks whether a given position is within the bounds, in whichever
    /// copy of the world the longitude range sits.
    pub fn contains(&self, point: Location) -> bool {
        if point.lat < self.min_lat || point.lat > self.max_lat {
            return false;
        }
        [point.lon - 360.0, point.lon, point.lon + 360.0]
            .into_iter()
            .any(|lon| lon >= self.min_lon && lon <= self.max_lon)
    }

    /// Middle of the box, with the longitude brought back into [-180, 180).
    pub fn center(&self) -> Location {
        Location::new(
            (self.min_lat + self.max_lat) / 2.0,
            normalize_lon((self.min_lon + self.max_lon) / 2.0),
        )
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

use walkers::Position;

/// Starting point of the map before the user picks anything: San Francisco.
pub const DEFAULT_LOCATION: Location = Location {
    lat: 37.7749,
    lon: -122.4194,
};

/// A latitude/longitude pair in degrees. The focal point of the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl Default for Location {
    fn default() -> Self {
        DEFAULT_LOCATION
    }
}

impl From<Location> for Position {
    fn from(location: Location) -> Self {
        Position::from_lat_lon(location.lat, location.lon)
    }
}

//! Spherical-earth helpers used to size and frame the search radius.

use crate::types::{Location, MapBounds};

/// Sphere radius used by Web-Mercator map services for offsets and distances.
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Bearings of the four points that span a circle's bounding box.
const CARDINAL_BEARINGS: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// The point reached by travelling `distance_m` meters from `start` along
/// the great circle with initial bearing `bearing_deg` (clockwise from north).
pub fn destination(start: Location, bearing_deg: f64, distance_m: f64) -> Location {
    let angular = distance_m / EARTH_RADIUS_METERS;
    let bearing = bearing_deg.to_radians();
    let lat1 = start.lat.to_radians();
    let lon1 = start.lon.to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

    Location::new(lat2.to_degrees(), normalize_lon(lon2.to_degrees()))
}

/// Great-circle distance between two points, in meters.
pub fn haversine_meters(a: Location, b: Location) -> f64 {
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Bounding box of a circle: the union of the points `radius_m` away from
/// `center` due north, east, south and west.
///
/// Longitudes are measured from `center`, so a circle crossing ±180 gives a
/// box running past it rather than one spanning the whole world. A circle
/// that reaches a pole covers every longitude.
pub fn circle_bounds(center: Location, radius_m: f64) -> MapBounds {
    let reach = (radius_m / EARTH_RADIUS_METERS).to_degrees();
    if center.lat + reach >= 90.0 || center.lat - reach <= -90.0 {
        return MapBounds {
            min_lat: (center.lat - reach).max(-90.0),
            max_lat: (center.lat + reach).min(90.0),
            min_lon: center.lon - 180.0,
            max_lon: center.lon + 180.0,
        };
    }

    let mut bounds = MapBounds::from_point(center);
    for bearing in CARDINAL_BEARINGS {
        let point = destination(center, bearing, radius_m);
        let lon = center.lon + normalize_lon(point.lon - center.lon);
        bounds.extend(Location::new(point.lat, lon));
    }
    bounds
}

/// Brings a longitude into [-180, 180).
pub fn normalize_lon(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SF: Location = Location {
        lat: 37.7749,
        lon: -122.4194,
    };

    #[test]
    fn test_destination_due_north_only_changes_latitude() {
        // One degree of arc along a meridian.
        let one_degree = EARTH_RADIUS_METERS * 1f64.to_radians();
        let north = destination(Location::new(0.0, 10.0), 0.0, one_degree);

        assert!((north.lat - 1.0).abs() < 1e-9);
        assert!((north.lon - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_destination_round_trips_distance() {
        for bearing in [0.0, 45.0, 90.0, 180.0, 270.0, 333.0] {
            let point = destination(SF, bearing, 8046.7);
            let distance = haversine_meters(SF, point);
            assert!((distance - 8046.7).abs() < 0.01, "bearing {bearing}: {distance}");
        }
    }

    #[test]
    fn test_destination_wraps_antimeridian() {
        let east = destination(Location::new(0.0, 179.9), 90.0, 50_000.0);
        assert!(east.lon < -179.0);
    }

    #[test]
    fn test_circle_bounds_are_symmetric_in_latitude() {
        let bounds = circle_bounds(SF, 8046.7);

        assert!((bounds.center().lat - SF.lat).abs() < 1e-9);
        assert!((bounds.center().lon - SF.lon).abs() < 1e-9);
        assert!(bounds.contains(SF));
        // Longitude degrees shrink with latitude, so the box is wider than tall.
        assert!(bounds.lon_span() > bounds.lat_span());
    }

    #[test]
    fn test_circle_bounds_across_antimeridian_stay_narrow() {
        let fiji = Location::new(-16.85, 179.95);
        let radius = 8046.7;

        let bounds = circle_bounds(fiji, radius);
        let open_ocean = circle_bounds(Location::new(-16.85, 170.0), radius);

        assert!(bounds.max_lon > 180.0);
        assert!((bounds.lon_span() - open_ocean.lon_span()).abs() < 1e-9);
        assert!((bounds.center().lon - fiji.lon).abs() < 1e-9);
        // Past the line this point reads as about -179.98.
        let across = destination(fiji, 90.0, radius * 0.9);
        assert!(across.lon < 0.0);
        assert!(bounds.contains(across));
    }

    #[test]
    fn test_circle_over_pole_covers_every_longitude() {
        let svalbard_north = Location::new(89.98, 10.0);
        let bounds = circle_bounds(svalbard_north, 8046.7);

        assert_eq!(bounds.max_lat, 90.0);
        assert!((bounds.lon_span() - 360.0).abs() < 1e-9);
        assert!((bounds.center().lon - 10.0).abs() < 1e-9);
        assert!(bounds.min_lat < svalbard_north.lat);

        let south = circle_bounds(Location::new(-89.99, -45.0), 8046.7);
        assert_eq!(south.min_lat, -90.0);
        assert!((south.center().lon - -45.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_lon() {
        assert_eq!(normalize_lon(190.0), -170.0);
        assert_eq!(normalize_lon(-190.0), 170.0);
        assert_eq!(normalize_lon(180.0), -180.0);
        assert_eq!(normalize_lon(12.5), 12.5);
    }

    #[test]
    fn test_zero_radius_collapses_to_center() {
        let bounds = circle_bounds(SF, 0.0);
        assert!(bounds.lat_span().abs() < 1e-12);
        assert!(bounds.lon_span().abs() < 1e-12);
    }
}

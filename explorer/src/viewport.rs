//! Keeps the radius overlay, the centre marker and the map viewport in step
//! with the selected location and search radius.
//!
//! The synchronizer never patches an overlay's size: a radius change always
//! discards the live circle and builds a new one. A location-only change
//! moves the existing circle.

use crate::{
    geo,
    types::{Location, MapBounds},
};

pub const METERS_PER_MILE: f64 = 1609.34;
pub const MAX_RADIUS_MILES: f64 = 50.0;
/// Screen padding, in points, kept around the radius circle when fitting.
pub const FIT_PADDING: f32 = 50.0;

/// Handle to a circle living on a [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u64);

/// The rendering primitives the synchronizer needs from a map.
///
/// A surface is only handed to the synchronizer once the map is ready, so
/// implementations may assume they can draw and move the viewport.
pub trait MapSurface {
    fn add_circle(&mut self, center: Location, radius_meters: f64) -> OverlayId;

    fn move_circle(&mut self, id: OverlayId, center: Location);

    fn remove_circle(&mut self, id: OverlayId);

    fn place_marker(&mut self, at: Location);

    fn center_on(&mut self, at: Location);

    /// Moves the viewport so `bounds` is fully visible with `padding`
    /// points to spare on every side.
    fn fit_bounds(&mut self, bounds: MapBounds, padding: f32);
}

/// Restricts a radius to the slider's domain. NaN is treated as no radius.
pub fn clamp_radius(miles: f64) -> f64 {
    if miles.is_nan() {
        0.0
    } else {
        miles.clamp(0.0, MAX_RADIUS_MILES)
    }
}

pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

/// The user-edited search parameters: where to look and how far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    location: Location,
    radius_miles: f64,
}

impl SearchArea {
    pub fn new(location: Location, radius_miles: f64) -> Self {
        Self {
            location,
            radius_miles: clamp_radius(radius_miles),
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn radius_miles(&self) -> f64 {
        self.radius_miles
    }

    pub fn radius_meters(&self) -> f64 {
        miles_to_meters(self.radius_miles)
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Stores the clamped radius and returns it.
    pub fn set_radius(&mut self, miles: f64) -> f64 {
        self.radius_miles = clamp_radius(miles);
        self.radius_miles
    }
}

/// What the synchronizer currently has on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    Absent,
    Present { center: Location, radius_meters: f64 },
}

impl Overlay {
    pub fn is_present(&self) -> bool {
        matches!(self, Overlay::Present { .. })
    }
}

#[derive(Debug, Clone, Copy)]
struct LiveCircle {
    id: OverlayId,
    center: Location,
    radius_meters: f64,
}

/// Owner of the single live radius overlay.
#[derive(Debug, Default)]
pub struct ViewportSync {
    live: Option<LiveCircle>,
}

impl ViewportSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay(&self) -> Overlay {
        match self.live {
            Some(live) => Overlay::Present {
                center: live.center,
                radius_meters: live.radius_meters,
            },
            None => Overlay::Absent,
        }
    }

    /// Rebuilds the overlay from scratch for `area`.
    ///
    /// Without a surface nothing is drawn; the caller keeps `area` and
    /// recomputes once the map is ready.
    pub fn recompute<S: MapSurface + ?Sized>(
        &mut self,
        area: &SearchArea,
        surface: Option<&mut S>,
    ) -> Overlay {
        let Some(surface) = surface else {
            return self.overlay();
        };

        if let Some(live) = self.live.take() {
            surface.remove_circle(live.id);
        }

        let radius_meters = area.radius_meters();
        if radius_meters > 0.0 {
            let center = area.location();
            let id = surface.add_circle(center, radius_meters);
            self.live = Some(LiveCircle {
                id,
                center,
                radius_meters,
            });
            surface.fit_bounds(geo::circle_bounds(center, radius_meters), FIT_PADDING);
        }

        self.overlay()
    }

    /// Follows a location-only change: moves the marker, recentres the map
    /// and slides the live circle to the new centre.
    pub fn recenter<S: MapSurface + ?Sized>(
        &mut self,
        area: &SearchArea,
        surface: Option<&mut S>,
    ) -> Overlay {
        let Some(surface) = surface else {
            return self.overlay();
        };

        let center = area.location();
        surface.place_marker(center);
        surface.center_on(center);

        match self.live.as_mut() {
            Some(live) if live.radius_meters == area.radius_meters() => {
                surface.move_circle(live.id, center);
                live.center = center;
                surface.fit_bounds(geo::circle_bounds(center, live.radius_meters), FIT_PADDING);
                self.overlay()
            }
            _ => self.recompute(area, Some(surface)),
        }
    }

    /// Removes the live overlay from the map. Called when the view goes away.
    pub fn detach<S: MapSurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(live) = self.live.take() {
            surface.remove_circle(live.id);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records every call and keeps the set of circles alive on the "map".
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        next_id: u64,
        pub circles: Vec<(OverlayId, Location, f64)>,
        pub marker: Option<Location>,
        pub centered_on: Option<Location>,
        pub fits: Vec<(MapBounds, f32)>,
        pub removed: Vec<OverlayId>,
    }

    impl MapSurface for RecordingSurface {
        fn add_circle(&mut self, center: Location, radius_meters: f64) -> OverlayId {
            self.next_id += 1;
            let id = OverlayId(self.next_id);
            self.circles.push((id, center, radius_meters));
            id
        }

        fn move_circle(&mut self, id: OverlayId, center: Location) {
            let circle = self
                .circles
                .iter_mut()
                .find(|(live, _, _)| *live == id)
                .expect("moved a circle that is not on the map");
            circle.1 = center;
        }

        fn remove_circle(&mut self, id: OverlayId) {
            self.circles.retain(|(live, _, _)| *live != id);
            self.removed.push(id);
        }

        fn place_marker(&mut self, at: Location) {
            self.marker = Some(at);
        }

        fn center_on(&mut self, at: Location) {
            self.centered_on = Some(at);
        }

        fn fit_bounds(&mut self, bounds: MapBounds, padding: f32) {
            self.fits.push((bounds, padding));
        }
    }

    const SF: Location = Location {
        lat: 37.7749,
        lon: -122.4194,
    };

    fn radius_of(overlay: Overlay) -> f64 {
        match overlay {
            Overlay::Present { radius_meters, .. } => radius_meters,
            Overlay::Absent => panic!("expected an overlay"),
        }
    }

    #[test]
    fn test_clamp_radius() {
        assert_eq!(clamp_radius(-3.0), 0.0);
        assert_eq!(clamp_radius(12.5), 12.5);
        assert_eq!(clamp_radius(80.0), MAX_RADIUS_MILES);
        assert_eq!(clamp_radius(f64::NAN), 0.0);
        assert_eq!(SearchArea::new(SF, 99.0).radius_miles(), 50.0);
    }

    #[test]
    fn test_five_miles_in_san_francisco() {
        let mut surface = RecordingSurface::default();
        let mut sync = ViewportSync::new();

        let overlay = sync.recompute(&SearchArea::new(SF, 5.0), Some(&mut surface));

        assert!((radius_of(overlay) - 8046.7).abs() <= 0.5);
        assert_eq!(surface.circles.len(), 1);
        assert_eq!(surface.circles[0].1, SF);

        let (bounds, padding) = surface.fits[0];
        assert_eq!(padding, FIT_PADDING);
        assert_eq!(bounds, geo::circle_bounds(SF, miles_to_meters(5.0)));
    }

    #[test]
    fn test_overlay_present_iff_radius_positive() {
        for radius in [0.0, 0.25, 1.0, 17.0, 50.0] {
            let mut surface = RecordingSurface::default();
            let mut sync = ViewportSync::new();

            let overlay = sync.recompute(&SearchArea::new(SF, radius), Some(&mut surface));

            assert_eq!(overlay.is_present(), radius > 0.0);
            if radius > 0.0 {
                assert!((radius_of(overlay) - radius * METERS_PER_MILE).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_zero_radius_neither_draws_nor_fits() {
        let mut surface = RecordingSurface::default();
        let mut sync = ViewportSync::new();

        let overlay = sync.recompute(&SearchArea::new(SF, 0.0), Some(&mut surface));

        assert_eq!(overlay, Overlay::Absent);
        assert!(surface.circles.is_empty());
        assert!(surface.fits.is_empty());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let area = SearchArea::new(SF, 3.0);
        let mut surface = RecordingSurface::default();
        let mut sync = ViewportSync::new();

        let once = sync.recompute(&area, Some(&mut surface));
        let twice = sync.recompute(&area, Some(&mut surface));

        assert_eq!(once, twice);
        assert_eq!(surface.circles.len(), 1);
        assert_eq!(surface.removed.len(), 1);
    }

    #[test]
    fn test_radius_to_zero_removes_overlay() {
        let mut area = SearchArea::new(SF, 10.0);
        let mut surface = RecordingSurface::default();
        let mut sync = ViewportSync::new();
        sync.recompute(&area, Some(&mut surface));

        area.set_radius(0.0);
        let fits_before = surface.fits.len();
        let overlay = sync.recompute(&area, Some(&mut surface));

        assert_eq!(overlay, Overlay::Absent);
        assert!(surface.circles.is_empty());
        assert_eq!(surface.fits.len(), fits_before);
    }

    #[test]
    fn test_recenter_moves_without_rebuilding() {
        let oakland = Location::new(37.8044, -122.2712);
        let mut area = SearchArea::new(SF, 2.0);
        let mut surface = RecordingSurface::default();
        let mut sync = ViewportSync::new();
        sync.recompute(&area, Some(&mut surface));
        let id = surface.circles[0].0;

        area.set_location(oakland);
        let overlay = sync.recenter(&area, Some(&mut surface));

        assert_eq!(
            overlay,
            Overlay::Present {
                center: oakland,
                radius_meters: miles_to_meters(2.0)
            }
        );
        assert_eq!(surface.circles, vec![(id, oakland, miles_to_meters(2.0))]);
        assert!(surface.removed.is_empty());
        assert_eq!(surface.marker, Some(oakland));
        assert_eq!(surface.centered_on, Some(oakland));
    }

    #[test]
    fn test_recenter_with_zero_radius_only_moves_marker() {
        let oakland = Location::new(37.8044, -122.2712);
        let area = SearchArea::new(oakland, 0.0);
        let mut surface = RecordingSurface::default();
        let mut sync = ViewportSync::new();

        let overlay = sync.recenter(&area, Some(&mut surface));

        assert_eq!(overlay, Overlay::Absent);
        assert_eq!(surface.marker, Some(oakland));
        assert!(surface.fits.is_empty());
    }

    #[test]
    fn test_no_surface_is_a_no_op() {
        let mut sync = ViewportSync::new();
        let overlay = sync.recompute(&SearchArea::new(SF, 5.0), None::<&mut RecordingSurface>);
        assert_eq!(overlay, Overlay::Absent);
    }

    #[test]
    fn test_detach_clears_the_map() {
        let mut surface = RecordingSurface::default();
        let mut sync = ViewportSync::new();
        sync.recompute(&SearchArea::new(SF, 4.0), Some(&mut surface));

        sync.detach(&mut surface);

        assert!(surface.circles.is_empty());
        assert_eq!(sync.overlay(), Overlay::Absent);
    }
}

use std::collections::BTreeSet;

use crate::{
    errors::GeocodeError,
    types::{Category, Location},
    viewport::{MapSurface, Overlay, SearchArea, ViewportSync},
};

/// The selected location and radius together with the overlay drawn for
/// them. Owned by the application; every change goes through here so the
/// map always reflects the latest values.
#[derive(Debug)]
pub struct SearchSession {
    area: SearchArea,
    sync: ViewportSync,
}

impl SearchSession {
    pub fn new(location: Location, radius_miles: f64) -> Self {
        Self {
            area: SearchArea::new(location, radius_miles),
            sync: ViewportSync::new(),
        }
    }

    pub fn area(&self) -> &SearchArea {
        &self.area
    }

    pub fn overlay(&self) -> Overlay {
        self.sync.overlay()
    }

    /// Stores the new location and, when the map is ready, moves the marker
    /// and the overlay there.
    pub fn set_location<S: MapSurface + ?Sized>(
        &mut self,
        location: Location,
        surface: Option<&mut S>,
    ) -> Overlay {
        self.area.set_location(location);
        self.sync.recenter(&self.area, surface)
    }

    /// Stores the clamped radius and rebuilds the overlay if it changed.
    pub fn set_radius<S: MapSurface + ?Sized>(
        &mut self,
        radius_miles: f64,
        surface: Option<&mut S>,
    ) -> Overlay {
        let previous = self.area.radius_miles();
        if self.area.set_radius(radius_miles) == previous {
            return self.sync.overlay();
        }
        self.sync.recompute(&self.area, surface)
    }

    /// The map just became available: draw whatever the stored values say.
    pub fn map_ready<S: MapSurface + ?Sized>(&mut self, surface: &mut S) -> Overlay {
        let location = self.area.location();
        surface.place_marker(location);
        surface.center_on(location);
        self.sync.recompute(&self.area, Some(surface))
    }

    /// Applies the outcome of a geocode. A failure leaves everything as it
    /// was and is handed back for the caller to show.
    pub fn apply_geocode<S: MapSurface + ?Sized>(
        &mut self,
        result: Result<Location, GeocodeError>,
        surface: Option<&mut S>,
    ) -> Result<Overlay, GeocodeError> {
        let location = result?;
        Ok(self.set_location(location, surface))
    }

    pub fn teardown<S: MapSurface + ?Sized>(&mut self, surface: &mut S) {
        self.sync.detach(surface);
    }
}

/// Tracks what the panels around the map display.
#[derive(Debug, Default)]
pub struct ViewState {
    pub search_text: String,
    pub error: Option<String>,
    pub categories: BTreeSet<Category>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// If the category is already selected it is deselected, otherwise selected.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    pub fn selected_categories(&self) -> Vec<Category> {
        self.categories.iter().copied().collect()
    }

    pub fn report(&mut self, error: &GeocodeError) {
        self.error = Some(error.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::{miles_to_meters, tests::RecordingSurface};

    const SF: Location = Location {
        lat: 37.7749,
        lon: -122.4194,
    };

    #[test]
    fn test_changes_before_map_ready_are_replayed() {
        let mut session = SearchSession::new(SF, 0.0);
        let berkeley = Location::new(37.8715, -122.2730);

        session.set_radius(7.0, None::<&mut RecordingSurface>);
        session.set_location(berkeley, None::<&mut RecordingSurface>);
        assert_eq!(session.overlay(), Overlay::Absent);

        let mut surface = RecordingSurface::default();
        let overlay = session.map_ready(&mut surface);

        assert_eq!(
            overlay,
            Overlay::Present {
                center: berkeley,
                radius_meters: miles_to_meters(7.0)
            }
        );
        assert_eq!(surface.marker, Some(berkeley));
        assert_eq!(surface.circles.len(), 1);
    }

    #[test]
    fn test_failed_geocode_changes_nothing() {
        let mut surface = RecordingSurface::default();
        let mut session = SearchSession::new(SF, 5.0);
        session.map_ready(&mut surface);
        let before = session.overlay();

        let result = session.apply_geocode(
            Err(GeocodeError::NotFound("Atlantis".into())),
            Some(&mut surface),
        );

        assert!(result.is_err());
        assert_eq!(session.overlay(), before);
        assert_eq!(session.area().location(), SF);
        assert_eq!(surface.circles.len(), 1);
    }

    #[test]
    fn test_successful_geocode_recenters() {
        let mut surface = RecordingSurface::default();
        let mut session = SearchSession::new(SF, 5.0);
        session.map_ready(&mut surface);
        let seattle = Location::new(47.6062, -122.3321);

        let overlay = session
            .apply_geocode(Ok(seattle), Some(&mut surface))
            .unwrap();

        assert_eq!(
            overlay,
            Overlay::Present {
                center: seattle,
                radius_meters: miles_to_meters(5.0)
            }
        );
        assert_eq!(surface.centered_on, Some(seattle));
    }

    #[test]
    fn test_same_radius_does_not_rebuild() {
        let mut surface = RecordingSurface::default();
        let mut session = SearchSession::new(SF, 5.0);
        session.map_ready(&mut surface);

        session.set_radius(5.0, Some(&mut surface));
        session.set_radius(120.0, Some(&mut surface));
        session.set_radius(50.0, Some(&mut surface));

        // 120 clamps to 50: one rebuild. Repeats of the stored value rebuild nothing.
        assert_eq!(surface.removed.len(), 1);
        assert_eq!(session.area().radius_miles(), 50.0);
    }

    #[test]
    fn test_teardown_detaches_overlay() {
        let mut surface = RecordingSurface::default();
        let mut session = SearchSession::new(SF, 5.0);
        session.map_ready(&mut surface);

        session.teardown(&mut surface);

        assert!(surface.circles.is_empty());
        assert_eq!(session.overlay(), Overlay::Absent);
    }

    #[test]
    fn test_toggle_category() {
        let mut view = ViewState::new();
        view.toggle_category(Category::Food);
        view.toggle_category(Category::Culture);
        view.toggle_category(Category::Food);

        assert_eq!(view.selected_categories(), vec![Category::Culture]);
    }

    #[test]
    fn test_report_uses_user_facing_text() {
        let mut view = ViewState::new();
        view.report(&GeocodeError::PlaceNotFound("Ghost Town".into()));
        assert_eq!(view.error.as_deref(), Some("Place not found."));
        view.clear_error();
        assert!(view.error.is_none());
    }
}

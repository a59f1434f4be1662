use std::f64::consts::{FRAC_PI_4, PI};

use egui::Vec2;
use walkers::MapMemory;

use crate::{
    types::{Location, MapBounds},
    viewport::{MapSurface, OverlayId},
};

const TILE_SIZE: f64 = 256.0;
const MIN_FIT_ZOOM: f64 = 2.0;
const MAX_FIT_ZOOM: f64 = 18.0;
/// Web-Mercator stops at this latitude.
const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// A circle the map should draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleOverlay {
    pub id: OverlayId,
    pub center: Location,
    pub radius_meters: f64,
}

/// `MapSurface` over a walkers map. It only accepts overlay work once the
/// map has been laid out, because fitting needs the on-screen size.
pub struct WalkersSurface {
    memory: MapMemory,
    viewport: Option<Vec2>,
    marker: Location,
    circles: Vec<CircleOverlay>,
    next_id: u64,
}

impl WalkersSurface {
    pub fn new(marker: Location, zoom: f64) -> Self {
        let mut memory = MapMemory::default();
        let _ = memory.set_zoom(zoom);
        Self {
            memory,
            viewport: None,
            marker,
            circles: Vec::new(),
            next_id: 0,
        }
    }

    pub fn memory_mut(&mut self) -> &mut MapMemory {
        &mut self.memory
    }

    pub fn marker(&self) -> Location {
        self.marker
    }

    pub fn circles(&self) -> &[CircleOverlay] {
        &self.circles
    }

    /// Records the size the map was laid out at. Returns `true` the first
    /// time, which is the map-ready event.
    pub fn laid_out(&mut self, size: Vec2) -> bool {
        let first = self.viewport.is_none();
        self.viewport = Some(size);
        first
    }

    /// The surface, if the map has been laid out at least once.
    pub fn ready(&mut self) -> Option<&mut Self> {
        if self.viewport.is_some() {
            Some(self)
        } else {
            None
        }
    }
}

impl MapSurface for WalkersSurface {
    fn add_circle(&mut self, center: Location, radius_meters: f64) -> OverlayId {
        self.next_id += 1;
        let id = OverlayId(self.next_id);
        self.circles.push(CircleOverlay {
            id,
            center,
            radius_meters,
        });
        id
    }

    fn move_circle(&mut self, id: OverlayId, center: Location) {
        if let Some(circle) = self.circles.iter_mut().find(|circle| circle.id == id) {
            circle.center = center;
        }
    }

    fn remove_circle(&mut self, id: OverlayId) {
        self.circles.retain(|circle| circle.id != id);
    }

    fn place_marker(&mut self, at: Location) {
        self.marker = at;
    }

    fn center_on(&mut self, at: Location) {
        self.memory.center_at(at.into());
    }

    fn fit_bounds(&mut self, bounds: MapBounds, padding: f32) {
        let Some(viewport) = self.viewport else {
            return;
        };
        let center = bounds.center();
        let lat = center.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
        self.memory.center_at(Location::new(lat, center.lon).into());
        let _ = self.memory.set_zoom(fit_zoom(&bounds, viewport, padding));
    }
}

/// The largest zoom at which `bounds` fits inside `viewport` minus `padding`
/// on every side.
pub fn fit_zoom(bounds: &MapBounds, viewport: Vec2, padding: f32) -> f64 {
    let width = f64::from((viewport.x - 2.0 * padding).max(1.0));
    let height = f64::from((viewport.y - 2.0 * padding).max(1.0));

    let lon_fraction = bounds.lon_span() / 360.0;
    let lat_fraction = (mercator_y(bounds.max_lat) - mercator_y(bounds.min_lat)) / (2.0 * PI);

    let zoom_for = |pixels: f64, fraction: f64| {
        if fraction <= 0.0 {
            MAX_FIT_ZOOM
        } else {
            (pixels / (TILE_SIZE * fraction)).log2()
        }
    };

    zoom_for(width, lon_fraction)
        .min(zoom_for(height, lat_fraction))
        .clamp(MIN_FIT_ZOOM, MAX_FIT_ZOOM)
}

fn mercator_y(lat: f64) -> f64 {
    let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    (FRAC_PI_4 + lat / 2.0).tan().ln()
}

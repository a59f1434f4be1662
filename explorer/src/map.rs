use egui::Context;
use logger::{Color, Logger};
use walkers::{
    sources::{Mapbox, MapboxStyle},
    HttpOptions, HttpTiles, Map, Tiles,
};

use crate::{
    activities::ActivityCatalog,
    config::Config,
    errors::GeocodeError,
    geocoder::{Gazetteer, Geocoder},
    plugins,
    state::{SearchSession, ViewState},
    surface::WalkersSurface,
    types::{Location, Place, DEFAULT_LOCATION},
    viewport::Overlay,
    widgets::{SearchEvent, WidgetResults, WidgetSearch},
    windows,
};

const INITIAL_ZOOM: f64 = 12.0;

/// The explorer window: a map with the search radius drawn on it, and the
/// search, filter and results windows floating above.
pub struct ExplorerApp {
    tiles: Option<Box<dyn Tiles>>,
    surface: WalkersSurface,
    session: SearchSession,
    view_state: ViewState,
    search_widget: WidgetSearch,
    results_widget: Option<WidgetResults>,
    gazetteer: Gazetteer,
    catalog: ActivityCatalog,
    logger: Logger,
    missing_key: Option<String>,
}

impl ExplorerApp {
    /// Creates the app. Without an API key no tiles are fetched and the map
    /// area shows a placeholder instead.
    pub fn new(
        egui_ctx: Context,
        config: &Config,
        gazetteer: Gazetteer,
        catalog: ActivityCatalog,
        logger: Logger,
    ) -> Self {
        let tiles = config.api_key.as_ref().map(|token| {
            Box::new(HttpTiles::with_options(
                Mapbox {
                    style: MapboxStyle::Streets,
                    high_resolution: false,
                    access_token: token.clone(),
                },
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )) as Box<dyn Tiles>
        });

        let missing_key = config.missing_key_message();
        if let Some(message) = &missing_key {
            let _ = logger.error(message);
        }

        Self {
            tiles,
            surface: WalkersSurface::new(DEFAULT_LOCATION, INITIAL_ZOOM),
            session: SearchSession::new(DEFAULT_LOCATION, config.initial_radius_miles),
            view_state: ViewState::new(),
            search_widget: WidgetSearch::new(),
            results_widget: None,
            gazetteer,
            catalog,
            logger,
            missing_key,
        }
    }

    fn submit_search(&mut self, query: String) {
        if query.trim().is_empty() {
            return;
        }
        let result = self.gazetteer.geocode(&query);
        self.apply_location(&query, result);
    }

    fn select_place(&mut self, place: Place) {
        let result = self.gazetteer.resolve(&place);
        self.apply_location(&place.name, result);
    }

    fn apply_location(&mut self, what: &str, result: Result<Location, GeocodeError>) {
        match self
            .session
            .apply_geocode(result, self.surface.ready())
        {
            Ok(overlay) => {
                self.view_state.clear_error();
                let location = self.session.area().location();
                let _ = self.logger.info(
                    &format!("'{what}' resolved to ({:.4}, {:.4})", location.lat, location.lon),
                    Color::Green,
                );
                self.log_overlay(overlay);
            }
            Err(error) => {
                let _ = self.logger.warn(&format!("'{what}' not resolved: {error:?}"));
                self.view_state.report(&error);
            }
        }
    }

    fn change_radius(&mut self, radius_miles: f64) {
        let overlay = self.session.set_radius(radius_miles, self.surface.ready());
        let _ = self.logger.debug(&format!(
            "radius set to {} miles",
            self.session.area().radius_miles()
        ));
        self.log_overlay(overlay);
    }

    /// Freezes the current filters into the results panel.
    fn explore(&mut self) {
        let categories = self.view_state.selected_categories();
        let area = self.session.area();
        let activities = self
            .catalog
            .summarize(area.location(), area.radius_miles(), &categories);

        let _ = self.logger.info(
            &format!(
                "explore: {} categories within {} miles, {} sample activities",
                categories.len(),
                area.radius_miles(),
                activities.len()
            ),
            Color::Magenta,
        );
        self.results_widget = Some(WidgetResults::new(
            &categories,
            area.radius_miles(),
            activities,
        ));
    }

    fn log_overlay(&self, overlay: Overlay) {
        let message = match overlay {
            Overlay::Present {
                center,
                radius_meters,
            } => format!(
                "overlay at ({:.4}, {:.4}) with radius {:.1} m",
                center.lat, center.lon, radius_meters
            ),
            Overlay::Absent => "no overlay".to_string(),
        };
        let _ = self.logger.debug(&message);
    }

    fn show_map(&mut self, ui: &mut egui::Ui) {
        let Some(tiles) = self.tiles.as_mut() else {
            windows::map_placeholder(ui, self.missing_key.as_deref());
            return;
        };

        let marker = self.surface.marker();
        let circles = self.surface.circles().to_vec();

        let map = Map::new(Some(tiles.as_mut()), self.surface.memory_mut(), marker.into())
            .with_plugin(plugins::RadiusCircles::new(&circles))
            .with_plugin(plugins::CenterMarker::new(marker));
        let response = ui.add(map);

        if self.surface.laid_out(response.rect.size()) {
            let _ = self.logger.info("map ready", Color::Blue);
            let overlay = self.session.map_ready(&mut self.surface);
            self.log_overlay(overlay);
        }

        windows::zoom(ui, self.surface.memory_mut());
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| self.show_map(ui));

        match self
            .search_widget
            .show(ctx, &mut self.view_state, &self.gazetteer)
        {
            Some(SearchEvent::Submitted(query)) => self.submit_search(query),
            Some(SearchEvent::PlaceSelected(place)) => self.select_place(place),
            None => {}
        }

        let radius_miles = self.session.area().radius_miles();
        let events = windows::filters(ctx, &mut self.view_state, radius_miles);
        if let Some(radius) = events.radius_miles {
            self.change_radius(radius);
        }
        if events.explore {
            self.explore();
        }

        if let Some(widget) = &mut self.results_widget {
            if !widget.show(ctx) {
                self.results_widget = None;
            }
        }
    }
}

impl Drop for ExplorerApp {
    fn drop(&mut self) {
        self.session.teardown(&mut self.surface);
    }
}

use egui::{Align2, RichText, Ui, Window};
use walkers::MapMemory;

use crate::{state::ViewState, types::Category, viewport::MAX_RADIUS_MILES};

/// What the filters window asked for this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FilterEvents {
    pub radius_miles: Option<f64>,
    pub explore: bool,
}

/// Simple GUI to zoom in and out.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    Window::new("Map")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}

/// Radius slider, category toggles and the Explore button.
pub fn filters(ctx: &egui::Context, view_state: &mut ViewState, radius_miles: f64) -> FilterEvents {
    let mut events = FilterEvents::default();

    Window::new("Search area")
        .resizable(false)
        .collapsible(true)
        .anchor(Align2::LEFT_BOTTOM, [20.0, -70.0])
        .show(ctx, |ui| {
            let mut radius = radius_miles;
            let slider = egui::Slider::new(&mut radius, 0.0..=MAX_RADIUS_MILES)
                .step_by(0.5)
                .text("miles");
            if ui.add(slider).changed() {
                events.radius_miles = Some(radius);
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Activities").strong());
            ui.horizontal_wrapped(|ui| {
                for category in Category::ALL {
                    let selected = view_state.categories.contains(&category);
                    let text = format!("{} {}", category.icon(), category.label());
                    if ui.selectable_label(selected, text).clicked() {
                        view_state.toggle_category(category);
                    }
                }
            });

            ui.add_space(8.0);
            if ui
                .add_sized([120.0, 32.0], egui::Button::new("Explore").rounding(8.0))
                .clicked()
            {
                events.explore = true;
            }
        });

    events
}

/// Stands in for the map when it cannot be shown.
pub fn map_placeholder(ui: &mut Ui, message: Option<&str>) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Loading map...");
            if let Some(message) = message {
                ui.colored_label(egui::Color32::RED, message);
            }
        });
    });
}

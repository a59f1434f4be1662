use egui::{Color32, RichText};

use crate::{geocoder::Geocoder, state::ViewState, types::Place};

const MAX_SUGGESTIONS: usize = 5;

/// What the user asked the search window to do this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Free text submitted with Enter or the Search button.
    Submitted(String),
    /// An autocomplete suggestion was picked.
    PlaceSelected(Place),
}

/// The title card and location search bar, with autocomplete suggestions
/// under the text field.
pub struct WidgetSearch {
    suggestions: Vec<Place>,
}

impl WidgetSearch {
    pub fn new() -> Self {
        Self {
            suggestions: Vec::new(),
        }
    }

    pub fn show<G: Geocoder>(
        &mut self,
        ctx: &egui::Context,
        view_state: &mut ViewState,
        geocoder: &G,
    ) -> Option<SearchEvent> {
        let mut event = None;

        egui::Window::new("Venture Map")
            .resizable(false)
            .collapsible(true)
            .fixed_pos([20.0, 20.0])
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(
                        "Find the top places around a location, within a radius, for the activities you like.",
                    )
                    .size(13.0),
                );
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut view_state.search_text)
                            .hint_text("Select a location")
                            .desired_width(260.0),
                    );

                    if response.changed() {
                        self.suggestions =
                            geocoder.suggest(&view_state.search_text, MAX_SUGGESTIONS);
                    }

                    let entered =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Search").clicked() || entered {
                        self.suggestions.clear();
                        event = Some(SearchEvent::Submitted(view_state.search_text.clone()));
                    }
                });

                if !self.suggestions.is_empty() {
                    ui.separator();
                    let mut picked = None;
                    for place in &self.suggestions {
                        let text = format!("{}  ·  {}", place.name, place.address);
                        if ui.selectable_label(false, text).clicked() {
                            picked = Some(place.clone());
                        }
                    }
                    if let Some(place) = picked {
                        view_state.search_text = place.name.clone();
                        self.suggestions.clear();
                        event = Some(SearchEvent::PlaceSelected(place));
                    }
                }

                if let Some(error) = &view_state.error {
                    ui.add_space(6.0);
                    ui.colored_label(Color32::RED, error);
                }
            });

        event
    }
}

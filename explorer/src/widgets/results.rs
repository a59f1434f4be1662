use egui::{Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    activities::ActivitySummary,
    results::{category_badge, placeholder_results, radius_badge, PlaceCard},
    types::Category,
};

/// The "Top Places to Explore" panel, built from the filters in effect when
/// Explore was pressed.
pub struct WidgetResults {
    cards: Vec<PlaceCard>,
    activities: Vec<ActivitySummary>,
    category_count: usize,
    radius_miles: f64,
}

impl WidgetResults {
    pub fn new(
        categories: &[Category],
        radius_miles: f64,
        activities: Vec<ActivitySummary>,
    ) -> Self {
        Self {
            cards: placeholder_results(categories),
            activities,
            category_count: categories.len(),
            radius_miles,
        }
    }

    /// Shows the panel. Returns `false` once the user closes it.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;
        let screen_width = ctx.screen_rect().width();

        egui::Window::new("Top Places to Explore")
            .resizable(false)
            .collapsible(true)
            .open(&mut open)
            .fixed_pos([screen_width - 440.0, 20.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(category_badge(self.category_count))
                            .color(Color32::from_rgb(30, 64, 175)),
                    );
                    ui.separator();
                    ui.label(
                        RichText::new(radius_badge(self.radius_miles))
                            .color(Color32::from_rgb(30, 64, 175)),
                    );
                });
                ui.add_space(8.0);

                TableBuilder::new(ui)
                    .id_salt("places")
                    .striped(true)
                    .column(Column::auto().at_least(70.0))
                    .column(Column::auto().at_least(130.0))
                    .column(Column::remainder().at_least(150.0))
                    .header(22.0, |mut header| {
                        header.col(|ui| {
                            ui.strong("Place");
                        });
                        header.col(|ui| {
                            ui.strong("Address");
                        });
                        header.col(|ui| {
                            ui.strong("Categories");
                        });
                    })
                    .body(|mut body| {
                        for card in &self.cards {
                            body.row(24.0, |mut row| {
                                row.col(|ui| {
                                    ui.label(RichText::new(&card.title).strong());
                                });
                                row.col(|ui| {
                                    ui.label(RichText::new(&card.address).color(Color32::GRAY));
                                });
                                row.col(|ui| {
                                    let tags: Vec<String> = card
                                        .categories
                                        .iter()
                                        .map(|c| format!("{} {}", c.icon(), c.label()))
                                        .collect();
                                    ui.label(tags.join("  "));
                                });
                            });
                        }
                    });

                ui.add_space(12.0);
                ui.heading("Sample activities nearby");
                if self.activities.is_empty() {
                    ui.label(RichText::new("No sample activities in this radius.").italics());
                } else {
                    self.show_activities(ui);
                }
            });

        open
    }

    fn show_activities(&self, ui: &mut egui::Ui) {
        TableBuilder::new(ui)
            .id_salt("activities")
            .striped(true)
            .max_scroll_height(220.0)
            .column(Column::auto().at_least(150.0))
            .column(Column::auto().at_least(40.0))
            .column(Column::auto().at_least(60.0))
            .column(Column::remainder().at_least(120.0))
            .header(22.0, |mut header| {
                for title in ["Activity", "Price", "Distance", "Tags"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for activity in &self.activities {
                    body.row(24.0, |mut row| {
                        row.col(|ui| {
                            ui.label(RichText::new(&activity.name).strong())
                                .on_hover_text(format!(
                                    "{}\n{}\n{}",
                                    activity.address, activity.hours, activity.description
                                ));
                        });
                        row.col(|ui| {
                            ui.label(activity.price);
                        });
                        row.col(|ui| {
                            ui.label(&activity.distance);
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(activity.tags.join(", ")).color(Color32::GRAY));
                        });
                    });
                }
            });
    }
}

use egui::{Color32, Response, Stroke};
use walkers::{Plugin, Projector};

use crate::{geo, surface::CircleOverlay};

const FILL: Color32 = Color32::from_rgba_premultiplied(20, 50, 118, 50);
const OUTLINE: Color32 = Color32::from_rgb(37, 99, 235);

/// Draws the search radius circles kept by the map surface.
pub struct RadiusCircles<'a> {
    circles: &'a [CircleOverlay],
}

impl<'a> RadiusCircles<'a> {
    pub fn new(circles: &'a [CircleOverlay]) -> Self {
        Self { circles }
    }
}

impl Plugin for RadiusCircles<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for circle in self.circles {
            circle.draw(ui, projector);
        }
    }
}

impl CircleOverlay {
    fn draw(&self, ui: &mut egui::Ui, projector: &Projector) {
        let center = projector.project(self.center.into()).to_pos2();

        // Mercator is conformal, so the northward edge gives the on-screen radius.
        let edge = geo::destination(self.center, 0.0, self.radius_meters);
        let radius = (projector.project(edge.into()).to_pos2() - center).length();

        ui.painter()
            .circle(center, radius, FILL, Stroke::new(2.0, OUTLINE));
    }
}

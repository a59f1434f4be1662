use egui::{Color32, Response, Stroke, Vec2};
use walkers::{Plugin, Projector};

use crate::types::Location;

const PIN_RADIUS: f32 = 9.0;

/// Pin at the selected location.
pub struct CenterMarker {
    at: Location,
}

impl CenterMarker {
    pub fn new(at: Location) -> Self {
        Self { at }
    }
}

impl Plugin for CenterMarker {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let tip = projector.project(self.at.into()).to_pos2();
        let head = tip - Vec2::new(0.0, PIN_RADIUS * 1.8);
        let painter = ui.painter();

        painter.line_segment([head, tip], Stroke::new(3.0, Color32::from_rgb(185, 28, 28)));
        painter.circle(
            head,
            PIN_RADIUS,
            Color32::from_rgb(220, 38, 38),
            Stroke::new(2.0, Color32::WHITE),
        );
        painter.circle_filled(head, PIN_RADIUS / 3.0, Color32::WHITE);
    }
}

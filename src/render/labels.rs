//! Body captions using egui for text rendering.
//!
//! Renders "<name>: <distance>km" centred on every body except the
//! central one.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::ViewSettings;
use crate::physics::SolarSystem;

/// Draw distance captions for all orbiting bodies.
pub(super) fn draw_body_labels(
    mut contexts: EguiContexts,
    system: Res<SolarSystem>,
    settings: Res<ViewSettings>,
) {
    if !settings.show_labels {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("body_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            let painter = ui.painter();
            let font = egui::FontId::proportional(settings.font_size);

            for body in system.bodies() {
                let state = body.current_display_state(&settings.projection);
                let Some(caption) = state.caption() else {
                    continue;
                };

                // Screen space already matches egui's top-left, y-down layout
                painter.text(
                    egui::pos2(state.screen_position.x, state.screen_position.y),
                    egui::Align2::CENTER_CENTER,
                    caption,
                    font.clone(),
                    egui::Color32::WHITE,
                );
            }
        });
}

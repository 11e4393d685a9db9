//! The in-game HUD: whose turn it is, how much of the pile is left,
//! the controls, and the one-line status channel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use engine::game::Perpignan;
use rendering::ghost::StatusMessage;

fn status_color(text: &str) -> egui::Color32 {
    if text.starts_with("Cannot") {
        egui::Color32::from_rgb(220, 60, 60)
    } else {
        egui::Color32::from_rgb(120, 200, 120)
    }
}

pub fn hud_panel(
    mut contexts: EguiContexts,
    game: Option<Res<Perpignan>>,
    status: Res<StatusMessage>,
) {
    let Some(game) = game else {
        return;
    };

    egui::Window::new("Perpignan")
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .resizable(false)
        .collapsible(false)
        .show(contexts.ctx_mut(), |ui| {
            if game.hand().is_some() {
                ui.label(format!("{} to play", game.active_player_name()));
                ui.label(format!("{} tiles left", game.deck.len()));
            } else {
                ui.label("Game over — the pile is empty");
            }

            ui.separator();
            ui.small("scroll: rotate");
            ui.small("click: place");

            if status.timer > 0.0 {
                ui.separator();
                ui.colored_label(status_color(&status.text), &status.text);
            }
        });
}

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use engine::rng::DeckRng;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Perpignan".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((engine::EnginePlugin, rendering::RenderingPlugin, ui::UiPlugin));

    // Seeded deal: PERPIGNAN_SEED=<u64> replays the same game.
    if let Ok(seed) = std::env::var("PERPIGNAN_SEED") {
        match seed.parse::<u64>() {
            Ok(seed) => {
                app.insert_resource(DeckRng::from_seed_u64(seed));
            }
            Err(_) => {
                warn!("PERPIGNAN_SEED is not a u64, using the default seed");
            }
        }
    }

    app.run();
}

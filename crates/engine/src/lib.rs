use bevy::prelude::*;

pub mod config;
pub mod game;
pub mod players;
pub mod rng;
pub mod tile;
pub mod tileset;


pub struct EnginePlugin;

impl Plugin for EnginePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<rng::DeckRng>()
            .add_event::<game::TilePlaced>()
            .add_systems(Startup, game::init_game)
            .add_systems(Update, game::advance_turn);
    }
}

use bevy::prelude::*;

pub mod assets;
pub mod board;
pub mod camera;
pub mod ghost;
pub mod lighting;
pub mod tile_assembly;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<assets::TileAssets>()
            .init_resource::<board::SpawnedTiles>()
            .init_resource::<ghost::GhostState>()
            .init_resource::<ghost::SpawnedGhost>()
            .init_resource::<ghost::LastPointer>()
            .init_resource::<ghost::RotationTween>()
            .init_resource::<ghost::StatusMessage>()
            .add_systems(
                Startup,
                (
                    assets::load_tile_library,
                    lighting::setup_lighting,
                    camera::setup_camera,
                )
                    .chain()
                    .after(engine::game::init_game),
            )
            .add_systems(
                Update,
                (assets::index_tile_library, board::spawn_placed_tiles).chain(),
            )
            .add_systems(
                Update,
                (
                    ghost::sync_ghost,
                    ghost::update_ghost_cursor,
                    ghost::rotate_ghost,
                    ghost::advance_rotation_tween,
                    ghost::commit_ghost,
                    ghost::tick_status_message,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (camera::refit_on_placement, camera::apply_camera_fit).chain(),
            );
    }
}

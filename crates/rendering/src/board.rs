//! Board scene population.
//!
//! Placed tiles are compiled once and spawned once; the directive list
//! owns nothing after spawning — entity lifetimes belong to this
//! backend. A tile that fails to compile means the tile library fed to
//! the engine is corrupt, and the app aborts rather than render a
//! wrong board.

use std::collections::HashSet;

use bevy::prelude::*;

use engine::game::Perpignan;

use crate::assets::TileAssets;
use crate::tile_assembly::{compile, TileAssembly};

/// Grid positions already turned into scene entities.
#[derive(Resource, Default)]
pub struct SpawnedTiles(pub HashSet<(i32, i32)>);

/// Board (x, y) → world space. The board plane is XZ with +x east and
/// north mapped to -z, so clockwise on the board is clockwise from the
/// camera.
pub fn board_to_world(position: (i32, i32)) -> Vec3 {
    Vec3::new(position.0 as f32, 0.0, -position.1 as f32)
}

/// Spawn entities for every placed tile that has none yet. Covers both
/// the pre-placed starting tile and every commit after it.
pub fn spawn_placed_tiles(
    mut commands: Commands,
    game: Option<Res<Perpignan>>,
    assets: Res<TileAssets>,
    mut spawned: ResMut<SpawnedTiles>,
) {
    if !assets.ready() {
        return;
    }
    let Some(game) = game else {
        return;
    };

    for (&position, tile) in game.grid() {
        if spawned.0.contains(&position) {
            continue;
        }
        match compile(tile) {
            Ok(assembly) => {
                spawn_assembly(&mut commands, &assets, &assembly, board_to_world(position));
                spawned.0.insert(position);
            }
            Err(e) => {
                error!("tile at {position:?} failed to compile: {e}");
                panic!("corrupt tile library");
            }
        }
    }
}

/// Spawn one entity tree for a compiled tile: a root carrying the
/// board transform and the uniform assembly scale, one child per
/// directive carrying its rotation, and the library node's own
/// transform plus mesh primitives below that.
pub fn spawn_assembly(
    commands: &mut Commands,
    assets: &TileAssets,
    assembly: &TileAssembly,
    translation: Vec3,
) -> Entity {
    let root = commands
        .spawn((
            Transform::from_translation(translation).with_scale(Vec3::splat(assembly.scale)),
            Visibility::default(),
        ))
        .id();

    for directive in &assembly.pieces {
        let meshes = assets.piece(directive.piece);
        let holder = commands
            .spawn((
                Transform::from_rotation(Quat::from_rotation_y(
                    directive.rotation_degrees.to_radians(),
                )),
                Visibility::default(),
            ))
            .id();
        commands.entity(root).add_child(holder);

        let instance = commands
            .spawn((meshes.transform, Visibility::default()))
            .id();
        commands.entity(holder).add_child(instance);

        for (mesh, material) in &meshes.primitives {
            let mut primitive = commands.spawn((
                Mesh3d(mesh.clone()),
                Transform::default(),
                Visibility::default(),
            ));
            if let Some(material) = material {
                primitive.insert(MeshMaterial3d(material.clone()));
            }
            let primitive = primitive.id();
            commands.entity(instance).add_child(primitive);
        }
    }

    root
}

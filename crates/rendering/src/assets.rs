//! The tile model library.
//!
//! All tile pieces live in one gltf file as named scene nodes. At
//! startup the file is requested; once the asset arrives, every named
//! node is indexed by name so the spawners can resolve a `PieceId` to
//! meshes in O(1). A piece id that resolves to nothing is a corrupt
//! asset library and aborts the app — there is no fallback mesh.

use std::collections::HashMap;

use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;

use crate::tile_assembly::PieceId;

/// Asset path of the tile model library.
pub const TILE_LIBRARY_PATH: &str = "tiles.gltf";

/// Renderable data for one library piece: the node's own transform
/// plus its mesh primitives.
pub struct PieceMeshes {
    pub transform: Transform,
    pub primitives: Vec<(Handle<Mesh>, Option<Handle<StandardMaterial>>)>,
}

#[derive(Resource, Default)]
pub struct TileAssets {
    library: Handle<Gltf>,
    pieces: HashMap<String, PieceMeshes>,
    ready: bool,
}

impl TileAssets {
    /// True once the library is loaded and indexed.
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Resolve a piece id against the library. Fatal if the library
    /// has no node of that name: the asset contract is broken and a
    /// substitute mesh would silently render the wrong tile.
    pub fn piece(&self, id: PieceId) -> &PieceMeshes {
        let name = id.node_name();
        match self.pieces.get(name) {
            Some(meshes) => meshes,
            None => {
                error!("tile model library has no node named '{name}'");
                panic!("missing tile piece '{name}' in {TILE_LIBRARY_PATH}");
            }
        }
    }
}

/// Startup: request the library gltf.
pub fn load_tile_library(mut assets: ResMut<TileAssets>, server: Res<AssetServer>) {
    assets.library = server.load(TILE_LIBRARY_PATH);
    info!("loading tile model library from {TILE_LIBRARY_PATH}");
}

/// Once the gltf arrives, index every named node's primitives.
pub fn index_tile_library(
    mut assets: ResMut<TileAssets>,
    gltfs: Res<Assets<Gltf>>,
    nodes: Res<Assets<GltfNode>>,
    meshes: Res<Assets<GltfMesh>>,
) {
    if assets.ready {
        return;
    }
    let Some(gltf) = gltfs.get(&assets.library) else {
        return;
    };

    let mut pieces = HashMap::new();
    for (name, node_handle) in &gltf.named_nodes {
        let Some(node) = nodes.get(node_handle) else {
            continue;
        };
        let Some(mesh_handle) = node.mesh.as_ref() else {
            continue;
        };
        let Some(mesh) = meshes.get(mesh_handle) else {
            continue;
        };
        let primitives = mesh
            .primitives
            .iter()
            .map(|primitive| (primitive.mesh.clone(), primitive.material.clone()))
            .collect();
        pieces.insert(
            name.to_string(),
            PieceMeshes {
                transform: node.transform,
                primitives,
            },
        );
    }

    info!("tile model library ready: {} pieces indexed", pieces.len());
    assets.pieces = pieces;
    assets.ready = true;
}

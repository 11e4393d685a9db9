//! Feature layout → placement directives.
//!
//! Every rotation below is a literal formula or table keyed on edge
//! indices (0 north, 1 east, 2 south, 3 west): each library piece's
//! default pose already encodes one canonical configuration, so the
//! formulas must not be "simplified" by symmetry arguments. Table keys
//! are always the ascending edge pair; the incidence groups are built
//! by scanning edges in order, so group members are already ascending.

use engine::tile::{FeatureId, FeatureKind, Tile};

use super::types::{
    AssemblyError, PieceId, PieceInstance, PieceSlot, TileAssembly, ASSEMBLY_SCALE,
};

/// Compile a tile into its ordered piece list: ground base first, then
/// road edge paths, then town walls and floors, then the single middle
/// piece (road middle, mill, or tree), if any.
pub fn compile(tile: &Tile) -> Result<TileAssembly, AssemblyError> {
    let edges = [
        tile.edge_kind(0),
        tile.edge_kind(1),
        tile.edge_kind(2),
        tile.edge_kind(3),
    ];

    // Edge-incidence map: edges grouped by the feature occupying them,
    // in first-seen order. All river edges share the `None` group.
    let mut groups: Vec<(Option<FeatureId>, Vec<usize>)> = Vec::new();
    for edge in 0..4 {
        let key = tile.edge_feature(edge);
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(edge),
            None => groups.push((key, vec![edge])),
        }
    }

    let mut pieces = Vec::new();

    // Ground base, selected by the river edges.
    let rivers = match groups.iter().find(|(key, _)| key.is_none()) {
        Some((_, members)) => {
            match members.as_slice() {
                &[edge] => pieces.push(PieceInstance {
                    piece: PieceId::Base3,
                    rotation_degrees: 90.0 * (2 - edge as i32) as f32,
                    slot: PieceSlot::Base,
                }),
                &[a, b] if (a, b) == (0, 2) || (a, b) == (1, 3) => pieces.push(PieceInstance {
                    piece: PieceId::Base1,
                    rotation_degrees: if a == 0 { 0.0 } else { 90.0 },
                    slot: PieceSlot::Base,
                }),
                &[a, b] => pieces.push(PieceInstance {
                    piece: PieceId::Base2,
                    rotation_degrees: adjacent_base_rotation((a, b)),
                    slot: PieceSlot::Base,
                }),
                other => return Err(AssemblyError::TooManyRivers { count: other.len() }),
            }
            members.len()
        }
        None => 0,
    };
    if rivers == 0 {
        pieces.push(PieceInstance {
            piece: PieceId::Base0,
            rotation_degrees: 0.0,
            slot: PieceSlot::Base,
        });
    }

    let road_edge_count = edges
        .iter()
        .filter(|kind| **kind == Some(FeatureKind::Road))
        .count();

    // Road pieces: a path per incident edge, plus at most one middle
    // piece for the whole tile. When several road groups qualify, the
    // last one processed wins; the game's tile set never produces two.
    let mut middle: Option<PieceId> = None;
    let mut middle_rotation = 0.0_f32;
    let mut road_into_town: Option<usize> = None;

    for (key, members) in &groups {
        let Some(id) = key else { continue };
        if tile.feature(*id) != FeatureKind::Road {
            continue;
        }

        for &edge in members {
            pieces.push(PieceInstance {
                piece: PieceId::Path,
                rotation_degrees: 90.0 * (1 - edge as i32) as f32,
                slot: PieceSlot::EdgePath,
            });
        }

        // Parity edge for the straight middle's 0°/270° choice: the
        // group's last member (its only member in the into-town case).
        let parity_edge = members[members.len() - 1];

        let mut add_straight = *members == [0, 2] || *members == [1, 3];
        if !add_straight
            && members.len() == 1
            && road_edge_count == 1
            && edges[(members[0] + 2) % 4] == Some(FeatureKind::Town)
        {
            let town_edge_count = edges
                .iter()
                .filter(|kind| **kind == Some(FeatureKind::Town))
                .count();
            if town_edge_count == 1 {
                // Road runs into the town across the tile.
                road_into_town = Some((members[0] + 2) % 4);
                add_straight = true;
            } else if town_edge_count == 3 {
                // The town occupies the middle; only the gate edge
                // carries road art.
                road_into_town = Some(members[0]);
            }
        }

        if add_straight {
            middle = Some(if rivers == 0 {
                PieceId::Straight
            } else {
                PieceId::Bridge
            });
            middle_rotation = if parity_edge == 1 || parity_edge == 3 {
                0.0
            } else {
                270.0
            };
        } else if members.len() == 2 {
            middle = Some(PieceId::BendAway);
            middle_rotation = bend_rotation((members[0], members[1]));
        }
    }

    // Town walls and floors.
    let mut crossroaded = false;
    for (key, members) in &groups {
        let Some(id) = key else { continue };
        if tile.feature(*id) != FeatureKind::Town {
            continue;
        }

        match members.as_slice() {
            &[edge] => {
                let (wall, floor) = if road_into_town == Some(edge) {
                    (PieceId::Wall3, PieceId::Floor3a)
                } else {
                    (PieceId::Wall1, PieceId::Floor1a)
                };
                let rotation = 90.0 * (3 - edge as i32) as f32;
                pieces.push(PieceInstance {
                    piece: wall,
                    rotation_degrees: rotation,
                    slot: PieceSlot::Wall,
                });
                pieces.push(PieceInstance {
                    piece: floor,
                    rotation_degrees: rotation,
                    slot: PieceSlot::Floor,
                });
            }
            &[a, b] if (a, b) == (0, 2) || (a, b) == (1, 3) => {
                let rotation = if a == 1 { 90.0 } else { 0.0 };
                pieces.push(PieceInstance {
                    piece: PieceId::Wall1,
                    rotation_degrees: rotation,
                    slot: PieceSlot::Wall,
                });
                pieces.push(PieceInstance {
                    piece: PieceId::Wall1,
                    rotation_degrees: rotation + 180.0,
                    slot: PieceSlot::Wall,
                });
                pieces.push(PieceInstance {
                    piece: PieceId::Floor1c,
                    rotation_degrees: rotation,
                    slot: PieceSlot::Floor,
                });
            }
            &[a, b] => {
                let rotation = corner_town_rotation((a, b));
                pieces.push(PieceInstance {
                    piece: PieceId::Wall2,
                    rotation_degrees: rotation,
                    slot: PieceSlot::Wall,
                });
                pieces.push(PieceInstance {
                    piece: PieceId::Floor2,
                    rotation_degrees: rotation,
                    slot: PieceSlot::Floor,
                });
            }
            &[a, b, c] => {
                // Crossroaded town: keyed on the one edge it leaves
                // open. Edge indices sum to 6.
                crossroaded = true;
                let missing = 6 - a - b - c;
                let (wall, floor) = if road_into_town == Some(missing) {
                    (PieceId::Wall3, PieceId::Floor3b)
                } else {
                    (PieceId::Wall1, PieceId::Floor1b)
                };
                let rotation = 90.0 * (3 - missing as i32) as f32;
                pieces.push(PieceInstance {
                    piece: wall,
                    rotation_degrees: rotation,
                    slot: PieceSlot::Wall,
                });
                pieces.push(PieceInstance {
                    piece: floor,
                    rotation_degrees: rotation,
                    slot: PieceSlot::Floor,
                });
            }
            _ => {
                pieces.push(PieceInstance {
                    piece: PieceId::Floor4,
                    rotation_degrees: 0.0,
                    slot: PieceSlot::Floor,
                });
            }
        }
    }

    // Center slot: a mill claims the middle outright; otherwise a road
    // tile without a middle piece gets a decorative tree, unless the
    // town is crossroaded.
    let first_road_edge = edges
        .iter()
        .position(|kind| *kind == Some(FeatureKind::Road));
    if tile.center_feature().is_some() {
        middle = Some(if rivers > 0 {
            PieceId::WaterMill
        } else {
            PieceId::Mill
        });
        if let Some(edge) = first_road_edge {
            middle_rotation = 90.0 * (1 - edge as i32) as f32;
        }
    } else if middle.is_none() && first_road_edge.is_some() && !crossroaded {
        middle = Some(PieceId::Tree);
    }

    if let Some(piece) = middle {
        pieces.push(PieceInstance {
            piece,
            rotation_degrees: middle_rotation,
            slot: PieceSlot::Middle,
        });
    }

    Ok(TileAssembly {
        pieces,
        scale: ASSEMBLY_SCALE,
    })
}

/// Base rotation for an adjacent river pair, keyed ascending.
fn adjacent_base_rotation(pair: (usize, usize)) -> f32 {
    match pair {
        (0, 1) => 180.0,
        (1, 2) => 90.0,
        (2, 3) => 0.0,
        (0, 3) => 270.0,
        _ => unreachable!("adjacent edge pairs are ascending"),
    }
}

/// Middle rotation for a road bending between two adjacent edges,
/// keyed ascending.
fn bend_rotation(pair: (usize, usize)) -> f32 {
    match pair {
        (0, 1) => 0.0,
        (1, 2) => 270.0,
        (2, 3) => 180.0,
        (0, 3) => 90.0,
        _ => unreachable!("adjacent edge pairs are ascending"),
    }
}

/// Wall and floor rotation for a town hugging two adjacent edges,
/// keyed ascending.
fn corner_town_rotation(pair: (usize, usize)) -> f32 {
    match pair {
        (0, 1) => 270.0,
        (1, 2) => 180.0,
        (2, 3) => 90.0,
        (0, 3) => 0.0,
        _ => unreachable!("adjacent edge pairs are ascending"),
    }
}

//! Tests for the tile-model compiler: rotation formulas, lookup
//! tables, middle-piece selection, and the road-into-town bookkeeping.

use engine::tile::Tile;
use engine::tileset;

use super::compiler::compile;
use super::types::{AssemblyError, PieceId, PieceInstance, PieceSlot, ASSEMBLY_SCALE};

use engine::tile::FeatureKind::{Field, Mill, Road, Town};

fn compiled(tile: &Tile) -> Vec<PieceInstance> {
    compile(tile).expect("valid tile must compile").pieces
}

fn with_slot(pieces: &[PieceInstance], slot: PieceSlot) -> Vec<PieceInstance> {
    pieces.iter().copied().filter(|p| p.slot == slot).collect()
}

fn has_piece(pieces: &[PieceInstance], piece: PieceId, rotation: f32) -> bool {
    pieces
        .iter()
        .any(|p| p.piece == piece && p.rotation_degrees == rotation)
}

/// Tile with a single river mouth at `edge` and fields elsewhere.
fn single_river(edge: usize) -> Tile {
    let mut edges = [Some(0); 4];
    edges[edge] = None;
    Tile::from_edges(vec![Field], edges, None)
}

// ---------------------------------------------------------------------------
// Ground bases
// ---------------------------------------------------------------------------

#[test]
fn single_river_selects_base3_with_literal_rotations() {
    let expected = [180.0, 90.0, 0.0, -90.0];
    for edge in 0..4 {
        let pieces = compiled(&single_river(edge));
        assert_eq!(
            pieces[0],
            PieceInstance {
                piece: PieceId::Base3,
                rotation_degrees: expected[edge],
                slot: PieceSlot::Base,
            },
            "river mouth on edge {edge}"
        );
    }
}

#[test]
fn no_rivers_selects_flat_base() {
    let pieces = compiled(&tileset::road_straight());
    assert_eq!(pieces[0].piece, PieceId::Base0);
    assert_eq!(pieces[0].rotation_degrees, 0.0);
}

#[test]
fn opposite_rivers_select_base1_by_axis() {
    let north_south = Tile::from_edges(vec![Field, Field], [None, Some(0), None, Some(1)], None);
    let pieces = compiled(&north_south);
    assert_eq!(pieces[0].piece, PieceId::Base1);
    assert_eq!(pieces[0].rotation_degrees, 0.0);

    let east_west = Tile::from_edges(vec![Field, Field], [Some(0), None, Some(1), None], None);
    let pieces = compiled(&east_west);
    assert_eq!(pieces[0].piece, PieceId::Base1);
    assert_eq!(pieces[0].rotation_degrees, 90.0);
}

#[test]
fn adjacent_rivers_select_base2_from_the_sorted_pair_table() {
    let cases = [
        ([0, 1], 180.0),
        ([1, 2], 90.0),
        ([2, 3], 0.0),
        ([0, 3], 270.0),
    ];
    for (pair, rotation) in cases {
        let mut edges = [Some(0); 4];
        edges[pair[0]] = None;
        edges[pair[1]] = None;
        let pieces = compiled(&Tile::from_edges(vec![Field], edges, None));
        assert_eq!(pieces[0].piece, PieceId::Base2, "river pair {pair:?}");
        assert_eq!(pieces[0].rotation_degrees, rotation, "river pair {pair:?}");
    }
}

#[test]
fn three_river_edges_are_a_contract_violation() {
    let tile = Tile::from_edges(vec![Field], [None, None, None, Some(0)], None);
    assert_eq!(
        compile(&tile),
        Err(AssemblyError::TooManyRivers { count: 3 })
    );
}

// ---------------------------------------------------------------------------
// Roads
// ---------------------------------------------------------------------------

#[test]
fn straight_road_emits_paths_and_a_straight_middle() {
    // North-south: paths at 90*(1-0) and 90*(1-2), middle parity 270.
    let pieces = compiled(&tileset::road_straight());
    let paths = with_slot(&pieces, PieceSlot::EdgePath);
    assert_eq!(paths.len(), 2);
    assert!(has_piece(&paths, PieceId::Path, 90.0));
    assert!(has_piece(&paths, PieceId::Path, -90.0));

    let middles = with_slot(&pieces, PieceSlot::Middle);
    assert_eq!(middles.len(), 1);
    assert_eq!(middles[0].piece, PieceId::Straight);
    assert_eq!(middles[0].rotation_degrees, 270.0);
}

#[test]
fn east_west_road_middle_sits_at_zero() {
    let tile = Tile::from_edges(
        vec![Road, Field, Field],
        [Some(1), Some(0), Some(2), Some(0)],
        None,
    );
    let middles = with_slot(&compiled(&tile), PieceSlot::Middle);
    assert_eq!(middles[0].piece, PieceId::Straight);
    assert_eq!(middles[0].rotation_degrees, 0.0);
}

#[test]
fn road_over_a_river_becomes_a_bridge() {
    let pieces = compiled(&tileset::river_bridge());
    assert_eq!(pieces[0].piece, PieceId::Base1);
    let middles = with_slot(&pieces, PieceSlot::Middle);
    assert_eq!(middles.len(), 1);
    assert_eq!(middles[0].piece, PieceId::Bridge);
    assert_eq!(middles[0].rotation_degrees, 0.0);
}

#[test]
fn bent_road_middle_follows_the_sorted_pair_table() {
    let cases = [
        ([0, 1], 0.0),
        ([1, 2], 270.0),
        ([2, 3], 180.0),
        ([0, 3], 90.0),
    ];
    for (pair, rotation) in cases {
        let mut edges = [Some(1); 4];
        edges[pair[0]] = Some(0);
        edges[pair[1]] = Some(0);
        let tile = Tile::from_edges(vec![Road, Field], edges, None);
        let middles = with_slot(&compiled(&tile), PieceSlot::Middle);
        assert_eq!(middles.len(), 1, "road pair {pair:?}");
        assert_eq!(middles[0].piece, PieceId::BendAway, "road pair {pair:?}");
        assert_eq!(middles[0].rotation_degrees, rotation, "road pair {pair:?}");
    }
}

// ---------------------------------------------------------------------------
// Towns
// ---------------------------------------------------------------------------

#[test]
fn lone_town_segment_uses_the_plain_wall() {
    let pieces = compiled(&tileset::town_cap());
    assert!(has_piece(&pieces, PieceId::Wall1, 270.0));
    assert!(has_piece(&pieces, PieceId::Floor1a, 270.0));
    assert!(!has_piece(&pieces, PieceId::Wall3, 270.0));
}

#[test]
fn road_into_town_gates_the_wall() {
    // Town north, road arriving from the south: the wall art gains a
    // gate and the road middle runs up to it.
    let pieces = compiled(&tileset::road_into_town());
    assert!(has_piece(&pieces, PieceId::Wall3, 270.0));
    assert!(has_piece(&pieces, PieceId::Floor3a, 270.0));

    let middles = with_slot(&pieces, PieceSlot::Middle);
    assert_eq!(middles.len(), 1);
    assert_eq!(middles[0].piece, PieceId::Straight);
    assert_eq!(middles[0].rotation_degrees, 270.0);
}

#[test]
fn passing_road_does_not_gate_the_wall() {
    // Town north, road east-west: the road never reaches the town.
    let pieces = compiled(&tileset::town_cap_road_straight());
    assert!(has_piece(&pieces, PieceId::Wall1, 270.0));
    assert!(has_piece(&pieces, PieceId::Floor1a, 270.0));
    let middles = with_slot(&pieces, PieceSlot::Middle);
    assert_eq!(middles[0].piece, PieceId::Straight);
    assert_eq!(middles[0].rotation_degrees, 0.0);
}

#[test]
fn opposite_town_edges_raise_two_walls() {
    let pieces = compiled(&tileset::town_opposite());
    let walls = with_slot(&pieces, PieceSlot::Wall);
    assert_eq!(walls.len(), 2);
    assert!(has_piece(&walls, PieceId::Wall1, 0.0));
    assert!(has_piece(&walls, PieceId::Wall1, 180.0));
    assert!(has_piece(&pieces, PieceId::Floor1c, 0.0));

    let mut east_west = tileset::town_opposite();
    east_west.rotate_cw();
    let pieces = compiled(&east_west);
    assert!(has_piece(&pieces, PieceId::Wall1, 90.0));
    assert!(has_piece(&pieces, PieceId::Wall1, 270.0));
    assert!(has_piece(&pieces, PieceId::Floor1c, 90.0));
}

#[test]
fn corner_town_follows_the_sorted_pair_table() {
    let cases = [
        ([0, 1], 270.0),
        ([1, 2], 180.0),
        ([2, 3], 90.0),
        ([0, 3], 0.0),
    ];
    for (pair, rotation) in cases {
        let mut edges = [Some(1); 4];
        edges[pair[0]] = Some(0);
        edges[pair[1]] = Some(0);
        let tile = Tile::from_edges(vec![Town, Field], edges, None);
        let pieces = compiled(&tile);
        assert!(
            has_piece(&pieces, PieceId::Wall2, rotation),
            "town pair {pair:?}"
        );
        assert!(
            has_piece(&pieces, PieceId::Floor2, rotation),
            "town pair {pair:?}"
        );
    }
}

#[test]
fn crossroaded_town_with_gate_road() {
    // Town on north, east, and south; road entering through the open
    // west edge. The road's own edge is the gate, keyed on the missing
    // edge, and no tree or road middle may appear.
    let pieces = compiled(&tileset::town_three_road());
    assert!(has_piece(&pieces, PieceId::Wall3, 0.0));
    assert!(has_piece(&pieces, PieceId::Floor3b, 0.0));
    assert!(has_piece(&pieces, PieceId::Path, 90.0 * (1.0 - 3.0)));
    assert!(with_slot(&pieces, PieceSlot::Middle).is_empty());
}

#[test]
fn crossroaded_town_without_road_keeps_the_plain_wall() {
    let pieces = compiled(&tileset::town_three());
    assert!(has_piece(&pieces, PieceId::Wall1, 0.0));
    assert!(has_piece(&pieces, PieceId::Floor1b, 0.0));
    assert!(with_slot(&pieces, PieceSlot::Middle).is_empty());
}

#[test]
fn full_town_is_a_single_floor() {
    let pieces = compiled(&tileset::town_full());
    assert_eq!(with_slot(&pieces, PieceSlot::Wall).len(), 0);
    let floors = with_slot(&pieces, PieceSlot::Floor);
    assert_eq!(floors.len(), 1);
    assert_eq!(floors[0].piece, PieceId::Floor4);
    assert_eq!(floors[0].rotation_degrees, 0.0);
}

#[test]
fn town_beside_a_river_walls_the_bank() {
    let pieces = compiled(&tileset::river_town());
    assert_eq!(pieces[0].piece, PieceId::Base1);
    assert!(has_piece(&pieces, PieceId::Wall1, 180.0));
    assert!(has_piece(&pieces, PieceId::Floor1a, 180.0));
    assert!(with_slot(&pieces, PieceSlot::Middle).is_empty());
}

// ---------------------------------------------------------------------------
// Center slot
// ---------------------------------------------------------------------------

#[test]
fn dead_end_road_gets_a_tree() {
    let tile = Tile::from_edges(
        vec![Road, Field],
        [Some(0), Some(1), Some(1), Some(1)],
        None,
    );
    let middles = with_slot(&compiled(&tile), PieceSlot::Middle);
    assert_eq!(middles.len(), 1);
    assert_eq!(middles[0].piece, PieceId::Tree);
    assert_eq!(middles[0].rotation_degrees, 0.0);
}

#[test]
fn roadless_tile_gets_no_tree() {
    let middles = with_slot(&compiled(&tileset::town_cap()), PieceSlot::Middle);
    assert!(middles.is_empty());
}

#[test]
fn mill_claims_the_middle() {
    let middles = with_slot(&compiled(&tileset::mill()), PieceSlot::Middle);
    assert_eq!(middles.len(), 1);
    assert_eq!(middles[0].piece, PieceId::Mill);
    assert_eq!(middles[0].rotation_degrees, 0.0);
}

#[test]
fn mill_on_a_river_becomes_a_water_mill() {
    let middles = with_slot(&compiled(&tileset::watermill()), PieceSlot::Middle);
    assert_eq!(middles.len(), 1);
    assert_eq!(middles[0].piece, PieceId::WaterMill);
}

#[test]
fn mill_over_a_road_replaces_the_road_middle_and_faces_it() {
    let pieces = compiled(&tileset::road_mill());
    let middles = with_slot(&pieces, PieceSlot::Middle);
    assert_eq!(middles.len(), 1);
    assert_eq!(middles[0].piece, PieceId::Mill);
    // Faces the first road edge: 90 * (1 - 0).
    assert_eq!(middles[0].rotation_degrees, 90.0);
    // The paths stay even though the Straight middle was displaced.
    assert_eq!(with_slot(&pieces, PieceSlot::EdgePath).len(), 2);
}

#[test]
fn mill_tile_with_a_road_east_faces_east() {
    let tile = Tile::from_edges(
        vec![Road, Field, Mill],
        [Some(1), Some(0), Some(1), Some(1)],
        Some(2),
    );
    let middles = with_slot(&compiled(&tile), PieceSlot::Middle);
    assert_eq!(middles[0].piece, PieceId::Mill);
    assert_eq!(middles[0].rotation_degrees, 0.0);
}

// ---------------------------------------------------------------------------
// Whole-assembly properties
// ---------------------------------------------------------------------------

#[test]
fn compile_is_deterministic() {
    for tile in [
        tileset::starting_tile(),
        tileset::road_bend(),
        tileset::town_three_road(),
        tileset::river_bridge(),
        tileset::watermill(),
    ] {
        assert_eq!(compile(&tile), compile(&tile));
    }
}

#[test]
fn layers_are_ordered_base_paths_walls_middle() {
    let pieces = compiled(&tileset::road_into_town());
    let layer = |slot: PieceSlot| match slot {
        PieceSlot::Base => 0,
        PieceSlot::EdgePath => 1,
        PieceSlot::Wall | PieceSlot::Floor => 2,
        PieceSlot::Middle => 3,
    };
    let layers: Vec<u8> = pieces.iter().map(|p| layer(p.slot)).collect();
    let mut sorted = layers.clone();
    sorted.sort_unstable();
    assert_eq!(layers, sorted, "pieces must be emitted in layer order");
}

#[test]
fn every_assembly_carries_the_uniform_half_scale() {
    let assembly = compile(&tileset::starting_tile()).expect("valid tile");
    assert_eq!(assembly.scale, ASSEMBLY_SCALE);
}

#[test]
fn every_deck_shape_compiles() {
    let mut rng = engine::rng::DeckRng::from_seed_u64(0);
    let game_deck = tileset::deck(&mut rng.0);
    for tile in &game_deck {
        compile(tile).expect("every shipped tile must compile");
    }
}

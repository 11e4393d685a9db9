//! The tile library and deck construction.
//!
//! Edge convention: 0 = north, 1 = east, 2 = south, 3 = west. A `None`
//! edge is a river. Field features are deliberately split where a road
//! or river crosses the tile, so field connectivity follows the
//! printed art.
//!
//! The set contains no 3- or 4-way road crossings: the model library
//! has straight and bent road middles only.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::tile::FeatureKind::{Field, Mill, Road, Town};
use crate::tile::Tile;

/// The fixed opening tile: town to the north, road running east-west.
pub fn starting_tile() -> Tile {
    Tile::from_edges(
        vec![Town, Road, Field],
        [Some(0), Some(1), Some(2), Some(1)],
        None,
    )
}

/// Road spanning north-south; the two fields are disconnected.
pub fn road_straight() -> Tile {
    Tile::from_edges(
        vec![Road, Field, Field],
        [Some(0), Some(1), Some(0), Some(2)],
        None,
    )
}

/// Road bending between south and west.
pub fn road_bend() -> Tile {
    Tile::from_edges(
        vec![Road, Field, Field],
        [Some(1), Some(1), Some(0), Some(0)],
        None,
    )
}

/// A lone town segment on the north edge.
pub fn town_cap() -> Tile {
    Tile::from_edges(
        vec![Town, Field],
        [Some(0), Some(1), Some(1), Some(1)],
        None,
    )
}

/// Town to the north with an unconnected east-west road passing by.
pub fn town_cap_road_straight() -> Tile {
    Tile::from_edges(
        vec![Town, Road, Field],
        [Some(0), Some(1), Some(2), Some(1)],
        None,
    )
}

/// Town to the north, road from the south ending at its gate.
pub fn road_into_town() -> Tile {
    Tile::from_edges(
        vec![Town, Road, Field, Field],
        [Some(0), Some(2), Some(1), Some(3)],
        None,
    )
}

/// One town spanning the north and south edges.
pub fn town_opposite() -> Tile {
    Tile::from_edges(
        vec![Town, Field, Field],
        [Some(0), Some(1), Some(0), Some(2)],
        None,
    )
}

/// One town hugging the north and east edges.
pub fn town_adjacent() -> Tile {
    Tile::from_edges(
        vec![Town, Field],
        [Some(0), Some(0), Some(1), Some(1)],
        None,
    )
}

/// Town on three edges, open to the west.
pub fn town_three() -> Tile {
    Tile::from_edges(
        vec![Town, Field],
        [Some(0), Some(0), Some(0), Some(1)],
        None,
    )
}

/// Town on three edges with a road entering through the open west gate.
pub fn town_three_road() -> Tile {
    Tile::from_edges(
        vec![Town, Road],
        [Some(0), Some(0), Some(0), Some(1)],
        None,
    )
}

/// Fully walled town covering the whole tile.
pub fn town_full() -> Tile {
    Tile::from_edges(vec![Town], [Some(0), Some(0), Some(0), Some(0)], None)
}

/// River source: water enters from the north only.
pub fn river_spring() -> Tile {
    Tile::from_edges(vec![Field], [None, Some(0), Some(0), Some(0)], None)
}

/// River flowing straight north-south.
pub fn river_straight() -> Tile {
    Tile::from_edges(vec![Field, Field], [None, Some(0), None, Some(1)], None)
}

/// River bending between south and west.
pub fn river_bend() -> Tile {
    Tile::from_edges(vec![Field], [Some(0), Some(0), None, None], None)
}

/// North-south river crossed by an east-west road bridge.
pub fn river_bridge() -> Tile {
    Tile::from_edges(vec![Road], [None, Some(0), None, Some(0)], None)
}

/// North-south river with a town segment on the east bank.
pub fn river_town() -> Tile {
    Tile::from_edges(
        vec![Town, Field],
        [None, Some(0), None, Some(1)],
        None,
    )
}

/// Water mill astride a straight river.
pub fn watermill() -> Tile {
    Tile::from_edges(
        vec![Field, Field, Mill],
        [None, Some(0), None, Some(1)],
        Some(2),
    )
}

/// Windmill in open fields.
pub fn mill() -> Tile {
    Tile::from_edges(
        vec![Field, Mill],
        [Some(0), Some(0), Some(0), Some(0)],
        Some(1),
    )
}

/// Mill standing over a straight north-south road.
pub fn road_mill() -> Tile {
    Tile::from_edges(
        vec![Road, Field, Field, Mill],
        [Some(0), Some(1), Some(0), Some(2)],
        Some(3),
    )
}

/// Build the draw pile, shuffled with the given rng. The starting tile
/// is not part of the pile; it goes straight onto the board.
pub fn deck(rng: &mut ChaCha8Rng) -> Vec<Tile> {
    let counts: [(fn() -> Tile, usize); 18] = [
        (road_straight, 8),
        (road_bend, 9),
        (town_cap, 5),
        (town_cap_road_straight, 4),
        (road_into_town, 3),
        (town_opposite, 3),
        (town_adjacent, 5),
        (town_three, 3),
        (town_three_road, 2),
        (town_full, 1),
        (river_spring, 2),
        (river_straight, 4),
        (river_bend, 3),
        (river_bridge, 2),
        (river_town, 2),
        (watermill, 1),
        (mill, 1),
        (road_mill, 1),
    ];

    let mut tiles = Vec::new();
    for (build, count) in counts {
        for _ in 0..count {
            tiles.push(build());
        }
    }
    tiles.shuffle(rng);
    tiles
}

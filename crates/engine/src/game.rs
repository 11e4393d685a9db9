//! The Perpignan game state: draw pile, board grid, legal-move set, and
//! turn sequencing.
//!
//! The board is a sparse grid of placed tiles. `available` is every
//! empty position orthogonally adjacent to a placed tile, kept sorted
//! so iteration order (and therefore nearest-snap tie-breaking) is
//! deterministic. Legality is edge matching: each of the candidate's
//! edges must carry the same kind as the facing edge of any existing
//! neighbor — road to road, town to town, field to field, river to
//! river.

use std::collections::HashMap;
use std::fmt;

use bevy::prelude::*;

use crate::config::{DEFAULT_PLAYERS, SEED_POSITION};
use crate::players::Player;
use crate::rng::DeckRng;
use crate::tile::Tile;
use crate::tileset;

/// Offset toward the neighbor across each edge (north, east, south,
/// west). A neighbor's facing edge is `(edge + 2) % 4`.
const EDGE_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The draw pile is exhausted; there is no tile in hand.
    EmptyDeck,
    /// The target position is not in the available set.
    NotAvailable,
    /// An edge of the candidate clashes with a placed neighbor.
    EdgeMismatch { edge: usize },
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::EmptyDeck => write!(f, "the draw pile is empty"),
            PlaceError::NotAvailable => write!(f, "position is not adjacent to the board"),
            PlaceError::EdgeMismatch { edge } => {
                write!(f, "edge {edge} does not match its neighbor")
            }
        }
    }
}

impl std::error::Error for PlaceError {}

/// Fired after a tile is committed to the board.
#[derive(Event, Debug, Clone, Copy)]
pub struct TilePlaced {
    pub position: (i32, i32),
}

#[derive(Resource, Clone)]
pub struct Perpignan {
    /// Draw pile; the last element is the tile in hand.
    pub deck: Vec<Tile>,
    grid: HashMap<(i32, i32), Tile>,
    available: Vec<(i32, i32)>,
    /// Board position the active player is aiming at.
    pub cursor: (i32, i32),
    pub players: Vec<Player>,
    pub active_player: usize,
}

impl Perpignan {
    /// Start a game: shuffle the standard deck and pre-place the
    /// starting tile.
    pub fn new(rng: &mut DeckRng) -> Self {
        let players = DEFAULT_PLAYERS.iter().copied().map(Player::new).collect();
        Self::with_deck(tileset::deck(&mut rng.0), players)
    }

    /// Start a game from an explicit draw pile.
    pub fn with_deck(deck: Vec<Tile>, players: Vec<Player>) -> Self {
        assert!(!players.is_empty(), "a game needs at least one player");
        let mut game = Self {
            deck,
            grid: HashMap::new(),
            available: Vec::new(),
            cursor: SEED_POSITION,
            players,
            active_player: 0,
        };
        game.grid.insert(SEED_POSITION, tileset::starting_tile());
        game.recompute_available();
        game
    }

    /// The tile in hand (last of the draw pile).
    pub fn hand(&self) -> Option<&Tile> {
        self.deck.last()
    }

    pub fn grid(&self) -> &HashMap<(i32, i32), Tile> {
        &self.grid
    }

    pub fn tile_at(&self, position: (i32, i32)) -> Option<&Tile> {
        self.grid.get(&position)
    }

    /// Legal placement positions, in ascending order.
    pub fn available(&self) -> &[(i32, i32)] {
        &self.available
    }

    /// Would the hand tile, as currently rotated, fit at the cursor?
    pub fn can_place(&self) -> bool {
        match self.hand() {
            Some(hand) => self.check_candidate(hand, self.cursor).is_ok(),
            None => false,
        }
    }

    /// Commit the hand tile at the cursor in its current rotation.
    pub fn place(&mut self) -> Result<(i32, i32), PlaceError> {
        self.try_place(0, self.cursor)
    }

    /// Rotate the hand tile `rotations` quarter turns clockwise and
    /// commit it at `position`. On failure nothing changes: not the
    /// deck, the grid, the available set, nor the cursor.
    pub fn try_place(
        &mut self,
        rotations: u8,
        position: (i32, i32),
    ) -> Result<(i32, i32), PlaceError> {
        let Some(hand) = self.deck.last() else {
            return Err(PlaceError::EmptyDeck);
        };

        let mut candidate = hand.clone();
        for _ in 0..rotations % 4 {
            candidate.rotate_cw();
        }
        self.check_candidate(&candidate, position)?;

        self.deck.pop();
        self.cursor = position;
        self.grid.insert(position, candidate);
        self.recompute_available();
        Ok(position)
    }

    /// Advance the turn to the next player.
    pub fn next_player(&mut self) {
        self.active_player = (self.active_player + 1) % self.players.len();
    }

    pub fn active_player_name(&self) -> &str {
        &self.players[self.active_player].name
    }

    fn check_candidate(&self, candidate: &Tile, position: (i32, i32)) -> Result<(), PlaceError> {
        if !self.available.contains(&position) {
            return Err(PlaceError::NotAvailable);
        }
        for (edge, (dx, dy)) in EDGE_OFFSETS.iter().enumerate() {
            let neighbor_pos = (position.0 + dx, position.1 + dy);
            let Some(neighbor) = self.grid.get(&neighbor_pos) else {
                continue;
            };
            if candidate.edge_kind(edge) != neighbor.edge_kind((edge + 2) % 4) {
                return Err(PlaceError::EdgeMismatch { edge });
            }
        }
        Ok(())
    }

    fn recompute_available(&mut self) {
        let mut positions: Vec<(i32, i32)> = Vec::new();
        for &(x, y) in self.grid.keys() {
            for (dx, dy) in EDGE_OFFSETS {
                let pos = (x + dx, y + dy);
                if !self.grid.contains_key(&pos) && !positions.contains(&pos) {
                    positions.push(pos);
                }
            }
        }
        positions.sort_unstable();
        self.available = positions;
    }
}

/// Startup: deal a fresh game from the deck RNG.
pub fn init_game(mut commands: Commands, mut rng: ResMut<DeckRng>) {
    let game = Perpignan::new(&mut rng);
    info!(
        "new game: {} tiles in the pile, starting tile at {:?}",
        game.deck.len(),
        SEED_POSITION
    );
    commands.insert_resource(game);
}

/// Hand the turn to the next player after each placement.
pub fn advance_turn(mut game: ResMut<Perpignan>, mut placed: EventReader<TilePlaced>) {
    for event in placed.read() {
        game.next_player();
        info!(
            "tile placed at {:?}; {} to play, {} tiles left",
            event.position,
            game.active_player_name(),
            game.deck.len()
        );
    }
}

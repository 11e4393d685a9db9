//! Game constants.

/// Board position of the pre-placed starting tile.
pub const SEED_POSITION: (i32, i32) = (42, 42);

/// Default hot-seat player roster.
pub const DEFAULT_PLAYERS: [&str; 2] = ["Red", "Blue"];

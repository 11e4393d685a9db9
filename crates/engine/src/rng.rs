//! Deterministic deck RNG resource.
//!
//! Wraps `ChaCha8Rng` so identical seeds deal identical games. Systems
//! that shuffle take `ResMut<DeckRng>` instead of `rand::thread_rng()`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

#[derive(Resource)]
pub struct DeckRng(pub ChaCha8Rng);

impl Default for DeckRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl DeckRng {
    /// Create a `DeckRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

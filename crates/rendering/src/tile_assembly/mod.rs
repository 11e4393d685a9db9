//! The tile-model compiler.
//!
//! Takes a tile's abstract feature layout and produces the ordered list
//! of model-library pieces — ground base, edge paths, walls, floors,
//! and a single middle piece — that renders it, each at a multiple of
//! 90°. Roughly 15 base meshes cover every tile in the game because
//! each piece's default pose already encodes one canonical
//! configuration; the compiler's case analysis supplies the rotation
//! that maps it onto the tile at hand.
//!
//! The compiler is pure and deterministic: same tile in, same directive
//! list out, order included. The rendering side consumes the list
//! without re-deriving any of the case analysis.

mod compiler;
#[cfg(test)]
mod tests;
mod types;

pub use compiler::compile;
pub use types::{AssemblyError, PieceId, PieceInstance, PieceSlot, TileAssembly, ASSEMBLY_SCALE};

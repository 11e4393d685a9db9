//! Types for the tile-model compiler.

use std::fmt;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Uniform scale applied to a whole assembly, once, at its root. The
/// model library is authored at twice board scale.
pub const ASSEMBLY_SCALE: f32 = 0.5;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Every mesh in the tile model library, by scene-node name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceId {
    /// Ground bases, by river-edge count and arrangement.
    Base0,
    Base1,
    Base2,
    Base3,
    /// Road stub reaching from one edge to the tile middle.
    Path,
    /// Road middles.
    Straight,
    Bridge,
    BendAway,
    /// Town walls. The digit picks the art variant: `Wall3` has the
    /// road gap.
    Wall1,
    Wall2,
    Wall3,
    /// Town floors; letter suffixes select the footprint variant.
    Floor1a,
    Floor1b,
    Floor1c,
    Floor2,
    Floor3a,
    Floor3b,
    Floor4,
    /// Center decorations.
    Mill,
    WaterMill,
    Tree,
}

impl PieceId {
    /// Scene-node name the rendering backend resolves in the model
    /// library. Opaque to the compiler.
    pub fn node_name(self) -> &'static str {
        match self {
            PieceId::Base0 => "Base0",
            PieceId::Base1 => "Base1",
            PieceId::Base2 => "Base2",
            PieceId::Base3 => "Base3",
            PieceId::Path => "Path",
            PieceId::Straight => "Straight",
            PieceId::Bridge => "Bridge",
            PieceId::BendAway => "BendAway",
            PieceId::Wall1 => "Wall1",
            PieceId::Wall2 => "Wall2",
            PieceId::Wall3 => "Wall3",
            PieceId::Floor1a => "Floor1a",
            PieceId::Floor1b => "Floor1b",
            PieceId::Floor1c => "Floor1c",
            PieceId::Floor2 => "Floor2",
            PieceId::Floor3a => "Floor3a",
            PieceId::Floor3b => "Floor3b",
            PieceId::Floor4 => "Floor4",
            PieceId::Mill => "Mill",
            PieceId::WaterMill => "WaterMill",
            PieceId::Tree => "Tree",
        }
    }
}

/// Which layer of the tile a piece belongs to. Ordering in the output
/// list follows the layers (base, then paths, then walls and floors,
/// then the middle) so the visual stack is correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceSlot {
    Base,
    EdgePath,
    Middle,
    Wall,
    Floor,
}

/// One placement directive: put `piece`, spun by `rotation_degrees`
/// around the vertical axis, into the tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceInstance {
    pub piece: PieceId,
    pub rotation_degrees: f32,
    pub slot: PieceSlot,
}

/// A compiled tile: the ordered directive list plus the uniform scale
/// the backend applies to the assembly root.
#[derive(Debug, Clone, PartialEq)]
pub struct TileAssembly {
    pub pieces: Vec<PieceInstance>,
    pub scale: f32,
}

/// Contract violations in the tile data handed to the compiler. These
/// mean the tile library or the game engine is corrupt; the caller
/// should abort loudly, not guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyError {
    /// A valid tile has at most two river edges.
    TooManyRivers { count: usize },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyError::TooManyRivers { count } => {
                write!(f, "tile has {count} river edges, at most 2 are valid")
            }
        }
    }
}

impl std::error::Error for AssemblyError {}

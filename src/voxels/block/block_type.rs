//! # Block Type Module
//!
//! This module defines the occupancy states a cell of the voxel world can be in.
//! Blocks are never stored per cell by the mesher; they are recomputed from a
//! density strategy whenever they are needed.

/// Enumerates the possible states of a block in the voxel world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// An empty cell. Air never emits geometry and never hides a neighbouring face.
    AIR,

    /// A filled cell that emits a face towards every non-solid neighbour.
    SOLID,
}

impl BlockType {
    /// Returns `true` for [`BlockType::SOLID`].
    #[inline]
    pub fn is_solid(self) -> bool {
        self == BlockType::SOLID
    }

    /// Maps a boolean occupancy value to a block type.
    ///
    /// # Arguments
    /// * `solid` - Whether the cell is occupied
    ///
    /// # Returns
    /// `BlockType::SOLID` for `true`, `BlockType::AIR` for `false`
    #[inline]
    pub fn from_solid(solid: bool) -> Self {
        if solid {
            BlockType::SOLID
        } else {
            BlockType::AIR
        }
    }
}

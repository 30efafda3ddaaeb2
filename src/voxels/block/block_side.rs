//! # Block Side Module
//!
//! This module defines the different faces/sides of a voxel block and the
//! direction each one points in. The side order is the order faces are emitted
//! by the mesher for every visible block.

use cgmath::Vector3;

use super::face_table::{FaceDescriptor, FACE_TABLE};

/// Represents the six possible faces of a voxel block.
///
/// Each variant is assigned the index of its descriptor in [`FACE_TABLE`].
///
/// The order is: [BOTTOM, BACK, FRONT, TOP, LEFT, RIGHT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The bottom face (facing negative Y)
    BOTTOM = 0,

    /// The back face (facing negative Z)
    BACK = 1,

    /// The front face (facing positive Z)
    FRONT = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The left face (facing negative X)
    LEFT = 4,

    /// The right face (facing positive X)
    RIGHT = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in table order.
    ///
    /// The order is: [BOTTOM, BACK, FRONT, TOP, LEFT, RIGHT]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::BOTTOM,
            BlockSide::BACK,
            BlockSide::FRONT,
            BlockSide::TOP,
            BlockSide::LEFT,
            BlockSide::RIGHT,
        ]
    }

    /// The unit offset from a block to the neighbour this side faces.
    ///
    /// # Returns
    /// A vector with a single non-zero component of `1` or `-1`
    #[inline]
    pub fn neighbour_offset(self) -> Vector3<i32> {
        self.face().offset()
    }

    /// Returns the side facing the opposite direction.
    ///
    /// # Returns
    /// The `BlockSide` whose neighbour offset is the negation of this one's
    pub fn opposite(self) -> BlockSide {
        match self {
            BlockSide::BOTTOM => BlockSide::TOP,
            BlockSide::TOP => BlockSide::BOTTOM,
            BlockSide::BACK => BlockSide::FRONT,
            BlockSide::FRONT => BlockSide::BACK,
            BlockSide::LEFT => BlockSide::RIGHT,
            BlockSide::RIGHT => BlockSide::LEFT,
        }
    }

    /// Looks up the static face descriptor for this side.
    ///
    /// # Returns
    /// The entry of [`FACE_TABLE`] at this side's index
    #[inline]
    pub fn face(self) -> &'static FaceDescriptor {
        &FACE_TABLE[self as usize]
    }
}

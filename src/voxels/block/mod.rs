//! # Block Module
//!
//! This module provides the block-level data of the voxel world: the two
//! occupancy states, the six block sides and the static face geometry used
//! to emit a side as a textured quad.

pub mod block_side;
pub mod block_type;
pub mod face_table;

pub use block_side::BlockSide;
pub use block_type::BlockType;
pub use face_table::{FaceDescriptor, FACE_TABLE};

/// Number of faces on a block.
pub const FACES_PER_BLOCK: usize = 6;
/// Number of vertices emitted per visible face. Faces never share vertices.
pub const VERTICES_PER_FACE: usize = 4;
/// Number of triangle indices emitted per visible face.
pub const INDICES_PER_FACE: usize = 6;
/// Worst-case vertices emitted by one block (every face visible).
pub const VERTICES_PER_BLOCK: usize = FACES_PER_BLOCK * VERTICES_PER_FACE;

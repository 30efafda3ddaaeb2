//! # Face Table
//!
//! Static geometry for the six quads of a unit cube. Every visible face of a
//! block is emitted by translating one of these descriptors to the block's
//! world position, so the table is the only place corner order, winding and
//! atlas layout are defined.
//!
//! Corner names below read [L = Left, R = Right] [B = Bottom, T = Top]
//! [B = Back, F = Front].

use cgmath::Vector3;

use super::block_side::BlockSide;

/// Width of one atlas column.
const U_THIRD: f32 = 1.0 / 3.0;
/// Width of two atlas columns.
const U_TWO_THIRDS: f32 = 2.0 / 3.0;

/// Immutable description of one face of a unit cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceDescriptor {
    /// The side of the block this face covers.
    pub side: BlockSide,
    /// Offset from the block to the neighbour that can hide this face.
    pub neighbour_offset: [i32; 3],
    /// The four quad corners in cube-local space (0..1 on every axis).
    pub corner_positions: [[f32; 3]; 4],
    /// Two triangles as indices into `corner_positions`, wound counter-clockwise
    /// when seen from outside the cube.
    pub triangle_indices: [u32; 6],
    /// Atlas coordinates, one per corner and in the same order.
    pub uv_corners: [[f32; 2]; 4],
}

impl FaceDescriptor {
    /// The neighbour offset as a vector.
    #[inline]
    pub fn offset(&self) -> Vector3<i32> {
        Vector3::from(self.neighbour_offset)
    }

    /// The corner at `index` as a vector.
    #[inline]
    pub fn corner(&self, index: usize) -> Vector3<f32> {
        Vector3::from(self.corner_positions[index])
    }
}

/// The six face descriptors, indexed by `BlockSide as usize`.
///
/// The atlas is a cross three cells wide and four cells tall: the centre
/// column holds back, top, front and bottom from the top row down, while left
/// and right flank the top face.
pub static FACE_TABLE: [FaceDescriptor; 6] = [
    FaceDescriptor {
        side: BlockSide::BOTTOM,
        neighbour_offset: [0, -1, 0],
        corner_positions: [
            [0.0, 0.0, 0.0], // LBB
            [0.0, 0.0, 1.0], // LBF
            [1.0, 0.0, 1.0], // RBF
            [1.0, 0.0, 0.0], // RBB
        ],
        triangle_indices: [0, 3, 1, 3, 2, 1],
        uv_corners: [
            [U_THIRD, 1.0],
            [U_THIRD, 0.75],
            [U_TWO_THIRDS, 0.75],
            [U_TWO_THIRDS, 1.0],
        ],
    },
    FaceDescriptor {
        side: BlockSide::BACK,
        neighbour_offset: [0, 0, -1],
        corner_positions: [
            [0.0, 0.0, 0.0], // LBB
            [0.0, 1.0, 0.0], // LTB
            [1.0, 1.0, 0.0], // RTB
            [1.0, 0.0, 0.0], // RBB
        ],
        triangle_indices: [0, 1, 3, 3, 1, 2],
        uv_corners: [
            [U_THIRD, 0.0],
            [U_THIRD, 0.25],
            [U_TWO_THIRDS, 0.25],
            [U_TWO_THIRDS, 0.0],
        ],
    },
    FaceDescriptor {
        side: BlockSide::FRONT,
        neighbour_offset: [0, 0, 1],
        corner_positions: [
            [0.0, 0.0, 1.0], // LBF
            [0.0, 1.0, 1.0], // LTF
            [1.0, 1.0, 1.0], // RTF
            [1.0, 0.0, 1.0], // RBF
        ],
        triangle_indices: [0, 2, 1, 0, 3, 2],
        uv_corners: [
            [U_THIRD, 0.75],
            [U_THIRD, 0.5],
            [U_TWO_THIRDS, 0.5],
            [U_TWO_THIRDS, 0.75],
        ],
    },
    FaceDescriptor {
        side: BlockSide::TOP,
        neighbour_offset: [0, 1, 0],
        corner_positions: [
            [0.0, 1.0, 0.0], // LTB
            [0.0, 1.0, 1.0], // LTF
            [1.0, 1.0, 1.0], // RTF
            [1.0, 1.0, 0.0], // RTB
        ],
        triangle_indices: [0, 1, 3, 3, 1, 2],
        uv_corners: [
            [U_THIRD, 0.25],
            [U_THIRD, 0.5],
            [U_TWO_THIRDS, 0.5],
            [U_TWO_THIRDS, 0.25],
        ],
    },
    FaceDescriptor {
        side: BlockSide::LEFT,
        neighbour_offset: [-1, 0, 0],
        corner_positions: [
            [0.0, 0.0, 0.0], // LBB
            [0.0, 0.0, 1.0], // LBF
            [0.0, 1.0, 1.0], // LTF
            [0.0, 1.0, 0.0], // LTB
        ],
        triangle_indices: [0, 1, 2, 0, 2, 3],
        uv_corners: [
            [0.0, 0.25],
            [0.0, 0.5],
            [U_THIRD, 0.5],
            [U_THIRD, 0.25],
        ],
    },
    FaceDescriptor {
        side: BlockSide::RIGHT,
        neighbour_offset: [1, 0, 0],
        corner_positions: [
            [1.0, 0.0, 0.0], // RBB
            [1.0, 0.0, 1.0], // RBF
            [1.0, 1.0, 1.0], // RTF
            [1.0, 1.0, 0.0], // RTB
        ],
        triangle_indices: [0, 3, 1, 1, 3, 2],
        uv_corners: [
            [1.0, 0.25],
            [1.0, 0.5],
            [U_TWO_THIRDS, 0.5],
            [U_TWO_THIRDS, 0.25],
        ],
    },
];

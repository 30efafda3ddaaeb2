//! Output buffers of a meshing pass.
//!
//! Geometry is written face by face: four fresh vertices, their four atlas
//! coordinates and six indices pointing back at those vertices. Nothing is
//! shared between faces, so `uvs` always runs in lockstep with `vertices`.

use crate::error::VoxelError;
use crate::voxels::block::{FaceDescriptor, INDICES_PER_FACE, VERTICES_PER_FACE};

use super::vertex::MeshVertex;

/// Vertex positions, atlas coordinates and triangle indices of a chunk.
///
/// # Invariants
/// - `uvs.len() == vertices.len()`
/// - `triangles.len() % 3 == 0`
/// - every index in `triangles` is below `vertices.len()`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// World-space vertex positions.
    pub vertices: Vec<[f32; 3]>,
    /// Atlas coordinates, one per vertex.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list, three indices per triangle.
    pub triangles: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty buffers with room for exactly `face_count` faces.
    ///
    /// # Arguments
    /// * `face_count` - The number of faces the pass will write
    ///
    /// # Returns
    /// The empty buffers, or [`VoxelError::MeshTooLarge`] if the allocation
    /// cannot be made.
    pub fn with_face_capacity(face_count: usize) -> Result<Self, VoxelError> {
        let too_large = move || VoxelError::MeshTooLarge {
            vertices: face_count as u128 * VERTICES_PER_FACE as u128,
        };
        let vertex_count = face_count.checked_mul(VERTICES_PER_FACE).ok_or_else(too_large)?;
        let index_count = face_count.checked_mul(INDICES_PER_FACE).ok_or_else(too_large)?;

        let mut buffers = MeshBuffers::default();
        buffers.vertices.try_reserve_exact(vertex_count).map_err(|_| too_large())?;
        buffers.uvs.try_reserve_exact(vertex_count).map_err(|_| too_large())?;
        buffers.triangles.try_reserve_exact(index_count).map_err(|_| too_large())?;
        Ok(buffers)
    }

    /// Appends `face` translated to the block at `(x, y, z)`.
    ///
    /// The face's indices are offset by the number of vertices written so far.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - World position of the block's minimum corner
    /// * `face` - The side of the block to emit
    pub fn push_face(&mut self, x: i32, y: i32, z: i32, face: &FaceDescriptor) {
        let start = self.vertices.len() as u32;
        let (x, y, z) = (x as f32, y as f32, z as f32);

        self.vertices.extend(
            face.corner_positions
                .iter()
                .map(|corner| [corner[0] + x, corner[1] + y, corner[2] + z]),
        );
        self.uvs.extend_from_slice(&face.uv_corners);
        self.triangles
            .extend(face.triangle_indices.iter().map(|index| start + index));
    }

    /// Number of faces written.
    pub fn face_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Number of triangles written.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Whether no geometry was written.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks the buffer invariants listed on the type.
    pub fn is_consistent(&self) -> bool {
        let vertex_count = self.vertices.len();
        self.uvs.len() == vertex_count
            && self.triangles.len() % 3 == 0
            && self.triangles.iter().all(|&index| (index as usize) < vertex_count)
    }

    /// The vertex positions as raw bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The atlas coordinates as raw bytes.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// The triangle indices as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Zips positions and atlas coordinates into one vertex stream.
    pub fn interleaved(&self) -> Vec<MeshVertex> {
        self.vertices
            .iter()
            .zip(&self.uvs)
            .map(|(&position, &uv)| MeshVertex::new(position, uv))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::BlockSide;

    #[test]
    fn faces_are_written_contiguously() {
        let mut buffers = MeshBuffers::with_face_capacity(2).unwrap();
        buffers.push_face(2, 3, 4, BlockSide::TOP.face());
        buffers.push_face(2, 3, 4, BlockSide::LEFT.face());

        assert_eq!(buffers.face_count(), 2);
        assert_eq!(buffers.triangle_count(), 4);
        assert_eq!(buffers.vertices[0], [2.0, 4.0, 4.0]);
        assert_eq!(buffers.uvs[4], BlockSide::LEFT.face().uv_corners[0]);
        assert_eq!(&buffers.triangles[6..], &[4, 5, 6, 4, 6, 7]);
        assert!(buffers.is_consistent());
    }

    #[test]
    fn face_capacity_is_exact() {
        let mut buffers = MeshBuffers::with_face_capacity(3).unwrap();
        assert!(buffers.is_empty());
        assert!(buffers.vertices.capacity() >= 12);
        assert!(buffers.triangles.capacity() >= 18);

        for side in [BlockSide::FRONT, BlockSide::BACK, BlockSide::TOP] {
            buffers.push_face(0, 0, 0, side.face());
        }
        assert_eq!(buffers.vertices.len(), 12);
        assert_eq!(buffers.triangles.len(), 18);
    }

    #[test]
    fn unallocatable_capacity_is_an_error() {
        assert!(matches!(
            MeshBuffers::with_face_capacity(usize::MAX),
            Err(VoxelError::MeshTooLarge { .. })
        ));
        assert!(matches!(
            MeshBuffers::with_face_capacity(usize::MAX / 8),
            Err(VoxelError::MeshTooLarge { .. })
        ));
    }

    #[test]
    fn byte_views_cover_every_element() {
        let mut buffers = MeshBuffers::default();
        buffers.push_face(0, 0, 0, BlockSide::BOTTOM.face());

        assert_eq!(buffers.vertex_bytes().len(), 4 * 12);
        assert_eq!(buffers.uv_bytes().len(), 4 * 8);
        assert_eq!(buffers.index_bytes().len(), 6 * 4);
    }

    #[test]
    fn interleaving_pairs_positions_with_uvs() {
        let mut buffers = MeshBuffers::default();
        buffers.push_face(1, 1, 1, BlockSide::RIGHT.face());

        let interleaved = buffers.interleaved();
        assert_eq!(interleaved.len(), 4);
        for (vertex, (position, uv)) in interleaved.iter().zip(buffers.vertices.iter().zip(&buffers.uvs)) {
            assert_eq!(vertex.position, *position);
            assert_eq!(vertex.tex_coords, *uv);
        }
    }

    #[test]
    fn inconsistent_buffers_are_detected() {
        let mut buffers = MeshBuffers::default();
        buffers.push_face(0, 0, 0, BlockSide::BACK.face());
        buffers.triangles.push(99);
        assert!(!buffers.is_consistent());
    }
}

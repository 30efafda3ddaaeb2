//! Interleaved vertex layout for uploading a chunk mesh.

/// A vertex as laid out for a GPU vertex buffer.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 20 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// World-space position
    pub position: [f32; 3],
    /// Atlas coordinates (normalized 0.0-1.0)
    pub tex_coords: [f32; 2],
}

impl MeshVertex {
    /// Creates a new vertex.
    ///
    /// # Arguments
    /// * `position` - World-space position
    /// * `tex_coords` - Atlas coordinates
    pub fn new(position: [f32; 3], tex_coords: [f32; 2]) -> Self {
        MeshVertex {
            position,
            tex_coords,
        }
    }

    /// Byte distance between consecutive vertices.
    pub const STRIDE: usize = std::mem::size_of::<MeshVertex>();

    /// Byte offset of `tex_coords` within a vertex.
    pub const TEX_COORDS_OFFSET: usize = std::mem::size_of::<[f32; 3]>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(MeshVertex::STRIDE, 20);

        let vertex = MeshVertex::new([1.0, 2.0, 3.0], [0.25, 0.5]);
        let bytes = bytemuck::bytes_of(&vertex);
        let uv: [f32; 2] = bytemuck::pod_read_unaligned(&bytes[MeshVertex::TEX_COORDS_OFFSET..]);
        assert_eq!(uv, [0.25, 0.5]);
    }
}

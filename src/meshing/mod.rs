//! Mesh generation for voxel chunks.
//!
//! This module turns the occupancy of a chunk into a drawable triangle mesh by
//! face culling: every solid block emits one quad per side whose neighbour is
//! not solid. Adjacent quads are never merged.
//!
//! # Architecture
//! - [`generate_mesh`]: the single entry point used by chunks
//! - [`ChunkMesher`]: walks a chunk and writes visible faces
//! - [`MeshBuffers`]: the vertex, atlas coordinate and index buffers handed
//!   to the renderer
//! - [`MeshVertex`]: the interleaved upload layout
//!
//! # Usage
//! ```no_run
//! use cgmath::Point3;
//! use voxel_chunk_mesher::config::{GenerationConfig, GenerationType};
//! use voxel_chunk_mesher::meshing::generate_mesh;
//! use voxel_chunk_mesher::voxels::chunk::ChunkBounds;
//!
//! let bounds = ChunkBounds::new(Point3::new(0, 0, 0), 16, 64, 16);
//! let config = GenerationConfig::with_type(GenerationType::PROCEDURAL);
//! let mesh = generate_mesh(&bounds, &config).unwrap();
//! println!("{} faces", mesh.face_count());
//! ```
//!
//! # Performance Considerations
//! - Occupancy is sampled once per cell into a bit vector before meshing
//! - Visible faces are counted first so the buffers are allocated exactly once
//! - Allocation failures surface as [`VoxelError::MeshTooLarge`] instead of aborting

use cgmath::Point3;
use log::debug;
use web_time::Instant;

use crate::config::GenerationConfig;
use crate::error::VoxelError;
use crate::voxels::block::{FACES_PER_BLOCK, FACE_TABLE};
use crate::voxels::chunk::{is_face_neighbour_solid, ChunkBounds, ChunkOccupancy};
use crate::voxels::density::{DensityField, DensityStrategy};

mod mesh_buffers;
mod vertex;

pub use mesh_buffers::MeshBuffers;
pub use vertex::MeshVertex;

/// Meshes the chunk described by `bounds` using the strategy in `config`.
///
/// # Arguments
/// * `bounds` - The cells to mesh
/// * `config` - Selects and parameterises the density strategy
///
/// # Returns
/// The chunk's mesh. Nothing is returned on failure; a pass never yields
/// partial buffers.
///
/// # Errors
/// - [`VoxelError::BoundsViolation`] or [`VoxelError::MeshTooLarge`] for bounds
///   that cannot be meshed
/// - [`VoxelError::InvalidConfig`] for non-finite noise settings
pub fn generate_mesh(
    bounds: &ChunkBounds,
    config: &GenerationConfig,
) -> Result<MeshBuffers, VoxelError> {
    bounds.validate()?;
    config.validate()?;

    let density = DensityField::from_config(config, bounds);
    ChunkMesher::new(*bounds, &density).mesh()
}

/// Walks every cell of a chunk and emits the faces that are not hidden.
pub struct ChunkMesher<'a> {
    bounds: ChunkBounds,
    density: &'a dyn DensityStrategy,
}

impl<'a> ChunkMesher<'a> {
    /// Creates a mesher for `bounds`, classifying cells with `density`.
    ///
    /// # Arguments
    /// * `bounds` - The cells to mesh, validated when the pass runs
    /// * `density` - The strategy that decides which cells are solid
    pub fn new(bounds: ChunkBounds, density: &'a dyn DensityStrategy) -> Self {
        ChunkMesher { bounds, density }
    }

    /// Runs the pass.
    ///
    /// # Returns
    /// Buffers holding exactly the visible faces.
    ///
    /// # Errors
    /// - The error of [`ChunkBounds::validate`] for bounds that cannot be meshed
    /// - [`VoxelError::MeshTooLarge`] if the buffers cannot be allocated
    pub fn mesh(&self) -> Result<MeshBuffers, VoxelError> {
        let start_time = Instant::now();

        let occupancy = ChunkOccupancy::sample(self.bounds, self.density)?;

        let face_count = exposed_blocks(&occupancy)
            .map(|(_, exposed)| exposed.iter().filter(|&&e| e).count())
            .sum();
        let mut buffers = MeshBuffers::with_face_capacity(face_count)?;

        for (position, exposed) in exposed_blocks(&occupancy) {
            for (exposed, face) in exposed.iter().zip(FACE_TABLE.iter()) {
                if *exposed {
                    buffers.push_face(position.x, position.y, position.z, face);
                }
            }
        }

        debug!(
            "Meshed chunk at {:?} ({}x{}x{}, {} solid): {} vertices in {:.3}ms",
            self.bounds.origin,
            self.bounds.width,
            self.bounds.height,
            self.bounds.depth,
            occupancy.solid_count(),
            buffers.vertices.len(),
            start_time.elapsed().as_secs_f64() * 1000.0
        );

        Ok(buffers)
    }
}

/// Every solid block with at least one face next to air, paired with a flag
/// per side in face-table order. Fully enclosed blocks are skipped.
fn exposed_blocks(
    occupancy: &ChunkOccupancy,
) -> impl Iterator<Item = (Point3<i32>, [bool; FACES_PER_BLOCK])> + '_ {
    let bounds = *occupancy.bounds();
    bounds.positions().filter_map(move |position| {
        let (x, y, z) = (position.x, position.y, position.z);
        if !occupancy.is_solid(x, y, z) {
            return None;
        }

        let mut exposed = [false; FACES_PER_BLOCK];
        for (exposed, face) in exposed.iter_mut().zip(FACE_TABLE.iter()) {
            *exposed = !is_face_neighbour_solid(x, y, z, face, &bounds, occupancy);
        }

        exposed.iter().any(|&e| e).then_some((position, exposed))
    })
}

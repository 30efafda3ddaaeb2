//! # Chunk Module
//!
//! This module provides the `Chunk` struct, which owns the bounds and the
//! generation settings of one rectangular piece of the world together with
//! the mesh last generated for it.
//!
//! ## Lifecycle
//!
//! A chunk starts out dirty. Any change to its bounds or generation settings
//! marks it dirty again, and the surrounding loop calls [`Chunk::update`] once
//! per tick to regenerate dirty chunks. A failed pass keeps the previous mesh
//! and leaves the chunk dirty.
//!
//! ## Submodules
//!
//! * `bounds` - origin and extents, and the cell iteration order
//! * `neighbour` - the per-face culling test
//! * `occupancy` - a bit-per-cell cache of a density strategy

use cgmath::Point3;
use log::debug;

use crate::config::{GenerationConfig, GenerationType};
use crate::error::VoxelError;
use crate::meshing::{generate_mesh, MeshBuffers};

mod bounds;
mod neighbour;
mod occupancy;

pub use bounds::ChunkBounds;
pub use neighbour::is_face_neighbour_solid;
pub use occupancy::ChunkOccupancy;

/// The largest width and depth the world grid lays chunks out with.
///
/// The mesher itself accepts any non-negative extents.
pub const MAX_CHUNK_HORIZONTAL_SIZE: i32 = 16;

/// A rectangular piece of the world, meshed independently of its neighbours.
#[derive(Debug)]
pub struct Chunk {
    bounds: ChunkBounds,
    config: GenerationConfig,
    dirty: bool,
    mesh: Option<MeshBuffers>,
}

impl Chunk {
    /// Creates a dirty chunk with no mesh.
    ///
    /// # Arguments
    /// * `bounds` - Origin and extents of the chunk, validated by each pass
    /// * `config` - The chunk's generation settings
    pub fn new(bounds: ChunkBounds, config: GenerationConfig) -> Self {
        Chunk {
            bounds,
            config,
            dirty: true,
            mesh: None,
        }
    }

    /// The chunk's bounds.
    pub fn bounds(&self) -> &ChunkBounds {
        &self.bounds
    }

    /// The chunk's world-space origin.
    pub fn origin(&self) -> Point3<i32> {
        self.bounds.origin
    }

    /// The chunk's generation settings.
    pub fn generation_config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Whether the chunk needs to be regenerated.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forces the chunk to be regenerated on the next update.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The mesh produced by the last successful pass, if any.
    pub fn mesh(&self) -> Option<&MeshBuffers> {
        self.mesh.as_ref()
    }

    /// Hands the current mesh over to the caller, leaving the chunk without one.
    pub fn take_mesh(&mut self) -> Option<MeshBuffers> {
        self.mesh.take()
    }

    /// Replaces the generation settings, marking the chunk dirty if they changed.
    pub fn set_generation_config(&mut self, config: GenerationConfig) {
        if self.config != config {
            self.config = config;
            self.dirty = true;
        }
    }

    /// Switches the density strategy, marking the chunk dirty if it changed.
    pub fn set_generation_type(&mut self, generation_type: GenerationType) {
        if self.config.generation_type != generation_type {
            self.config.generation_type = generation_type;
            self.dirty = true;
        }
    }

    /// Changes the seed, marking the chunk dirty if it changed.
    pub fn set_seed(&mut self, seed: i32) {
        if self.config.seed != seed {
            self.config.seed = seed;
            self.dirty = true;
        }
    }

    /// Changes the extents, marking the chunk dirty if they changed.
    ///
    /// Extents are validated by the next pass, not here.
    pub fn resize(&mut self, width: i32, height: i32, depth: i32) {
        let bounds = ChunkBounds::new(self.bounds.origin, width, height, depth);
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    /// Per-tick hook: regenerates the mesh if the chunk is dirty.
    ///
    /// # Returns
    /// `Ok(true)` if a new mesh was generated, `Ok(false)` if the chunk was clean.
    ///
    /// # Errors
    /// Propagates the error of a failed pass; the chunk stays dirty.
    pub fn update(&mut self) -> Result<bool, VoxelError> {
        if !self.dirty {
            return Ok(false);
        }

        self.regenerate()?;
        Ok(true)
    }

    /// Runs a meshing pass regardless of the dirty flag.
    ///
    /// # Errors
    /// Propagates the error of a failed pass. The previous mesh is kept and
    /// the chunk stays dirty.
    pub fn regenerate(&mut self) -> Result<&MeshBuffers, VoxelError> {
        debug!(
            "Generating chunk at {:?} (width: {}, height: {}, depth: {}) ...",
            self.bounds.origin, self.bounds.width, self.bounds.height, self.bounds.depth
        );

        let mesh = generate_mesh(&self.bounds, &self.config)?;
        self.dirty = false;
        let mesh: &MeshBuffers = self.mesh.insert(mesh);
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_block() -> Chunk {
        Chunk::new(
            ChunkBounds::new(Point3::new(0, 0, 0), 1, 1, 1),
            GenerationConfig::with_type(GenerationType::FULL),
        )
    }

    #[test]
    fn new_chunks_are_dirty_and_unmeshed() {
        let chunk = single_block();
        assert!(chunk.is_dirty());
        assert!(chunk.mesh().is_none());
    }

    #[test]
    fn update_only_regenerates_dirty_chunks() {
        let mut chunk = single_block();

        assert!(chunk.update().unwrap());
        assert!(!chunk.is_dirty());
        assert_eq!(chunk.mesh().unwrap().vertices.len(), 24);

        assert!(!chunk.update().unwrap());
    }

    #[test]
    fn setters_mark_dirty_only_on_change() {
        let mut chunk = single_block();
        chunk.update().unwrap();

        chunk.set_generation_type(GenerationType::FULL);
        chunk.set_seed(chunk.generation_config().seed);
        chunk.resize(1, 1, 1);
        assert!(!chunk.is_dirty());

        chunk.set_seed(99);
        assert!(chunk.is_dirty());
        chunk.update().unwrap();

        chunk.resize(1, 2, 1);
        assert!(chunk.is_dirty());
        chunk.update().unwrap();
        assert_eq!(chunk.mesh().unwrap().vertices.len(), 40);
    }

    #[test]
    fn failed_pass_keeps_the_previous_mesh() {
        let mut chunk = single_block();
        chunk.update().unwrap();

        chunk.resize(-1, 1, 1);
        assert!(matches!(
            chunk.update(),
            Err(VoxelError::BoundsViolation { width: -1, .. })
        ));
        assert!(chunk.is_dirty());
        assert_eq!(chunk.mesh().unwrap().vertices.len(), 24);
    }

    #[test]
    fn mark_dirty_forces_a_pass() {
        let mut chunk = single_block();
        chunk.update().unwrap();
        assert!(!chunk.update().unwrap());

        chunk.mark_dirty();
        assert!(chunk.update().unwrap());
        assert!(!chunk.is_dirty());
    }

    #[test]
    fn take_mesh_hands_over_ownership() {
        let mut chunk = single_block();
        chunk.update().unwrap();

        let mesh = chunk.take_mesh().unwrap();
        assert_eq!(mesh.triangles.len(), 36);
        assert!(chunk.mesh().is_none());
    }
}

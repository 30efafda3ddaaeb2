//! # World Module
//!
//! This module provides the `World` struct, which lays chunks out on a square
//! horizontal grid around a centre position and regenerates them together.
//!
//! ## Layout
//!
//! Chunk origins are spaced [`MAX_CHUNK_HORIZONTAL_SIZE`] blocks apart on X
//! and Z, `render_radius` chunks to each side of the centre, all at the
//! centre's height. Chunks never look at each other: faces on a chunk border
//! are emitted by both chunks.

use cgmath::Point3;
use log::info;
use web_time::Instant;

use crate::config::{GenerationConfig, WorldConfig};
use crate::error::VoxelError;
use crate::voxels::chunk::{Chunk, ChunkBounds, MAX_CHUNK_HORIZONTAL_SIZE};

/// A grid of independently meshed chunks.
///
/// # Examples
///
/// ```
/// use voxel_chunk_mesher::config::WorldConfig;
/// use voxel_chunk_mesher::voxels::world::World;
///
/// let config = WorldConfig {
///     render_radius: 1,
///     chunk_height: 8,
///     ..Default::default()
/// };
/// let mut world = World::new(config).unwrap();
/// world.regenerate_all().unwrap();
/// assert_eq!(world.chunks().len(), 4);
/// ```
pub struct World {
    config: WorldConfig,
    chunks: Vec<Chunk>,
}

impl World {
    /// Validates `config` and lays out its chunks. No chunk is meshed yet.
    ///
    /// # Arguments
    /// * `config` - The grid layout and the generation settings of every chunk
    ///
    /// # Returns
    /// The world with one dirty chunk per grid cell
    ///
    /// # Errors
    /// - The error of [`WorldConfig::validate`]
    /// - [`VoxelError::InvalidConfig`] if the centre or the grid leaves the
    ///   `i32` coordinate range
    pub fn new(config: WorldConfig) -> Result<Self, VoxelError> {
        config.validate()?;

        let center = grid_position(config.center).ok_or_else(|| out_of_range(&config))?;
        let extent = MAX_CHUNK_HORIZONTAL_SIZE
            .checked_mul(config.render_radius)
            .ok_or_else(|| out_of_range(&config))?;

        let mut chunks = Vec::new();
        for x in (-extent..extent).step_by(MAX_CHUNK_HORIZONTAL_SIZE as usize) {
            for z in (-extent..extent).step_by(MAX_CHUNK_HORIZONTAL_SIZE as usize) {
                let origin = center
                    .x
                    .checked_add(x)
                    .zip(center.z.checked_add(z))
                    .map(|(ox, oz)| Point3::new(ox, center.y, oz))
                    .ok_or_else(|| out_of_range(&config))?;
                let bounds = ChunkBounds::new(
                    origin,
                    config.chunk_width,
                    config.chunk_height,
                    config.chunk_depth,
                );
                chunks.push(Chunk::new(bounds, config.generation.clone()));
            }
        }

        info!(
            "Laid out {} chunks around {:?} with seed {}",
            chunks.len(),
            center,
            config.generation.seed
        );

        Ok(World { config, chunks })
    }

    /// The configuration the world was built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// All chunks, in layout order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Mutable access to the chunks, for editing individual chunk settings.
    pub fn chunks_mut(&mut self) -> &mut [Chunk] {
        &mut self.chunks
    }

    /// Looks a chunk up by its origin.
    ///
    /// # Arguments
    /// * `origin` - The world position of the chunk's minimum corner
    ///
    /// # Returns
    /// The chunk whose origin is `origin`, if any
    pub fn chunk_at(&self, origin: Point3<i32>) -> Option<&Chunk> {
        self.chunks.iter().find(|chunk| chunk.origin() == origin)
    }

    /// Replaces the generation settings of every chunk and marks them dirty.
    pub fn set_generation_config(&mut self, generation: GenerationConfig) {
        for chunk in &mut self.chunks {
            chunk.set_generation_config(generation.clone());
        }
        self.config.generation = generation;
    }

    /// Regenerates every dirty chunk.
    ///
    /// # Returns
    /// The number of chunks that were regenerated.
    ///
    /// # Errors
    /// Stops at the first failed pass and returns its error.
    pub fn update(&mut self) -> Result<usize, VoxelError> {
        let mut regenerated = 0;
        for chunk in &mut self.chunks {
            if chunk.update()? {
                regenerated += 1;
            }
        }
        Ok(regenerated)
    }

    /// Pushes the world's noise settings to every chunk and regenerates all of them.
    ///
    /// # Errors
    /// Stops at the first failed pass and returns its error. Chunks that were
    /// not rebuilt stay dirty.
    pub fn regenerate_all(&mut self) -> Result<(), VoxelError> {
        let start_time = Instant::now();
        let generation = &self.config.generation;

        for chunk in &mut self.chunks {
            let mut config = chunk.generation_config().clone();
            config.noise_zoom = generation.noise_zoom;
            config.base_surface_level = generation.base_surface_level;
            config.noise_amplitude = generation.noise_amplitude;
            chunk.set_generation_config(config);
            chunk.mark_dirty();
        }
        let regenerated = self.update()?;

        let duration = start_time.elapsed();
        info!(
            "Chunks built: <{}> in duration: <{:.3}ms> or <{:.3}s>",
            regenerated,
            duration.as_secs_f64() * 1000.0,
            duration.as_secs_f64()
        );

        Ok(())
    }

    /// Total number of vertices over all meshed chunks.
    pub fn total_vertex_count(&self) -> usize {
        self.chunks
            .iter()
            .filter_map(Chunk::mesh)
            .map(|mesh| mesh.vertices.len())
            .sum()
    }

    /// Total number of triangles over all meshed chunks.
    pub fn total_triangle_count(&self) -> usize {
        self.chunks
            .iter()
            .filter_map(Chunk::mesh)
            .map(|mesh| mesh.triangle_count())
            .sum()
    }
}

fn out_of_range(config: &WorldConfig) -> VoxelError {
    VoxelError::InvalidConfig(format!(
        "render radius {} around {:?} leaves the coordinate range",
        config.render_radius, config.center
    ))
}

/// Rounds a world position to the nearest block.
///
/// Halves round to the even neighbour, so `2.5` lands on `2` and `3.5` on `4`.
///
/// # Arguments
/// * `position` - A world position
///
/// # Returns
/// The block position, or `None` if an axis is not finite or rounds to a value
/// outside of the `i32` range
pub fn grid_position(position: [f32; 3]) -> Option<Point3<i32>> {
    let axis = |value: f32| {
        let rounded = value.round_ties_even();
        // i32::MAX is not representable as f32; the cast would saturate at it.
        (rounded >= i32::MIN as f32 && rounded < i32::MAX as f32).then_some(rounded as i32)
    };
    Some(Point3::new(axis(position[0])?, axis(position[1])?, axis(position[2])?))
}

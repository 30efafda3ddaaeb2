#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Chunk Mesher
//!
//! Converts rectangular chunks of voxels into triangle meshes by face culling.
//!
//! Each chunk decides which of its cells are solid through a configurable
//! density strategy (full, repeating patterns, a seeded coin flip or Perlin
//! terrain). The mesher then emits one textured quad for every side of a solid
//! cell that faces air or the outside of the chunk.
//!
//! ## Key Modules
//!
//! * `config` - generation and world settings, loadable from JSON
//! * `error` - the crate's error type
//! * `meshing` - the face-culling pass and its output buffers
//! * `voxels` - blocks, faces, density strategies, chunks and the world grid
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use voxel_chunk_mesher::{generate_mesh, ChunkBounds, GenerationConfig, GenerationType};
//!
//! let bounds = ChunkBounds::new(Point3::new(0, 0, 0), 1, 1, 1);
//! let mesh = generate_mesh(&bounds, &GenerationConfig::with_type(GenerationType::FULL)).unwrap();
//! assert_eq!(mesh.vertices.len(), 24);
//! assert_eq!(mesh.triangles.len(), 36);
//! ```
//!
//! ## Performance Considerations
//!
//! * Occupancy is cached in a bit vector so each cell is classified once
//! * Visible faces are counted first so buffers are allocated once at their final size
//! * Fully enclosed blocks are skipped before any face is considered

use std::env;

use log::info;

pub mod config;
pub mod error;
pub mod meshing;
pub mod voxels;

pub use config::{GenerationConfig, GenerationType, WorldConfig};
pub use error::VoxelError;
pub use meshing::{generate_mesh, ChunkMesher, MeshBuffers, MeshVertex};
pub use voxels::chunk::{Chunk, ChunkBounds};
pub use voxels::world::World;

/// Initializes logging, builds the world described by the optional config
/// path in the first argument and meshes every chunk once.
///
/// # Errors
/// Returns any error from loading the configuration or meshing a chunk.
pub fn run() -> Result<(), VoxelError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("Loading world configuration from {path}");
            WorldConfig::load(path)?
        }
        None => WorldConfig::default(),
    };

    let mut world = World::new(config)?;
    world.regenerate_all()?;

    info!(
        "World ready: {} chunks, {} vertices, {} triangles ({} strategy)",
        world.chunks().len(),
        world.total_vertex_count(),
        world.total_triangle_count(),
        world.config().generation.generation_type
    );

    Ok(())
}

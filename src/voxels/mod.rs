//! # Voxels
//!
//! This module contains the voxel data model the mesher works on: what a cell
//! can be, how the six faces of a cell look, which cells a density strategy
//! makes solid, and how chunks are laid out into a world.
//!
//! ## Architecture
//!
//! * **Block**: block types, block sides and the static face table
//! * **Chunk**: bounds, occupancy and the lifecycle of one independently meshed chunk
//! * **Density**: the interchangeable strategies that classify cells as air or solid
//! * **World**: a grid of chunks regenerated together
//!
//! ## Data Flow
//!
//! 1. A chunk is marked dirty when its bounds or generation settings change
//! 2. The next update builds the density strategy from its settings
//! 3. The mesher samples occupancy and emits every face next to air
//! 4. The finished buffers replace the chunk's previous mesh

pub mod block;
pub mod chunk;
pub mod density;
pub mod world;

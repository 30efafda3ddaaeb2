//! # Error Types
//!
//! All errors that can abort a meshing pass or the loading of a configuration.
//! A pass either completes fully or fails before any buffers are handed off,
//! so none of these carry partial results.

use thiserror::Error;

/// Errors produced while configuring or meshing chunks.
#[derive(Error, Debug)]
pub enum VoxelError {
    /// The generation strategy selector did not name a known strategy.
    #[error("unknown generation type: {0}")]
    UnknownGenerationType(String),

    /// A chunk extent was negative or the chunk reaches past the `i32` coordinate range.
    #[error("invalid chunk bounds: width {width}, height {height}, depth {depth}")]
    BoundsViolation {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
        /// Requested depth.
        depth: i32,
    },

    /// The vertex count of a chunk cannot be addressed by `u32` indices or
    /// its buffers cannot be allocated.
    #[error("chunk too large to mesh: {vertices} vertices")]
    MeshTooLarge {
        /// The number of vertices the chunk could emit.
        vertices: u128,
    },

    /// A configuration value was outside of its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file was not valid JSON for the expected schema.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

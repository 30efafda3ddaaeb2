//! # Voxel Chunk Mesher Entry Point
//!
//! Meshes a world of chunks once and logs a summary.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- [world.json]
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    match voxel_chunk_mesher::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("voxel-chunk-mesher: {err}");
            ExitCode::FAILURE
        }
    }
}

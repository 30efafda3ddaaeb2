//! # Neighbour Solidity
//!
//! Decides whether a face of a block is hidden by the block on the other side
//! of it. Only neighbours inside the chunk can hide a face: faces on the chunk
//! boundary are always emitted, whatever an adjacent chunk may contain.

use crate::voxels::block::FaceDescriptor;
use crate::voxels::density::DensityStrategy;

use super::ChunkBounds;

/// Returns `true` if the neighbour across `face` of the block at `(x, y, z)`
/// lies inside `bounds` and is solid according to `density`.
///
/// Neighbours outside of the bounds, including ones past the edge of the
/// `i32` coordinate range, are never solid.
///
/// # Arguments
/// * `x`, `y`, `z` - World position of the block whose face is tested
/// * `face` - The face to look across
/// * `bounds` - The chunk being meshed
/// * `density` - Classifies the neighbouring cell
pub fn is_face_neighbour_solid(
    x: i32,
    y: i32,
    z: i32,
    face: &FaceDescriptor,
    bounds: &ChunkBounds,
    density: &(impl DensityStrategy + ?Sized),
) -> bool {
    let [dx, dy, dz] = face.neighbour_offset;
    let neighbour = match (x.checked_add(dx), y.checked_add(dy), z.checked_add(dz)) {
        (Some(nx), Some(ny), Some(nz)) => (nx, ny, nz),
        _ => return false,
    };

    if !bounds.contains(neighbour.0, neighbour.1, neighbour.2) {
        return false;
    }

    density.is_solid(neighbour.0, neighbour.1, neighbour.2)
}

//! # Chunk Bounds
//!
//! The axis-aligned box of cells a meshing pass covers. Extents are kept as
//! signed integers so that invalid input can be reported instead of wrapping.

use cgmath::Point3;

use crate::error::VoxelError;
use crate::voxels::block::VERTICES_PER_BLOCK;

/// World-space origin and extents of a chunk.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChunkBounds {
    /// The integer world position of the chunk's minimum corner.
    pub origin: Point3<i32>,
    /// Extent along X.
    pub width: i32,
    /// Extent along Y.
    pub height: i32,
    /// Extent along Z.
    pub depth: i32,
}

impl ChunkBounds {
    /// Creates bounds without validating them; see [`ChunkBounds::validate`].
    ///
    /// # Arguments
    /// * `origin` - The world position of the chunk's minimum corner
    /// * `width` - Extent along X
    /// * `height` - Extent along Y
    /// * `depth` - Extent along Z
    pub fn new(origin: Point3<i32>, width: i32, height: i32, depth: i32) -> Self {
        ChunkBounds {
            origin,
            width,
            height,
            depth,
        }
    }

    /// Checks that the extents can be meshed.
    ///
    /// # Errors
    /// - [`VoxelError::BoundsViolation`] if any extent is negative or the far
    ///   corner lies beyond the `i32` coordinate range
    /// - [`VoxelError::MeshTooLarge`] if the worst-case vertex count does not fit a `u32` index
    pub fn validate(&self) -> Result<(), VoxelError> {
        let overflows = self.origin.x.checked_add(self.width).is_none()
            || self.origin.y.checked_add(self.height).is_none()
            || self.origin.z.checked_add(self.depth).is_none();
        if self.width < 0 || self.height < 0 || self.depth < 0 || overflows {
            return Err(VoxelError::BoundsViolation {
                width: self.width,
                height: self.height,
                depth: self.depth,
            });
        }

        let worst_case_vertices = self.width as u128
            * self.height as u128
            * self.depth as u128
            * VERTICES_PER_BLOCK as u128;
        if worst_case_vertices > u32::MAX as u128 {
            return Err(VoxelError::MeshTooLarge {
                vertices: worst_case_vertices,
            });
        }

        Ok(())
    }

    /// Number of cells in the chunk. Negative extents count as empty.
    ///
    /// # Returns
    /// The cell count, saturating at `usize::MAX`.
    pub fn max_block_count(&self) -> usize {
        let extent = |e: i32| e.max(0) as usize;
        extent(self.width)
            .saturating_mul(extent(self.height))
            .saturating_mul(extent(self.depth))
    }

    /// Whether the world position lies inside the chunk.
    ///
    /// The lower bound is inclusive and the upper bound exclusive on every axis.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - The world position to test
    ///
    /// # Returns
    /// `true` if the position is one of the chunk's cells
    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        let (lx, ly, lz) = self.to_local(x, y, z);
        (0..self.width as i64).contains(&lx)
            && (0..self.height as i64).contains(&ly)
            && (0..self.depth as i64).contains(&lz)
    }

    /// Converts a world position to chunk-local coordinates.
    ///
    /// Widened to `i64` so positions far from the origin cannot overflow.
    #[inline]
    pub fn to_local(&self, x: i32, y: i32, z: i32) -> (i64, i64, i64) {
        (
            x as i64 - self.origin.x as i64,
            y as i64 - self.origin.y as i64,
            z as i64 - self.origin.z as i64,
        )
    }

    /// Iterates every world position in the chunk, X outermost and Y innermost.
    ///
    /// Cells past the edge of the `i32` coordinate range are skipped, so the
    /// iterator never overflows even for bounds that fail validation.
    pub fn positions(&self) -> impl Iterator<Item = Point3<i32>> {
        let origin = self.origin;
        let width = addressable_extent(origin.x, self.width);
        let height = addressable_extent(origin.y, self.height);
        let depth = addressable_extent(origin.z, self.depth);
        (0..width).flat_map(move |i| {
            (0..depth).flat_map(move |j| {
                (0..height).map(move |k| Point3::new(origin.x + i, origin.y + k, origin.z + j))
            })
        })
    }
}

/// The part of `extent` starting at `start` that stays within `i32`.
fn addressable_extent(start: i32, extent: i32) -> i32 {
    let room = i32::MAX as i64 - start as i64 + 1;
    (extent.max(0) as i64).min(room) as i32
}

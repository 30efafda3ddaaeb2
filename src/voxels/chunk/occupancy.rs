//! # Chunk Occupancy
//!
//! A bit per cell recording which cells of a chunk are solid, sampled once
//! from a density strategy. Every cell is classified once when the grid is
//! built and then answered from memory, instead of once for the cell and once
//! more for each of its six neighbours.
//!
//! Bits are stored Y fastest, then Z, then X.

use bitvec::vec::BitVec;

use crate::error::VoxelError;
use crate::voxels::block::BlockType;
use crate::voxels::density::DensityStrategy;

use super::ChunkBounds;

/// Sampled solidity of every cell in a chunk.
pub struct ChunkOccupancy {
    bounds: ChunkBounds,
    /// One bit per cell, set when the cell is solid.
    solid_array: BitVec,
    solid_count: usize,
}

impl ChunkOccupancy {
    /// Samples `density` at every cell of `bounds`.
    ///
    /// # Arguments
    /// * `bounds` - The cells to sample
    /// * `density` - The strategy that classifies each cell
    ///
    /// # Returns
    /// The sampled grid, or the error of [`ChunkBounds::validate`] for bounds
    /// that cannot be meshed.
    pub fn sample(
        bounds: ChunkBounds,
        density: &dyn DensityStrategy,
    ) -> Result<Self, VoxelError> {
        bounds.validate()?;

        let mut solid_array = BitVec::with_capacity(bounds.max_block_count());
        let mut solid_count = 0;

        for position in bounds.positions() {
            let is_solid = density.is_solid(position.x, position.y, position.z);
            solid_array.push(is_solid);
            if is_solid {
                solid_count += 1;
            }
        }

        Ok(ChunkOccupancy {
            bounds,
            solid_array,
            solid_count,
        })
    }

    /// The bounds this grid was sampled for.
    pub fn bounds(&self) -> &ChunkBounds {
        &self.bounds
    }

    /// Number of solid cells in the chunk.
    pub fn solid_count(&self) -> usize {
        self.solid_count
    }

    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.bounds.contains(x, y, z) {
            return None;
        }
        let (i, k, j) = self.bounds.to_local(x, y, z);
        let (height, depth) = (self.bounds.height as usize, self.bounds.depth as usize);
        Some((i as usize * depth + j as usize) * height + k as usize)
    }
}

impl DensityStrategy for ChunkOccupancy {
    /// Cells outside of the sampled bounds are reported as air.
    #[inline]
    fn classify(&self, x: i32, y: i32, z: i32) -> BlockType {
        let solid = self
            .index(x, y, z)
            .map(|index| self.solid_array[index])
            .unwrap_or(false);
        BlockType::from_solid(solid)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point3;

    use super::*;
    use crate::voxels::density::{ModuloStrategy, PseudoRandomStrategy};

    #[test]
    fn matches_direct_sampling_inside_the_bounds() {
        let bounds = ChunkBounds::new(Point3::new(-3, 7, 2), 5, 4, 6);
        let density = PseudoRandomStrategy::new(42);
        let occupancy = ChunkOccupancy::sample(bounds, &density).unwrap();

        let mut solid = 0;
        for position in bounds.positions() {
            let expected = density.classify(position.x, position.y, position.z);
            assert_eq!(occupancy.classify(position.x, position.y, position.z), expected);
            if expected.is_solid() {
                solid += 1;
            }
        }
        assert_eq!(occupancy.solid_count(), solid);
    }

    #[test]
    fn outside_the_bounds_is_air() {
        let bounds = ChunkBounds::new(Point3::new(0, 0, 0), 2, 2, 2);
        let occupancy = ChunkOccupancy::sample(bounds, &ModuloStrategy::new(2)).unwrap();

        // (2, 0, -1) sums to 1 and would be solid in the pattern itself.
        assert_eq!(occupancy.classify(2, 0, -1), BlockType::AIR);
        assert_eq!(occupancy.classify(-1, 2, 0), BlockType::AIR);
    }

    #[test]
    fn unmeshable_bounds_are_not_sampled() {
        let negative = ChunkBounds::new(Point3::new(0, 0, 0), 2, -2, 2);
        assert!(matches!(
            ChunkOccupancy::sample(negative, &ModuloStrategy::new(2)),
            Err(VoxelError::BoundsViolation { height: -2, .. })
        ));

        let past_the_edge = ChunkBounds::new(Point3::new(i32::MAX, 0, 0), 2, 1, 1);
        assert!(matches!(
            ChunkOccupancy::sample(past_the_edge, &ModuloStrategy::new(2)),
            Err(VoxelError::BoundsViolation { .. })
        ));
    }
}

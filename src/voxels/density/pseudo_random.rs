//! Seeded per-cell noise.
//!
//! Each cell's coordinates are folded into the seed with a multiply-xor hash,
//! the hash seeds a fresh generator and a single uniform sample is rounded to
//! decide the cell. Reseeding per cell keeps the result a pure function of
//! `(seed, x, y, z)`, independent of query order.

use crate::voxels::block::BlockType;

use super::DensityStrategy;

/// Multiplier of the cell hash.
pub const HASH_MULTIPLIER: i32 = 7_302_013;

/// Folds the coordinates into `seed`: `h = h * HASH_MULTIPLIER ^ value` for
/// `x`, `y` and `z` in turn, with 32-bit wraparound.
///
/// # Arguments
/// * `seed` - The starting hash
/// * `x`, `y`, `z` - The cell's world position
///
/// # Returns
/// The hash of the cell, identical on every platform
#[inline]
pub fn hash_cell(seed: i32, x: i32, y: i32, z: i32) -> i32 {
    [x, y, z]
        .into_iter()
        .fold(seed, |hash, value| hash.wrapping_mul(HASH_MULTIPLIER) ^ value)
}

/// A reproducible coin flip per cell.
#[derive(Copy, Clone, Debug)]
pub struct PseudoRandomStrategy {
    seed: i32,
}

impl PseudoRandomStrategy {
    /// Creates the strategy for `seed`.
    pub fn new(seed: i32) -> Self {
        PseudoRandomStrategy { seed }
    }

    /// The uniform sample in `[0, 1)` drawn for a cell.
    pub fn sample(&self, x: i32, y: i32, z: i32) -> f32 {
        let hash = hash_cell(self.seed, x, y, z);
        let mut rng = fastrand::Rng::with_seed(hash as u32 as u64);
        rng.f32()
    }
}

impl DensityStrategy for PseudoRandomStrategy {
    #[inline]
    fn classify(&self, x: i32, y: i32, z: i32) -> BlockType {
        BlockType::from_solid(self.sample(x, y, z).round() as i32 == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_reference_values() {
        assert_eq!(hash_cell(0, 0, 0, 0), 0);
        assert_eq!(hash_cell(0, 0, 0, 1), 1);
        assert_eq!(hash_cell(1, 0, 0, 0), 1_834_620_517);
        assert_eq!(hash_cell(20, 3, -4, 5), 1_262_347_774);
    }

    #[test]
    fn classification_is_reproducible() {
        let first = PseudoRandomStrategy::new(1234);
        let second = PseudoRandomStrategy::new(1234);
        for x in -8..8 {
            for y in -8..8 {
                let expected = first.classify(x, y, 3);
                for _ in 0..3 {
                    assert_eq!(first.classify(x, y, 3), expected);
                }
                assert_eq!(second.classify(x, y, 3), expected);
            }
        }
    }

    #[test]
    fn samples_are_unit_interval() {
        let strategy = PseudoRandomStrategy::new(-77);
        for x in 0..32 {
            let sample = strategy.sample(x, x * 3, -x);
            assert!((0.0..1.0).contains(&sample));
        }
    }

    #[test]
    fn roughly_half_the_cells_are_solid() {
        let strategy = PseudoRandomStrategy::new(20);
        let mut solid = 0;
        for x in 0..16 {
            for y in 0..16 {
                for z in 0..16 {
                    if strategy.is_solid(x, y, z) {
                        solid += 1;
                    }
                }
            }
        }
        assert!((1400..2700).contains(&solid), "{solid} of 4096 solid");
    }

    #[test]
    fn seed_changes_the_pattern() {
        let a = PseudoRandomStrategy::new(1);
        let b = PseudoRandomStrategy::new(2);
        let differs = (0..64).any(|x| a.classify(x, 0, 0) != b.classify(x, 0, 0));
        assert!(differs);
    }
}

//! Debug patterns that do not depend on the seed.

use crate::voxels::block::BlockType;

use super::DensityStrategy;

/// Fills every cell.
#[derive(Copy, Clone, Debug, Default)]
pub struct FullStrategy;

impl DensityStrategy for FullStrategy {
    #[inline]
    fn classify(&self, _x: i32, _y: i32, _z: i32) -> BlockType {
        BlockType::SOLID
    }
}

/// Fills cells whose coordinate sum leaves a remainder of one.
///
/// The remainder is signed (it takes the sign of the sum), so cells with a
/// negative coordinate sum are never solid. Sums wrap on overflow.
#[derive(Copy, Clone, Debug)]
pub struct ModuloStrategy {
    n: i32,
}

impl ModuloStrategy {
    /// Creates the pattern for modulus `n`. Moduli below 2 would never
    /// produce a remainder of one and are raised to 2.
    ///
    /// # Arguments
    /// * `n` - The modulus of the coordinate sum
    pub fn new(n: i32) -> Self {
        ModuloStrategy { n: n.max(2) }
    }

    /// The pattern modulus.
    pub fn modulus(&self) -> i32 {
        self.n
    }
}

impl DensityStrategy for ModuloStrategy {
    #[inline]
    fn classify(&self, x: i32, y: i32, z: i32) -> BlockType {
        let sum = x.wrapping_add(y).wrapping_add(z);
        BlockType::from_solid(sum % self.n == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_is_solid_everywhere() {
        for (x, y, z) in [(0, 0, 0), (-100, 5, 7), (i32::MAX, i32::MIN, 0)] {
            assert_eq!(FullStrategy.classify(x, y, z), BlockType::SOLID);
        }
    }

    #[test]
    fn seconds_alternate_along_each_axis() {
        let seconds = ModuloStrategy::new(2);
        assert_eq!(seconds.classify(0, 0, 0), BlockType::AIR);
        assert_eq!(seconds.classify(1, 0, 0), BlockType::SOLID);
        assert_eq!(seconds.classify(1, 1, 0), BlockType::AIR);
        assert_eq!(seconds.classify(1, 1, 1), BlockType::SOLID);
    }

    #[test]
    fn only_remainder_one_is_solid() {
        for n in 2..=4 {
            let pattern = ModuloStrategy::new(n);
            let solid = (0..n * 10).filter(|&x| pattern.is_solid(x, 0, 0)).count();
            assert_eq!(solid, 10, "modulus {n}");
        }
    }

    #[test]
    fn negative_sums_keep_their_sign() {
        let thirds = ModuloStrategy::new(3);
        // -2 % 3 == -2, so this cell stays air even though it is congruent to 1.
        assert_eq!(thirds.classify(-2, 0, 0), BlockType::AIR);
        assert_eq!(thirds.classify(-3, 2, 2), BlockType::SOLID);
    }

    #[test]
    fn degenerate_modulus_is_raised() {
        assert_eq!(ModuloStrategy::new(0).modulus(), 2);
    }
}

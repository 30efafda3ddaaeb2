//! # Density Field
//!
//! A density field decides, for any world position, whether the cell there is
//! air or solid. Each generation type is its own [`DensityStrategy`] so it can
//! be constructed and tested in isolation; [`DensityField`] picks the one a
//! [`GenerationConfig`] asks for.
//!
//! ## Strategies
//!
//! * [`FullStrategy`] - every cell solid
//! * [`ModuloStrategy`] - solid where `(x + y + z) mod n == 1`
//! * [`PseudoRandomStrategy`] - a reproducible coin flip per cell
//! * [`ProceduralStrategy`] - a Perlin height map
//!
//! All strategies are pure functions of their construction parameters and the
//! queried position, so one instance can be shared between threads freely.

use crate::config::{GenerationConfig, GenerationType};
use crate::voxels::block::BlockType;
use crate::voxels::chunk::ChunkBounds;

mod pattern;
mod procedural;
mod pseudo_random;

pub use pattern::{FullStrategy, ModuloStrategy};
pub use procedural::{ProceduralStrategy, SEED_OFFSET_RANGE};
pub use pseudo_random::{hash_cell, PseudoRandomStrategy, HASH_MULTIPLIER};

/// Maps world positions to block occupancy.
pub trait DensityStrategy: Send + Sync {
    /// Classifies the cell at the given world position.
    fn classify(&self, x: i32, y: i32, z: i32) -> BlockType;

    /// Whether the cell at the given world position is solid.
    #[inline]
    fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.classify(x, y, z).is_solid()
    }
}

/// The density strategy selected by a [`GenerationConfig`].
pub struct DensityField {
    generation_type: GenerationType,
    strategy: Box<dyn DensityStrategy>,
}

impl DensityField {
    /// Builds the strategy for `config`.
    ///
    /// # Arguments
    /// * `config` - Selects the strategy and supplies its seed and noise settings
    /// * `bounds` - The chunk whose footprint the procedural strategy scales
    ///   its noise coordinates by
    ///
    /// # Returns
    /// A field answering queries with the selected strategy
    pub fn from_config(config: &GenerationConfig, bounds: &ChunkBounds) -> Self {
        let strategy: Box<dyn DensityStrategy> = match config.generation_type.modulus() {
            Some(n) => Box::new(ModuloStrategy::new(n)),
            None => match config.generation_type {
                GenerationType::RANDOM => Box::new(PseudoRandomStrategy::new(config.seed)),
                GenerationType::PROCEDURAL => Box::new(ProceduralStrategy::new(
                    config,
                    bounds.width,
                    bounds.depth,
                )),
                // Only FULL has neither a modulus nor parameters.
                _ => Box::new(FullStrategy),
            },
        };

        DensityField {
            generation_type: config.generation_type,
            strategy,
        }
    }

    /// The generation type this field was built for.
    pub fn generation_type(&self) -> GenerationType {
        self.generation_type
    }
}

impl DensityStrategy for DensityField {
    #[inline]
    fn classify(&self, x: i32, y: i32, z: i32) -> BlockType {
        self.strategy.classify(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point3;

    use super::*;

    fn field(generation_type: GenerationType) -> DensityField {
        let bounds = ChunkBounds::new(Point3::new(0, 0, 0), 16, 16, 16);
        DensityField::from_config(&GenerationConfig::with_type(generation_type), &bounds)
    }

    #[test]
    fn field_dispatches_to_the_configured_strategy() {
        for generation_type in GenerationType::all() {
            assert_eq!(field(generation_type).generation_type(), generation_type);
        }

        assert!(field(GenerationType::FULL).is_solid(-5, 300, 12));
        assert!(field(GenerationType::SECONDS).is_solid(1, 0, 0));
        assert!(!field(GenerationType::SECONDS).is_solid(1, 1, 0));
        assert!(field(GenerationType::THIRDS).is_solid(0, 0, 4));
        assert!(field(GenerationType::FOURTHS).is_solid(2, 3, 0));
        assert!(!field(GenerationType::FOURTHS).is_solid(2, 0, 0));
    }

    #[test]
    fn procedural_field_follows_the_surface() {
        let field = field(GenerationType::PROCEDURAL);
        // Defaults put the surface between 100 and 120.
        assert!(field.is_solid(3, 99, 7));
        assert!(!field.is_solid(3, 120, 7));
    }

    #[test]
    fn random_field_matches_its_strategy() {
        let field = field(GenerationType::RANDOM);
        let strategy = PseudoRandomStrategy::new(GenerationConfig::default().seed);
        for x in -4..4 {
            for z in -4..4 {
                assert_eq!(field.classify(x, 1, z), strategy.classify(x, 1, z));
            }
        }
    }

    #[test]
    fn pattern_fields_use_the_type_modulus() {
        for generation_type in GenerationType::all() {
            let Some(n) = generation_type.modulus() else {
                continue;
            };
            let field = field(generation_type);
            let pattern = ModuloStrategy::new(n);
            for x in 0..6 {
                for y in 0..6 {
                    assert_eq!(field.classify(x, y, 0), pattern.classify(x, y, 0));
                }
            }
        }
    }
}

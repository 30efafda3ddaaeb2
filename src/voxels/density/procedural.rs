//! Height-map terrain from 2D Perlin noise.
//!
//! A column at `(x, z)` is solid below
//! `base_surface_level + noise(x, z) * noise_amplitude`, where the noise is
//! remapped to `[0, 1]`. Noise coordinates are measured in chunk footprints
//! so `noise_zoom` reads as "noise periods per chunk".

use noise::{NoiseFn, Perlin};

use crate::config::GenerationConfig;
use crate::voxels::block::BlockType;

use super::DensityStrategy;

/// Seeds are reduced into `[0, SEED_OFFSET_RANGE)` before being added to
/// noise coordinates. Offsets in the billions lose the fractional part of the
/// coordinate and flatten the terrain.
pub const SEED_OFFSET_RANGE: i32 = 10_000;

/// A Perlin height map.
#[derive(Clone, Debug)]
pub struct ProceduralStrategy {
    perlin: Perlin,
    seed_offset: f64,
    noise_zoom: f64,
    base_surface_level: f64,
    noise_amplitude: f64,
    chunk_width: f64,
    chunk_depth: f64,
}

impl ProceduralStrategy {
    /// Creates the height map described by `config` for chunks with the given
    /// footprint. Zero footprints are treated as one block.
    ///
    /// # Arguments
    /// * `config` - Seed, zoom, base level and amplitude of the terrain
    /// * `chunk_width` - Chunk extent along X, the noise period along X at zoom 1
    /// * `chunk_depth` - Chunk extent along Z, the noise period along Z at zoom 1
    pub fn new(config: &GenerationConfig, chunk_width: i32, chunk_depth: i32) -> Self {
        ProceduralStrategy {
            perlin: Perlin::new(config.seed as u32),
            seed_offset: config.seed.rem_euclid(SEED_OFFSET_RANGE) as f64,
            noise_zoom: config.noise_zoom as f64,
            base_surface_level: config.base_surface_level as f64,
            noise_amplitude: config.noise_amplitude as f64,
            chunk_width: chunk_width.max(1) as f64,
            chunk_depth: chunk_depth.max(1) as f64,
        }
    }

    /// The noise value of the column at `(x, z)`, in `[0, 1]`.
    pub fn noise(&self, x: i32, z: i32) -> f64 {
        let sample = self.perlin.get([
            (x as f64 * self.noise_zoom) / self.chunk_width + self.seed_offset,
            (z as f64 * self.noise_zoom) / self.chunk_depth + self.seed_offset,
        ]);
        ((sample + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// The height below which the column at `(x, z)` is solid.
    pub fn surface_height(&self, x: i32, z: i32) -> f64 {
        self.base_surface_level + self.noise(x, z) * self.noise_amplitude
    }
}

impl DensityStrategy for ProceduralStrategy {
    #[inline]
    fn classify(&self, x: i32, y: i32, z: i32) -> BlockType {
        BlockType::from_solid((y as f64) < self.surface_height(x, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationType;

    fn config(seed: i32, base: f32, amplitude: f32) -> GenerationConfig {
        GenerationConfig {
            generation_type: GenerationType::PROCEDURAL,
            seed,
            noise_zoom: 1.0,
            base_surface_level: base,
            noise_amplitude: amplitude,
        }
    }

    #[test]
    fn surface_stays_within_amplitude() {
        let strategy = ProceduralStrategy::new(&config(20, 10.0, 30.0), 16, 16);
        for x in -40..40 {
            for z in -40..40 {
                let height = strategy.surface_height(x, z);
                assert!((10.0..=40.0).contains(&height), "({x}, {z}) -> {height}");
            }
        }
    }

    #[test]
    fn columns_are_solid_below_the_surface_only() {
        let strategy = ProceduralStrategy::new(&config(5, 4.0, 8.0), 16, 16);
        for x in 0..16 {
            for z in 0..16 {
                let height = strategy.surface_height(x, z);
                for y in 0..16 {
                    assert_eq!(strategy.is_solid(x, y, z), (y as f64) < height);
                }
            }
        }
    }

    #[test]
    fn zero_amplitude_is_flat() {
        let strategy = ProceduralStrategy::new(&config(99, 6.0, 0.0), 16, 16);
        for x in 0..8 {
            assert!(strategy.is_solid(x, 5, -x));
            assert!(!strategy.is_solid(x, 6, -x));
        }
    }

    #[test]
    fn terrain_is_reproducible() {
        let a = ProceduralStrategy::new(&config(1337, 0.0, 50.0), 16, 16);
        let b = ProceduralStrategy::new(&config(1337, 0.0, 50.0), 16, 16);
        for x in -20..20 {
            assert_eq!(a.surface_height(x, 3 * x), b.surface_height(x, 3 * x));
        }
    }

    #[test]
    fn extreme_seeds_still_produce_valid_noise() {
        for seed in [i32::MIN, -1, i32::MAX] {
            let strategy = ProceduralStrategy::new(&config(seed, 0.0, 1.0), 16, 16);
            for x in 0..16 {
                let noise = strategy.noise(x, x);
                assert!(noise.is_finite() && (0.0..=1.0).contains(&noise));
            }
        }
    }

    #[test]
    fn zero_footprint_does_not_divide_by_zero() {
        let strategy = ProceduralStrategy::new(&config(3, 0.0, 10.0), 0, 0);
        assert!(strategy.surface_height(7, 9).is_finite());
    }
}

//! # Configuration
//!
//! Generation settings for a single chunk and layout settings for the world
//! grid. Both are plain serde structures so they can be edited on disk as
//! JSON and handed to the mesher unchanged.
//!
//! ## Strategy selection
//!
//! The density strategy can be chosen by integer selector (as debug tooling
//! cycles through them) or by its lowercase name (as configuration files
//! spell it). Neither path ever falls back to a default: an unknown selector
//! is a [`VoxelError::UnknownGenerationType`].

use std::fmt;
use std::fs;
use std::path::Path;

use log::warn;
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::VoxelError;
use crate::voxels::chunk::MAX_CHUNK_HORIZONTAL_SIZE;

/// Enumerates the interchangeable density strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum GenerationType {
    /// Every cell is solid.
    FULL = 0,
    /// Cells where `(x + y + z) mod 2 == 1` are solid.
    SECONDS = 1,
    /// Cells where `(x + y + z) mod 3 == 1` are solid.
    THIRDS = 2,
    /// Cells where `(x + y + z) mod 4 == 1` are solid.
    FOURTHS = 3,
    /// A deterministic per-cell coin flip derived from the seed.
    RANDOM = 4,
    /// Height-map terrain from 2D Perlin noise.
    PROCEDURAL = 5,
}

static GENERATION_TYPE_NAMES: phf::Map<&'static str, GenerationType> = phf::phf_map! {
    "full" => GenerationType::FULL,
    "seconds" => GenerationType::SECONDS,
    "thirds" => GenerationType::THIRDS,
    "fourths" => GenerationType::FOURTHS,
    "random" => GenerationType::RANDOM,
    "procedural" => GenerationType::PROCEDURAL,
};

impl GenerationType {
    /// Returns every strategy in selector order.
    pub fn all() -> [GenerationType; 6] {
        [
            GenerationType::FULL,
            GenerationType::SECONDS,
            GenerationType::THIRDS,
            GenerationType::FOURTHS,
            GenerationType::RANDOM,
            GenerationType::PROCEDURAL,
        ]
    }

    /// Resolves an integer selector.
    ///
    /// # Arguments
    /// * `selector` - The strategy's position in [`GenerationType::all`]
    ///
    /// # Returns
    /// The strategy at that position
    ///
    /// # Errors
    /// Returns [`VoxelError::UnknownGenerationType`] for selectors past the last strategy.
    pub fn from_selector(selector: u8) -> Result<Self, VoxelError> {
        num::FromPrimitive::from_u8(selector)
            .ok_or_else(|| VoxelError::UnknownGenerationType(selector.to_string()))
    }

    /// Resolves a strategy by its lowercase name.
    ///
    /// # Arguments
    /// * `name` - A name as returned by [`GenerationType::name`]
    ///
    /// # Returns
    /// The strategy with that name
    ///
    /// # Errors
    /// Returns [`VoxelError::UnknownGenerationType`] for names that are not in the table.
    pub fn from_name(name: &str) -> Result<Self, VoxelError> {
        GENERATION_TYPE_NAMES
            .get(name)
            .copied()
            .ok_or_else(|| VoxelError::UnknownGenerationType(name.to_owned()))
    }

    /// The lowercase name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            GenerationType::FULL => "full",
            GenerationType::SECONDS => "seconds",
            GenerationType::THIRDS => "thirds",
            GenerationType::FOURTHS => "fourths",
            GenerationType::RANDOM => "random",
            GenerationType::PROCEDURAL => "procedural",
        }
    }

    /// The modulus of the pattern strategies, `None` for the others.
    pub fn modulus(self) -> Option<i32> {
        match self {
            GenerationType::SECONDS => Some(2),
            GenerationType::THIRDS => Some(3),
            GenerationType::FOURTHS => Some(4),
            _ => None,
        }
    }
}

impl TryFrom<String> for GenerationType {
    type Error = VoxelError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        GenerationType::from_name(&name)
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings that decide which cells of a chunk are solid.
///
/// Owned by a chunk and read-only for the duration of a meshing pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// The active density strategy.
    pub generation_type: GenerationType,
    /// Seed shared by the random and procedural strategies.
    pub seed: i32,
    /// Horizontal noise frequency, relative to one chunk width.
    pub noise_zoom: f32,
    /// Surface height where the noise evaluates to zero.
    pub base_surface_level: f32,
    /// Height added to the base level where the noise evaluates to one.
    pub noise_amplitude: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            generation_type: GenerationType::PROCEDURAL,
            seed: 20,
            noise_zoom: 1.0,
            base_surface_level: 100.0,
            noise_amplitude: 20.0,
        }
    }
}

impl GenerationConfig {
    /// A config using `generation_type` and default values for everything else.
    ///
    /// # Arguments
    /// * `generation_type` - The density strategy to select
    pub fn with_type(generation_type: GenerationType) -> Self {
        GenerationConfig {
            generation_type,
            ..Default::default()
        }
    }

    /// Checks that the noise parameters are finite numbers.
    ///
    /// # Errors
    /// Returns [`VoxelError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), VoxelError> {
        let fields = [
            ("noise_zoom", self.noise_zoom),
            ("base_surface_level", self.base_surface_level),
            ("noise_amplitude", self.noise_amplitude),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(VoxelError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Layout of the chunk grid and the generation settings shared by its chunks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Number of chunks laid out on each side of the centre, per horizontal axis.
    pub render_radius: i32,
    /// Chunk extent along X, at most [`MAX_CHUNK_HORIZONTAL_SIZE`].
    pub chunk_width: i32,
    /// Chunk extent along Y.
    pub chunk_height: i32,
    /// Chunk extent along Z, at most [`MAX_CHUNK_HORIZONTAL_SIZE`].
    pub chunk_depth: i32,
    /// World position the grid is centred on. Rounded to whole blocks.
    pub center: [f32; 3],
    /// Settings applied to every chunk of the world.
    pub generation: GenerationConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            render_radius: 2,
            chunk_width: MAX_CHUNK_HORIZONTAL_SIZE,
            chunk_height: 128,
            chunk_depth: MAX_CHUNK_HORIZONTAL_SIZE,
            center: [0.0, 0.0, 0.0],
            generation: GenerationConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Reads and validates a JSON world configuration.
    ///
    /// Missing fields take their default values.
    ///
    /// # Arguments
    /// * `path` - The JSON file to read
    ///
    /// # Returns
    /// The validated configuration
    ///
    /// # Errors
    /// - [`VoxelError::Io`] if the file cannot be read
    /// - [`VoxelError::Json`] if it is not valid JSON for the schema, including
    ///   an unknown generation type name (the message carries the
    ///   [`VoxelError::UnknownGenerationType`] text)
    /// - The error of [`WorldConfig::validate`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VoxelError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Parses and validates a JSON world configuration.
    ///
    /// # Errors
    /// See [`WorldConfig::load`].
    pub fn from_json(json: &str) -> Result<Self, VoxelError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the grid layout and the generation settings.
    ///
    /// # Errors
    /// - [`VoxelError::BoundsViolation`] for negative chunk extents
    /// - [`VoxelError::InvalidConfig`] for a negative radius, horizontal extents
    ///   above [`MAX_CHUNK_HORIZONTAL_SIZE`], a non-finite centre or bad noise settings
    pub fn validate(&self) -> Result<(), VoxelError> {
        if self.chunk_width < 0 || self.chunk_height < 0 || self.chunk_depth < 0 {
            return Err(VoxelError::BoundsViolation {
                width: self.chunk_width,
                height: self.chunk_height,
                depth: self.chunk_depth,
            });
        }

        if self.chunk_width > MAX_CHUNK_HORIZONTAL_SIZE
            || self.chunk_depth > MAX_CHUNK_HORIZONTAL_SIZE
        {
            warn!(
                "Rejecting chunk footprint {}x{}",
                self.chunk_width, self.chunk_depth
            );
            return Err(VoxelError::InvalidConfig(format!(
                "chunk width and depth are limited to {MAX_CHUNK_HORIZONTAL_SIZE}, got {}x{}",
                self.chunk_width, self.chunk_depth
            )));
        }

        if self.render_radius < 0 {
            return Err(VoxelError::InvalidConfig(format!(
                "render_radius must not be negative, got {}",
                self.render_radius
            )));
        }

        if self.center.iter().any(|c| !c.is_finite()) {
            return Err(VoxelError::InvalidConfig(format!(
                "center must be finite, got {:?}",
                self.center
            )));
        }

        self.generation.validate()
    }
}

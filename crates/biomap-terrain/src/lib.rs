//! Deterministic biome map generation: height field synthesis, threshold
//! biome classification, and seeded scatter placement.

mod camera_fit;
mod error;
mod grid;
mod heightmap;
mod pipeline;
mod scatter;
mod seed;

pub mod biome;
pub mod debug_viz;

pub use biome::{
    BiomeClassifier, BiomeTable, BiomeType, DisplayColor, MacroCell, MacroGrid, TileView,
};
pub use camera_fit::{DEFAULT_PADDING, OrthoFit, fit_orthographic};
pub use error::GenerationError;
pub use grid::{Dimensions, Grid, GridTransform, MapExtents};
pub use heightmap::{HeightField, HeightmapSampler, MAX_NOISE_SCALE, generate_height_field};
pub use pipeline::{GeneratedMap, MapGenerationPipeline};
pub use scatter::{
    BiomeScatter, MAX_JITTER, MAX_SCALE, MIN_SCALE, PlacementRecord, ScatterParams,
    ScatterPlanner, group_by_biome,
};
pub use seed::{SEED_RANGE, ScatterRng, SeedOffsets, fingerprint, resolve_seed};

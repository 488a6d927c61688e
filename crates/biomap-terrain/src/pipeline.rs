//! End-to-end map generation: seed resolution, validation, and the three
//! stages run strictly in sequence.

use biomap_config::Config;
use rand::Rng;
use tracing::{debug, info, info_span};

use crate::biome::{BiomeClassifier, BiomeTable, MacroGrid};
use crate::error::GenerationError;
use crate::grid::{Dimensions, GridTransform, MapExtents};
use crate::heightmap::{HeightField, HeightmapSampler};
use crate::scatter::{PlacementRecord, ScatterParams, ScatterPlanner, group_by_biome};
use crate::seed::{ScatterRng, fingerprint, resolve_seed};

/// Everything one run produces. Handed to the renderer and instantiation
/// collaborators; a new run replaces it wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedMap {
    /// Seed the run actually used.
    pub seed: i64,
    pub height_field: HeightField,
    pub grid: MacroGrid,
    pub placements: Vec<PlacementRecord>,
    /// Grid-to-world mapping used for placement positions.
    pub transform: GridTransform,
}

impl GeneratedMap {
    /// Digest of the grid and placements; equal for equal runs.
    pub fn fingerprint(&self) -> u64 {
        fingerprint(&self.grid, &self.placements)
    }

    /// World extents of the cell origins, for camera framing.
    pub fn extents(&self) -> MapExtents {
        self.transform.extents(self.grid.dimensions())
    }

    /// Placements split into their per-biome groups.
    pub fn placements_by_biome(&self) -> BiomeTable<Vec<&PlacementRecord>> {
        group_by_biome(&self.placements)
    }
}

/// Runs height field, classification and scatter planning for one config.
#[derive(Clone, Debug)]
pub struct MapGenerationPipeline {
    config: Config,
}

impl MapGenerationPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a map, drawing the seed from thread-local entropy when the
    /// config asks for randomization.
    pub fn run(&self) -> Result<GeneratedMap, GenerationError> {
        self.run_with_entropy(&mut rand::rng())
    }

    /// Like [`run`](Self::run) with an explicit entropy source.
    pub fn run_with_entropy(&self, entropy: &mut impl Rng) -> Result<GeneratedMap, GenerationError> {
        let seed = resolve_seed(&self.config.seed, entropy);
        self.run_with_seed(seed)
    }

    /// Generate with `seed`, ignoring the seed section of the config.
    ///
    /// The whole config is validated before any stage runs.
    pub fn run_with_seed(&self, seed: i64) -> Result<GeneratedMap, GenerationError> {
        let _span = info_span!("generate", seed).entered();
        let grid_cfg = &self.config.grid;
        let terrain = &self.config.terrain;

        let dims = Dimensions::new(grid_cfg.width, grid_cfg.height)?;
        let transform = GridTransform::new(grid_cfg.cell_size)?;
        let sampler = HeightmapSampler::new(seed, terrain.noise_scale)?;
        let classifier =
            BiomeClassifier::new(terrain.mountain_threshold, terrain.river_threshold)?;
        let planner = ScatterPlanner::new(
            ScatterParams::from_config(&self.config.population),
            transform,
        )?;

        let height_field = sampler.generate(dims);
        debug!(
            width = dims.width(),
            height = dims.height(),
            "height field generated"
        );

        let grid = classifier.classify(&height_field);
        let counts = grid.biome_counts();
        debug!(
            water = counts.water,
            forest = counts.forest,
            mountain = counts.mountain,
            "biomes classified"
        );

        let mut rng = ScatterRng::new(seed);
        let placements = planner.plan(&grid, &mut rng);
        debug!(words = rng.word_pos() as u64, "scatter stream consumed");

        info!(
            width = dims.width(),
            height = dims.height(),
            placements = placements.len(),
            "map generated"
        );

        Ok(GeneratedMap {
            seed,
            height_field,
            grid,
            placements,
            transform,
        })
    }
}

//! Scatter planning: deterministic per-cell spawn decisions over a classified grid.
//!
//! Cells are visited x outer, y inner. For every cell whose biome has a
//! non-empty prefab pool the planner draws, in order:
//!
//! 1. a spawn roll in `[0, 1)`; the cell spawns iff `roll < spawn_chance`,
//! 2. jitter x and jitter y in `[-jitter, jitter]`,
//! 3. a prefab index in `[0, pool_size)`,
//! 4. a rotation in `[0, 360)` degrees,
//! 5. a uniform scale in `[0.9, 1.1]`.
//!
//! Steps 2-5 only happen on a successful roll. Cells whose biome has an empty
//! pool consume no draws at all.

use biomap_config::PopulationConfig;
use glam::DVec2;
use tracing::{debug, info};

use crate::biome::{BiomeTable, BiomeType, MacroGrid};
use crate::error::{GenerationError, require_unit};
use crate::grid::GridTransform;
use crate::seed::ScatterRng;

/// Smallest uniform scale applied to a placed object.
pub const MIN_SCALE: f64 = 0.9;
/// Largest uniform scale applied to a placed object.
pub const MAX_SCALE: f64 = 1.1;

/// Largest accepted jitter, in world units. Keeps the `[-jitter, jitter]`
/// draw span finite.
pub const MAX_JITTER: f64 = 1.0e6;

/// One object for the host to instantiate.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementRecord {
    /// Grid cell the object belongs to.
    pub cell: (u32, u32),
    /// Biome of that cell; selects both the prefab pool and the parent group.
    pub biome: BiomeType,
    /// World position: cell origin plus jitter.
    pub position: DVec2,
    /// Index into the biome's prefab pool.
    pub prefab_index: usize,
    /// Rotation about the view axis, in degrees `[0, 360)`.
    pub rotation_deg: f64,
    /// Uniform scale factor in `[0.9, 1.1]`.
    pub scale: f64,
}

/// Scatter settings for one biome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BiomeScatter {
    /// Number of prefabs available. Zero disables the biome.
    pub pool_size: usize,
    /// Probability of spawning per cell, in `[0, 1]`.
    pub spawn_chance: f64,
}

/// Scatter settings for every biome plus the shared jitter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScatterParams {
    pub biomes: BiomeTable<BiomeScatter>,
    /// Maximum offset per axis from the cell origin, in world units.
    pub jitter: f64,
}

impl ScatterParams {
    /// Extract scatter settings from the population config.
    pub fn from_config(population: &PopulationConfig) -> Self {
        let biomes = BiomeTable::from_fn(|biome| {
            let spawn = match biome {
                BiomeType::Water => &population.water,
                BiomeType::Forest => &population.forest,
                BiomeType::Mountain => &population.mountain,
            };
            BiomeScatter {
                pool_size: spawn.prefabs.len(),
                spawn_chance: spawn.spawn_chance,
            }
        });
        Self {
            biomes,
            jitter: population.jitter,
        }
    }

    /// Check every chance and the jitter magnitude.
    pub fn validate(&self) -> Result<(), GenerationError> {
        require_unit("population.water.spawn_chance", self.biomes.water.spawn_chance)?;
        require_unit("population.forest.spawn_chance", self.biomes.forest.spawn_chance)?;
        require_unit(
            "population.mountain.spawn_chance",
            self.biomes.mountain.spawn_chance,
        )?;
        if !(0.0..=MAX_JITTER).contains(&self.jitter) {
            return Err(GenerationError::invalid(
                "population.jitter",
                format!("must be in [0, {MAX_JITTER}], got {}", self.jitter),
            ));
        }
        Ok(())
    }
}

/// Plans placements for a classified grid. Construction validates the params,
/// so a planner never rejects input after it has started drawing.
#[derive(Clone, Debug)]
pub struct ScatterPlanner {
    params: ScatterParams,
    transform: GridTransform,
}

impl ScatterPlanner {
    pub fn new(params: ScatterParams, transform: GridTransform) -> Result<Self, GenerationError> {
        params.validate()?;
        Ok(Self { params, transform })
    }

    pub fn params(&self) -> &ScatterParams {
        &self.params
    }

    /// Walk `grid` in visitation order and emit one record per successful roll.
    pub fn plan(&self, grid: &MacroGrid, rng: &mut ScatterRng) -> Vec<PlacementRecord> {
        let counts = grid.biome_counts();
        for (biome, spawn) in self.params.biomes.iter() {
            if spawn.pool_size == 0 && spawn.spawn_chance > 0.0 && counts[biome] > 0 {
                info!(%biome, cells = counts[biome], "no prefabs for biome; skipping");
            }
        }

        let jitter = self.params.jitter;
        let mut records = Vec::new();
        for cell in grid.cells() {
            let spawn = &self.params.biomes[cell.biome];
            if spawn.pool_size == 0 {
                continue;
            }
            if rng.unit() >= spawn.spawn_chance {
                continue;
            }

            let offset = DVec2::new(rng.symmetric(jitter), rng.symmetric(jitter));
            let prefab_index = rng.index(spawn.pool_size);
            let rotation_deg = rng.range(0.0, 360.0);
            let scale = rng.range_inclusive(MIN_SCALE, MAX_SCALE);

            records.push(PlacementRecord {
                cell: (cell.x, cell.y),
                biome: cell.biome,
                position: self.transform.cell_to_world(cell.x, cell.y) + offset,
                prefab_index,
                rotation_deg,
                scale,
            });
        }

        debug!(
            records = records.len(),
            cells = grid.dimensions().cell_count(),
            "scatter planned"
        );
        records
    }
}

/// Split records by biome, preserving order within each group.
pub fn group_by_biome(records: &[PlacementRecord]) -> BiomeTable<Vec<&PlacementRecord>> {
    let mut groups: BiomeTable<Vec<&PlacementRecord>> = BiomeTable::default();
    for record in records {
        groups[record.biome].push(record);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::BiomeClassifier;
    use crate::grid::{Dimensions, Grid};

    /// Bands of water, forest and mountain columns across an 9x6 grid.
    fn banded_grid() -> MacroGrid {
        let dims = Dimensions::new(9, 6).unwrap();
        let field = Grid::from_fn(dims, |x, _| match x / 3 {
            0 => 0.1,
            1 => 0.5,
            _ => 0.95,
        });
        BiomeClassifier::new(0.9, 0.3).unwrap().classify(&field)
    }

    fn params(pools: [usize; 3], chances: [f64; 3], jitter: f64) -> ScatterParams {
        ScatterParams {
            biomes: BiomeTable {
                water: BiomeScatter {
                    pool_size: pools[0],
                    spawn_chance: chances[0],
                },
                forest: BiomeScatter {
                    pool_size: pools[1],
                    spawn_chance: chances[1],
                },
                mountain: BiomeScatter {
                    pool_size: pools[2],
                    spawn_chance: chances[2],
                },
            },
            jitter,
        }
    }

    fn planner(params: ScatterParams) -> ScatterPlanner {
        ScatterPlanner::new(params, GridTransform::new(1.0).unwrap()).unwrap()
    }

    #[test]
    fn test_full_chance_spawns_every_cell() {
        let grid = banded_grid();
        let records = planner(params([2, 3, 1], [1.0; 3], 0.2)).plan(&grid, &mut ScatterRng::new(0));
        assert_eq!(records.len(), grid.dimensions().cell_count());
        let cells: Vec<_> = records.iter().map(|r| r.cell).collect();
        let expected: Vec<_> = grid.dimensions().cells().collect();
        assert_eq!(cells, expected, "records must follow visitation order");
    }

    #[test]
    fn test_zero_chance_never_spawns() {
        let grid = banded_grid();
        let planner = planner(params([2, 2, 2], [0.0, 1.0, 0.5], 0.2));
        for seed in -50..50 {
            let records = planner.plan(&grid, &mut ScatterRng::new(seed));
            assert!(
                records.iter().all(|r| r.biome != BiomeType::Water),
                "water spawned with zero chance for seed {seed}"
            );
        }
    }

    #[test]
    fn test_empty_pool_with_full_chance_yields_nothing() {
        let grid = banded_grid();
        let records =
            planner(params([2, 0, 2], [1.0; 3], 0.2)).plan(&grid, &mut ScatterRng::new(11));
        assert!(records.iter().all(|r| r.biome != BiomeType::Forest));
        assert_eq!(records.len(), 36);
    }

    #[test]
    fn test_empty_pools_consume_no_draws() {
        let grid = banded_grid();
        let mut rng = ScatterRng::new(99);
        let records = planner(params([0, 0, 0], [1.0; 3], 0.2)).plan(&grid, &mut rng);
        assert!(records.is_empty());
        assert_eq!(rng, ScatterRng::new(99), "stream must not advance");
    }

    #[test]
    fn test_empty_pool_shifts_later_draws() {
        // Skipping draws for water means forest/mountain see a different stream
        // than when water rolls and always fails.
        let grid = banded_grid();
        let skipped = planner(params([0, 2, 2], [1.0, 0.5, 0.5], 0.2))
            .plan(&grid, &mut ScatterRng::new(5));
        let rolled = planner(params([2, 2, 2], [0.0, 0.5, 0.5], 0.2))
            .plan(&grid, &mut ScatterRng::new(5));
        assert!(skipped.iter().all(|r| r.biome != BiomeType::Water));
        assert!(rolled.iter().all(|r| r.biome != BiomeType::Water));
        assert_ne!(skipped, rolled);
    }

    #[test]
    fn test_record_ranges() {
        let grid = banded_grid();
        let jitter = 0.35;
        let transform = GridTransform::new(2.0).unwrap();
        let planner =
            ScatterPlanner::new(params([3, 4, 5], [0.7, 0.8, 0.9], jitter), transform).unwrap();
        for seed in 0..20 {
            for record in planner.plan(&grid, &mut ScatterRng::new(seed)) {
                let base = transform.cell_to_world(record.cell.0, record.cell.1);
                let offset = record.position - base;
                assert!(offset.x.abs() <= jitter && offset.y.abs() <= jitter);
                assert!((0.0..360.0).contains(&record.rotation_deg));
                assert!((MIN_SCALE..=MAX_SCALE).contains(&record.scale));
                let pool = planner.params().biomes[record.biome].pool_size;
                assert!(record.prefab_index < pool);
            }
        }
    }

    #[test]
    fn test_zero_jitter_places_on_cell_origin() {
        let grid = banded_grid();
        let records = planner(params([1, 1, 1], [1.0; 3], 0.0)).plan(&grid, &mut ScatterRng::new(3));
        for record in &records {
            let (x, y) = record.cell;
            assert_eq!(record.position, DVec2::new(x as f64, y as f64));
            assert_eq!(record.prefab_index, 0);
        }
    }

    #[test]
    fn test_plan_deterministic() {
        let grid = banded_grid();
        let planner = planner(params([2, 3, 4], [0.25, 0.45, 0.35], 0.2));
        let a = planner.plan(&grid, &mut ScatterRng::new(12345));
        let b = planner.plan(&grid, &mut ScatterRng::new(12345));
        assert_eq!(a, b);
        assert!(a.len() <= grid.dimensions().cell_count());
    }

    #[test]
    fn test_invalid_params_rejected_before_planning() {
        let transform = GridTransform::new(1.0).unwrap();
        let err = ScatterPlanner::new(params([1; 3], [0.5, 1.2, 0.5], 0.2), transform).unwrap_err();
        assert_eq!(err.field(), "population.forest.spawn_chance");

        let err = ScatterPlanner::new(params([1; 3], [0.5; 3], -0.1), transform).unwrap_err();
        assert_eq!(err.field(), "population.jitter");

        let err = ScatterPlanner::new(params([1; 3], [0.5; 3], f64::NAN), transform).unwrap_err();
        assert_eq!(err.field(), "population.jitter");

        let err = ScatterPlanner::new(params([1; 3], [0.5; 3], 1e308), transform).unwrap_err();
        assert_eq!(err.field(), "population.jitter");
    }

    #[test]
    fn test_max_jitter_plans_every_cell() {
        let transform = GridTransform::new(1.0).unwrap();
        let planner =
            ScatterPlanner::new(params([1; 3], [1.0; 3], MAX_JITTER), transform).unwrap();
        let records = planner.plan(&banded_grid(), &mut ScatterRng::new(1));
        assert_eq!(records.len(), 9 * 6);
        for record in &records {
            let base = transform.cell_to_world(record.cell.0, record.cell.1);
            assert!((record.position - base).abs().max_element() <= MAX_JITTER);
        }

        let err = ScatterPlanner::new(params([1; 3], [1.0; 3], MAX_JITTER * 2.0), transform)
            .unwrap_err();
        assert_eq!(err.field(), "population.jitter");
    }

    #[test]
    fn test_from_config_uses_pool_lengths() {
        let mut population = PopulationConfig::default();
        population.forest.prefabs = vec!["pine".into(), "oak".into()];
        let params = ScatterParams::from_config(&population);
        assert_eq!(params.biomes.forest.pool_size, 2);
        assert_eq!(params.biomes.water.pool_size, 0);
        assert_eq!(params.biomes.forest.spawn_chance, 0.45);
        assert_eq!(params.jitter, 0.2);
    }

    #[test]
    fn test_group_by_biome() {
        let grid = banded_grid();
        let records = planner(params([1, 1, 1], [1.0; 3], 0.1)).plan(&grid, &mut ScatterRng::new(8));
        let groups = group_by_biome(&records);
        assert_eq!(groups.water.len(), 18);
        assert_eq!(groups.forest.len(), 18);
        assert_eq!(groups.mountain.len(), 18);
        assert!(groups.forest.iter().all(|r| r.biome == BiomeType::Forest));
    }
}

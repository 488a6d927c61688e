//! Plain-text summary of a generated map.

use std::fmt::Write;

use biomap_config::{BiomeSpawnConfig, Config};
use biomap_terrain::{BiomeType, GeneratedMap};

fn spawn_config(config: &Config, biome: BiomeType) -> &BiomeSpawnConfig {
    match biome {
        BiomeType::Water => &config.population.water,
        BiomeType::Forest => &config.population.forest,
        BiomeType::Mountain => &config.population.mountain,
    }
}

/// Seed, grid size, biome coverage, and placements per group with the
/// prefab ids they resolve to.
pub fn summarize(map: &GeneratedMap, config: &Config) -> String {
    let dims = map.grid.dimensions();
    let total = dims.cell_count();
    let counts = map.grid.biome_counts();
    let groups = map.placements_by_biome();

    let mut out = String::new();
    let _ = writeln!(out, "seed {}  {}x{} cells", map.seed, dims.width(), dims.height());
    for (biome, &count) in counts.iter() {
        let pct = count as f64 * 100.0 / total as f64;
        let _ = writeln!(out, "  {biome:<8} {count:>6} cells ({pct:5.1}%)");
    }
    let _ = writeln!(out, "placements {}", map.placements.len());
    for (biome, records) in groups.iter() {
        let pool = &spawn_config(config, biome).prefabs;
        let mut per_prefab = vec![0usize; pool.len()];
        for record in records {
            per_prefab[record.prefab_index] += 1;
        }
        let detail: Vec<String> = pool
            .iter()
            .zip(&per_prefab)
            .map(|(name, n)| format!("{name}={n}"))
            .collect();
        let _ = writeln!(
            out,
            "  {:<18} {:>6} [{}]",
            biome.group_name(),
            records.len(),
            detail.join(", ")
        );
    }
    let _ = write!(out, "fingerprint {:016x}", map.fingerprint());
    out
}

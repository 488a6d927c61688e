//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "map.ron";

/// Top-level map generation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid dimensions and world cell size.
    pub grid: GridConfig,
    /// Seed selection.
    pub seed: SeedConfig,
    /// Height field and biome threshold settings.
    pub terrain: TerrainConfig,
    /// Per-biome scatter settings.
    pub population: PopulationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Number of cells along x.
    pub width: u32,
    /// Number of cells along y.
    pub height: u32,
    /// World-space edge length of one cell. Only used for grid-to-world conversion.
    pub cell_size: f64,
}

/// Seed configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeedConfig {
    /// Explicit seed, used when `randomize` is false.
    pub seed: i64,
    /// Draw a fresh seed from OS entropy at the start of every run.
    pub randomize: bool,
}

/// Height field and classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Noise sampling frequency per cell, in `(0.0, 0.3]`.
    pub noise_scale: f64,
    /// Heights at or above this value are mountains, in `[0.0, 1.0]`.
    pub mountain_threshold: f64,
    /// Heights below this value are water; between the two thresholds is forest.
    pub river_threshold: f64,
}

/// Scatter settings for a single biome.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BiomeSpawnConfig {
    /// Opaque prefab identifiers understood by the host. Empty disables spawning.
    pub prefabs: Vec<String>,
    /// Probability of spawning one object per cell, in `[0.0, 1.0]`.
    pub spawn_chance: f64,
}

/// Population (scatter) configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PopulationConfig {
    /// Forest cells.
    pub forest: BiomeSpawnConfig,
    /// Water cells.
    pub water: BiomeSpawnConfig,
    /// Mountain cells.
    pub mountain: BiomeSpawnConfig,
    /// Maximum positional offset per axis, in world units, in `[0, 1e6]`.
    pub jitter: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 35,
            cell_size: 1.0,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            randomize: true,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            noise_scale: 0.08,
            mountain_threshold: 0.72,
            river_threshold: 0.72,
        }
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            forest: BiomeSpawnConfig {
                prefabs: Vec::new(),
                spawn_chance: 0.45,
            },
            water: BiomeSpawnConfig {
                prefabs: Vec::new(),
                spawn_chance: 0.25,
            },
            mountain: BiomeSpawnConfig {
                prefabs: Vec::new(),
                spawn_chance: 0.35,
            },
            jitter: 0.2,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for biomap (`~/.config/biomap` on Linux).
///
/// Falls back to the working directory when the platform has no config dir.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("biomap"))
        .unwrap_or_else(|| PathBuf::from("."))
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|source| {
                ConfigError::Read {
                    path: config_path.clone(),
                    source,
                }
            })?;
            let config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: config_path.clone(),
                source,
            })?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `map.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }
}

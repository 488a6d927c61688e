//! Command-line argument parsing for biomap.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// biomap command-line arguments.
///
/// CLI values override settings loaded from `map.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "biomap", about = "Deterministic biome map generator")]
pub struct CliArgs {
    /// Grid width in cells.
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid height in cells.
    #[arg(long)]
    pub height: Option<u32>,

    /// World size of one cell.
    #[arg(long)]
    pub cell_size: Option<f64>,

    /// Fixed seed. Disables seed randomization.
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Draw a fresh seed for this run.
    #[arg(long, conflicts_with = "seed")]
    pub randomize: bool,

    /// Noise sampling frequency.
    #[arg(long)]
    pub noise_scale: Option<f64>,

    /// Mountain threshold.
    #[arg(long)]
    pub mountain_threshold: Option<f64>,

    /// Water/forest threshold.
    #[arg(long)]
    pub river_threshold: Option<f64>,

    /// Scatter jitter per axis.
    #[arg(long)]
    pub jitter: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write biome and height PNGs with this path prefix.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.grid.width = w;
        }
        if let Some(h) = args.height {
            self.grid.height = h;
        }
        if let Some(size) = args.cell_size {
            self.grid.cell_size = size;
        }
        if let Some(seed) = args.seed {
            self.seed.seed = seed;
            self.seed.randomize = false;
        }
        if args.randomize {
            self.seed.randomize = true;
        }
        if let Some(scale) = args.noise_scale {
            self.terrain.noise_scale = scale;
        }
        if let Some(t) = args.mountain_threshold {
            self.terrain.mountain_threshold = t;
        }
        if let Some(t) = args.river_threshold {
            self.terrain.river_threshold = t;
        }
        if let Some(j) = args.jitter {
            self.population.jitter = j;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

//! Configuration system for biomap.
//!
//! Map generation settings persist to disk as RON files. Supports CLI
//! overrides via clap and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BiomeSpawnConfig, Config, DebugConfig, GridConfig, PopulationConfig, SeedConfig,
    TerrainConfig, default_config_dir,
};
pub use error::ConfigError;

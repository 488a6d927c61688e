//! Command-line front end: generates one map and reports it.
//!
//! Configuration is loaded from `map.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p biomap-demo -- --seed 42 --output out/map` to also
//! write `out/map_biomes.png`, `out/map_height.png` and `out/map_placements.png`.

mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use biomap_config::{CliArgs, Config, default_config_dir};
use biomap_terrain::debug_viz::{
    ExportError, render_biome_map, render_height_map, render_placements, write_png,
};
use biomap_terrain::{DEFAULT_PADDING, GeneratedMap, MapGenerationPipeline, fit_orthographic};
use clap::Parser;
use tracing::{error, info};

/// Aspect ratio assumed when reporting the camera fit.
const REPORT_ASPECT: f64 = 16.0 / 9.0;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    biomap_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let pipeline = MapGenerationPipeline::new(config);
    let map = match pipeline.run() {
        Ok(map) => map,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report::summarize(&map, pipeline.config()));
    if let Some(fit) = fit_orthographic(&map.extents(), REPORT_ASPECT, DEFAULT_PADDING) {
        info!(
            center_x = fit.center.x,
            center_y = fit.center.y,
            ortho_size = fit.ortho_size,
            "camera fit"
        );
    }

    if let Some(prefix) = args.output.as_deref()
        && let Err(e) = export_images(&map, prefix)
    {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn export_images(map: &GeneratedMap, prefix: &Path) -> Result<(), ExportError> {
    let biomes = with_suffix(prefix, "biomes");
    write_png(&render_biome_map(&map.grid), &biomes)?;
    let height = with_suffix(prefix, "height");
    write_png(&render_height_map(&map.height_field), &height)?;
    let placements = with_suffix(prefix, "placements");
    write_png(&render_placements(&map.grid, &map.placements), &placements)?;
    info!(
        biomes = %biomes.display(),
        height = %height.display(),
        placements = %placements.display(),
        "wrote debug images"
    );
    Ok(())
}

/// `out/map` + `biomes` -> `out/map_biomes.png`.
fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = prefix.file_name().unwrap_or_default().to_os_string();
    name.push(format!("_{suffix}.png"));
    prefix.with_file_name(name)
}

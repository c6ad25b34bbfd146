//! # Terrain CLI
//!
//! Generates `count` terrain meshes named `{mesh_name}_{i}.obj` into
//! `mesh_dir`.
//!
//! ```text
//! terrain-gen --cfg overhanging --over-cfg --count 3 --seed 7 --enable-history
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::constants::{
    DEFAULT_GRID_SHAPE, DEFAULT_INITIAL_TILE, DEFAULT_MAX_STEPS, DEFAULT_MESH_COUNT,
    DEFAULT_MESH_DIR, DEFAULT_MESH_NAME, DEFAULT_OVERHANG_INITIAL_TILE, DEFAULT_WALL_HEIGHT,
    MESH_EXTENSION,
};
use std::path::PathBuf;
use terrain_gen::{GenerationRequest, TerrainGenerator};
use tile_wfc::{patterns, MeshPattern};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Built-in base patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BaseConfig {
    /// Rooms with walls, platforms and ramps
    Indoor,
    /// Two-level ground with cliffs and ramps
    Overhanging,
}

impl BaseConfig {
    fn pattern(self, wall_height: f64) -> MeshPattern {
        match self {
            BaseConfig::Indoor => patterns::indoor_navigation(wall_height),
            BaseConfig::Overhanging => patterns::overhanging_terrain(),
        }
    }
}

/// Wave-function-collapse terrain generator
#[derive(Debug, Parser)]
#[command(name = "terrain-gen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate terrain meshes from wave-function-collapse tile grids", long_about = None)]
struct Cli {
    /// Built-in base pattern
    #[arg(long = "cfg", value_enum, default_value = "indoor")]
    base: BaseConfig,

    /// Base pattern from a JSON file instead of a built-in
    #[arg(long)]
    cfg_file: Option<PathBuf>,

    /// Add the overhang overlay layer
    #[arg(long)]
    over_cfg: bool,

    /// Write solver arrays and per-cell fragments next to each mesh
    #[arg(long)]
    enable_history: bool,

    #[arg(long, default_value = DEFAULT_MESH_DIR)]
    mesh_dir: PathBuf,

    #[arg(long, default_value = DEFAULT_MESH_NAME)]
    mesh_name: String,

    /// Number of meshes to generate
    #[arg(long, default_value_t = DEFAULT_MESH_COUNT)]
    count: usize,

    #[arg(long, default_value_t = DEFAULT_GRID_SHAPE.0)]
    rows: usize,

    #[arg(long, default_value_t = DEFAULT_GRID_SHAPE.1)]
    cols: usize,

    /// Tile anchored at the grid centre of the base layer
    #[arg(long, default_value = DEFAULT_INITIAL_TILE)]
    initial_tile: String,

    /// Tile anchored at the grid centre of the overhang layer
    #[arg(long, default_value = DEFAULT_OVERHANG_INITIAL_TILE)]
    over_initial_tile: String,

    /// Wall height of the indoor pattern
    #[arg(long, default_value_t = DEFAULT_WALL_HEIGHT)]
    wall_height: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Solver step budget per layer
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Compose cells on one thread
    #[arg(long)]
    sequential: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn base_pattern(&self) -> Result<MeshPattern> {
        match &self.cfg_file {
            Some(path) => MeshPattern::from_file(path)
                .with_context(|| format!("loading pattern {}", path.display())),
            None => Ok(self.base.pattern(self.wall_height)),
        }
    }

    /// Request for mesh number `index`.
    fn request(&self, pattern: &MeshPattern, index: usize) -> GenerationRequest {
        let mut request = GenerationRequest::new(
            pattern.clone(),
            &self.mesh_dir,
            format!("{}_{}.{}", self.mesh_name, index, MESH_EXTENSION),
        )
        .with_shape((self.rows, self.cols))
        .with_initial_tile(&self.initial_tile)
        .with_overhang_initial_tile(&self.over_initial_tile)
        .with_history(self.enable_history)
        // Each mesh consumes two seeds, one per layer
        .with_seed(self.seed.map(|s| s.wrapping_add(2 * index as u64)))
        .with_max_steps(self.max_steps)
        .with_parallel(!self.sequential);
        if self.over_cfg {
            request = request.with_overhang(patterns::overhanging());
        }
        request
    }
}

fn log_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn run(cli: &Cli) -> Result<()> {
    let pattern = cli.base_pattern()?;
    let generator = TerrainGenerator::new();

    for index in 0..cli.count {
        let request = cli.request(&pattern, index);
        let report = generator
            .generate(&request)
            .with_context(|| format!("generating {}", request.output_path().display()))?;
        info!(
            path = %report.path.display(),
            fragments = report.fragments,
            triangles = report.triangle_count,
            history_failures = report.history_failures,
            "mesh {}/{} written",
            index + 1,
            cli.count
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(&cli.log_level))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run(&cli)
}

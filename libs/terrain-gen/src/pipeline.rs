//! # Generation Pipeline
//!
//! One terrain per [`GenerationRequest`]: solve the base layer and the
//! optional overhang layer, compose, recentre and export.
//!
//! ```text
//! MeshPattern ─▶ LayerSolver ─┐
//!                             ├─▶ MeshComposer ─▶ finalize ─▶ export
//! MeshPattern ─▶ LayerSolver ─┘        │
//!  (overhang)                     HistorySink
//! ```

use crate::compose::MeshComposer;
use crate::error::{TerrainError, TerrainResult};
use crate::finalize::{export, finalize};
use crate::history::{DirectoryHistory, HistorySink, LayerRole};
use crate::layer::{LayerSolution, LayerSolver};
use config::constants::{
    DEFAULT_GRID_SHAPE, DEFAULT_INITIAL_TILE, DEFAULT_MAX_STEPS, DEFAULT_OVERHANG_INITIAL_TILE,
    MESH_EXTENSION,
};
use glam::DVec2;
use std::fs;
use std::path::PathBuf;
use tile_wfc::{GridShape, MeshPattern};
use tracing::{info, warn};

/// Everything needed to generate one terrain mesh.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub pattern: MeshPattern,
    pub overhang_pattern: Option<MeshPattern>,
    pub mesh_dir: PathBuf,
    /// Output file name; `.obj` is appended when it has no extension
    pub mesh_name: String,
    pub shape: GridShape,
    pub initial_tile: String,
    pub overhang_initial_tile: String,
    pub enable_history: bool,
    /// Base layer seed; the overhang layer uses `seed + 1`
    pub seed: Option<u64>,
    pub max_steps: usize,
    pub parallel: bool,
}

impl GenerationRequest {
    /// Request with default shape, seed tiles and step budget.
    pub fn new(pattern: MeshPattern, mesh_dir: impl Into<PathBuf>, mesh_name: impl Into<String>) -> Self {
        Self {
            pattern,
            overhang_pattern: None,
            mesh_dir: mesh_dir.into(),
            mesh_name: mesh_name.into(),
            shape: DEFAULT_GRID_SHAPE,
            initial_tile: DEFAULT_INITIAL_TILE.to_string(),
            overhang_initial_tile: DEFAULT_OVERHANG_INITIAL_TILE.to_string(),
            enable_history: false,
            seed: None,
            max_steps: DEFAULT_MAX_STEPS,
            parallel: true,
        }
    }

    pub fn with_overhang(mut self, pattern: MeshPattern) -> Self {
        self.overhang_pattern = Some(pattern);
        self
    }

    pub fn with_shape(mut self, shape: GridShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_initial_tile(mut self, name: impl Into<String>) -> Self {
        self.initial_tile = name.into();
        self
    }

    pub fn with_overhang_initial_tile(mut self, name: impl Into<String>) -> Self {
        self.overhang_initial_tile = name.into();
        self
    }

    pub fn with_history(mut self, enable: bool) -> Self {
        self.enable_history = enable;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Where the mesh is written.
    pub fn output_path(&self) -> PathBuf {
        let path = self.mesh_dir.join(&self.mesh_name);
        match path.extension() {
            Some(_) => path,
            None => path.with_extension(MESH_EXTENSION),
        }
    }

    /// Output file name, extension included; the history root is named
    /// after it.
    fn history_name(&self) -> String {
        self.output_path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.mesh_name.clone())
    }
}

/// Summary of a generated terrain.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub fragments: usize,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub history_failures: usize,
    /// History root when history was enabled
    pub history_dir: Option<PathBuf>,
}

/// Runs the full generation pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerrainGenerator;

impl TerrainGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates and exports one terrain.
    pub fn generate(&self, request: &GenerationRequest) -> TerrainResult<GenerationReport> {
        fs::create_dir_all(&request.mesh_dir)
            .map_err(|source| TerrainError::io(&request.mesh_dir, source))?;

        let (base, overhang) = self.solve_layers(request)?;

        let mut history_failures = 0;
        let history = if request.enable_history {
            let history = DirectoryHistory::for_run(&request.mesh_dir, &request.history_name());
            match history.prepare() {
                Ok(()) => Some(history),
                Err(err) => {
                    warn!(root = %history.root().display(), error = %err, "history disabled");
                    history_failures += 1;
                    None
                }
            }
        } else {
            None
        };

        if let Some(sink) = &history {
            let layers = std::iter::once((LayerRole::Base, &base))
                .chain(overhang.as_ref().map(|o| (LayerRole::Overhang, o)));
            for (role, layer) in layers {
                if let Err(err) = sink.record_layer(role, layer) {
                    warn!(?role, error = %err, "history write failed");
                    history_failures += 1;
                }
            }
        }

        let dim = base.catalog.dim();
        let mut composer = MeshComposer::new(DVec2::new(dim.x, dim.y)).parallel(request.parallel);
        if let Some(sink) = &history {
            composer = composer.with_history(sink as &dyn HistorySink);
        }
        let composition = composer.compose(&base, overhang.as_ref())?;
        history_failures += composition.history_failures;

        let mesh = finalize(composition.mesh);
        let path = request.output_path();
        export(&mesh, &path)?;

        Ok(GenerationReport {
            path,
            fragments: composition.fragments,
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            history_failures,
            history_dir: history.map(|h| h.root().to_path_buf()),
        })
    }

    /// Checks both layers against their catalogs, then solves them. A bad
    /// configuration in either layer fails before any solver runs.
    fn solve_layers(
        &self,
        request: &GenerationRequest,
    ) -> TerrainResult<(LayerSolution, Option<LayerSolution>)> {
        let solver = LayerSolver::new().with_max_steps(request.max_steps);
        let shape = request.shape;

        let base_catalog = solver.prepare(&request.pattern, shape, &request.initial_tile)?;
        let over_catalog = request
            .overhang_pattern
            .as_ref()
            .map(|over| solver.prepare(over, shape, &request.overhang_initial_tile))
            .transpose()?;

        info!(
            pattern = %request.pattern.name,
            overhang = request.overhang_pattern.as_ref().map(|p| p.name.as_str()),
            rows = shape.0,
            cols = shape.1,
            "generating terrain"
        );

        let base_solver = solver.with_seed(request.seed);
        let solve_base = || base_solver.solve_prepared(base_catalog, shape, &request.initial_tile);

        match over_catalog {
            Some(catalog) => {
                let over_solver = solver.with_seed(request.seed.map(|s| s.wrapping_add(1)));
                let (base, overhang) = rayon::join(solve_base, || {
                    over_solver.solve_prepared(catalog, shape, &request.overhang_initial_tile)
                });
                Ok((base?, Some(overhang?)))
            }
            None => Ok((solve_base()?, None)),
        }
    }
}

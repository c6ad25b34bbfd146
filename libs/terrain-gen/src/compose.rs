//! # Mesh Composer
//!
//! Turns one or two solved layers into a single mesh. For every cell, in
//! row-major order:
//!
//! 1. resolve the base tile name and clone its fragment
//! 2. merge the overhang fragment of the same cell, if any
//! 3. record the merged part
//! 4. translate by [`world_offset`]
//! 5. record the translated part
//! 6. append it to the composed mesh
//!
//! Catalog fragments are never mutated. In parallel mode cells are placed on
//! the rayon pool and appended on the calling thread in row-major order, so
//! the result is identical to the sequential path.

use crate::error::{TerrainError, TerrainResult};
use crate::history::{FragmentStage, FragmentTag, HistorySink};
use crate::layer::LayerSolution;
use crate::placement::world_offset;
use glam::DVec2;
use rayon::prelude::*;
use tile_mesh::Mesh;
use tracing::{debug, warn};

/// Output of [`MeshComposer::compose`].
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub mesh: Mesh,
    /// Cells placed, one per grid cell
    pub fragments: usize,
    /// History writes that failed and were skipped
    pub history_failures: usize,
}

struct PlacedFragment {
    mesh: Mesh,
    history_failures: usize,
}

/// Composes solved layers on a lattice of `dims` tiles.
#[derive(Clone, Copy)]
pub struct MeshComposer<'h> {
    dims: DVec2,
    history: Option<&'h dyn HistorySink>,
    parallel: bool,
}

impl<'h> MeshComposer<'h> {
    /// Sequential composer without history.
    pub fn new(dims: DVec2) -> Self {
        Self {
            dims,
            history: None,
            parallel: false,
        }
    }

    pub fn with_history(mut self, sink: &'h dyn HistorySink) -> Self {
        self.history = Some(sink);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Composes `base` and the optional `overhang` layer into one mesh.
    pub fn compose(
        &self,
        base: &LayerSolution,
        overhang: Option<&LayerSolution>,
    ) -> TerrainResult<Composition> {
        let shape = base.shape();
        if let Some(over) = overhang {
            if over.shape() != shape {
                return Err(TerrainError::LayerShapeMismatch {
                    base: shape,
                    overhang: over.shape(),
                });
            }
        }

        let (rows, cols) = shape;
        let cells = rows * cols;
        debug!(rows, cols, parallel = self.parallel, "composing layers");

        let mut mesh = Mesh::new();
        let mut history_failures = 0;

        if self.parallel {
            let placed = (0..cells)
                .into_par_iter()
                .map(|cell| self.place_cell(base, overhang, cell / cols, cell % cols))
                .collect::<TerrainResult<Vec<_>>>()?;
            for fragment in &placed {
                mesh.merge(&fragment.mesh);
                history_failures += fragment.history_failures;
            }
        } else {
            for row in 0..rows {
                for col in 0..cols {
                    let fragment = self.place_cell(base, overhang, row, col)?;
                    mesh.merge(&fragment.mesh);
                    history_failures += fragment.history_failures;
                }
            }
        }

        if history_failures > 0 {
            warn!(history_failures, "composition finished with incomplete history");
        }

        Ok(Composition {
            mesh,
            fragments: cells,
            history_failures,
        })
    }

    fn place_cell(
        &self,
        base: &LayerSolution,
        overhang: Option<&LayerSolution>,
        row: usize,
        col: usize,
    ) -> TerrainResult<PlacedFragment> {
        let (index, name, fragment) = base.fragment_at(row, col)?;
        let mut part = fragment.clone();
        if let Some(over) = overhang {
            let (_, _, over_fragment) = over.fragment_at(row, col)?;
            part.merge(over_fragment);
        }

        let tag = FragmentTag::new(index, row, col, name);
        let mut history_failures = self.record(&tag, FragmentStage::Part, &part);
        part.translate(world_offset(row, col, self.dims));
        history_failures += self.record(&tag, FragmentStage::Translated, &part);

        Ok(PlacedFragment {
            mesh: part,
            history_failures,
        })
    }

    /// Returns the number of failed writes (0 or 1).
    fn record(&self, tag: &FragmentTag, stage: FragmentStage, mesh: &Mesh) -> usize {
        let Some(sink) = self.history else {
            return 0;
        };
        match sink.record_fragment(tag, stage, mesh) {
            Ok(()) => 0,
            Err(err) => {
                warn!(
                    row = tag.row,
                    col = tag.col,
                    tile = %tag.tile_name,
                    ?stage,
                    error = %err,
                    "history write failed"
                );
                1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HistoryError;
    use crate::history::{LayerRole, RecordingHistory};
    use glam::DVec3;
    use ndarray::Array2;
    use tile_mesh::primitives::create_cuboid;
    use tile_wfc::{Tile, TileCatalog, TileDescriptor};

    fn catalog(names: &[&str]) -> TileCatalog {
        let tiles = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let z = i as f64;
                let mesh = create_cuboid(DVec3::new(0.0, 0.0, z), DVec3::new(1.0, 1.0, z + 0.5))
                    .unwrap();
                Tile::new(TileDescriptor::new(*name, 1.0, ["f", "f", "f", "f"]), mesh)
            })
            .collect();
        TileCatalog::from_tiles("test", DVec3::ONE, tiles).unwrap()
    }

    fn layer(names: &[&str], grid: Array2<usize>) -> LayerSolution {
        LayerSolution {
            catalog: catalog(names),
            order: Array2::zeros(grid.dim()),
            grid,
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    struct FailingHistory;

    impl HistorySink for FailingHistory {
        fn record_layer(&self, _: LayerRole, _: &LayerSolution) -> Result<(), HistoryError> {
            Ok(())
        }

        fn record_fragment(
            &self,
            tag: &FragmentTag,
            stage: FragmentStage,
            _: &Mesh,
        ) -> Result<(), HistoryError> {
            if stage == FragmentStage::Translated && tag.col == 0 {
                return Err(HistoryError::Io {
                    path: "unwritable".into(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_shape_mismatch_rejected_before_cells() {
        let base = layer(&["a"], Array2::zeros((3, 3)));
        let over = layer(&["b"], Array2::zeros((3, 4)));
        let history = RecordingHistory::new();
        let err = MeshComposer::new(DVec2::ONE)
            .with_history(&history)
            .compose(&base, Some(&over))
            .unwrap_err();
        assert!(matches!(
            err,
            TerrainError::LayerShapeMismatch { base: (3, 3), overhang: (3, 4) }
        ));
        assert!(history.fragments(FragmentStage::Part).is_empty());
    }

    #[test]
    fn test_one_fragment_per_cell() {
        let base = layer(&["a", "b"], Array2::from_shape_fn((3, 5), |(r, c)| (r + c) % 2));
        let composition = MeshComposer::new(DVec2::ONE).compose(&base, None).unwrap();
        assert_eq!(composition.fragments, 15);
        assert_eq!(composition.mesh.vertex_count(), 15 * 8);
        assert_eq!(composition.mesh.triangle_count(), 15 * 12);
    }

    #[test]
    fn test_overhang_fragment_merged_into_cell() {
        let base = layer(&["a"], Array2::zeros((2, 2)));
        let over = layer(&["x", "y"], Array2::ones((2, 2)));
        let composition = MeshComposer::new(DVec2::ONE)
            .compose(&base, Some(&over))
            .unwrap();
        assert_eq!(composition.fragments, 4);
        assert_eq!(composition.mesh.triangle_count(), 4 * 24);
        let (_, max) = composition.mesh.bounding_box();
        assert_eq!(max.z, 1.5);
    }

    #[test]
    fn test_missing_fragment_aborts() {
        let mut base = layer(&["a", "b"], Array2::zeros((2, 2)));
        base.grid[[1, 0]] = 1;
        base.names[1] = "ghost".to_string();
        let err = MeshComposer::new(DVec2::ONE).compose(&base, None).unwrap_err();
        assert!(matches!(
            err,
            TerrainError::MissingTileFragment { ref name, row: 1, col: 0 } if name == "ghost"
        ));
    }

    #[test]
    fn test_history_failures_counted_not_fatal() {
        let base = layer(&["a"], Array2::zeros((3, 2)));
        let history = FailingHistory;
        let composer = MeshComposer::new(DVec2::ONE).with_history(&history);
        let plain = MeshComposer::new(DVec2::ONE).compose(&base, None).unwrap();

        let composition = composer.compose(&base, None).unwrap();
        assert_eq!(composition.history_failures, 3);
        assert_eq!(composition.mesh, plain.mesh);

        let parallel = composer.parallel(true).compose(&base, None).unwrap();
        assert_eq!(parallel.history_failures, 3);
    }

    #[test]
    fn test_catalog_fragments_untouched() {
        let base = layer(&["a"], Array2::zeros((2, 3)));
        let before = base.catalog.get("a").unwrap().mesh().clone();
        MeshComposer::new(DVec2::new(2.0, 2.0))
            .compose(&base, None)
            .unwrap();
        assert_eq!(base.catalog.get("a").unwrap().mesh(), &before);
    }
}

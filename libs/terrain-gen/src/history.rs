//! # History Sinks
//!
//! Optional provenance for a composition: raw solver arrays per layer and
//! every placed fragment before and after translation. Sinks are injected
//! into [`MeshComposer`](crate::MeshComposer); the composition loop only
//! calls the trait.
//!
//! Writes are keyed by unique cells, so sinks may be called from several
//! threads at once.
//!
//! ## On-disk layout
//!
//! ```text
//! <mesh_dir>/<mesh_name>_history/
//!   wave.json              base tile grid
//!   wave_order.json        base resolution order
//!   over_wave.json         overhang tile grid
//!   over_wave_order.json   overhang resolution order
//!   parts/                 {index}_{row}_{col}_{name}.obj
//!   translated_parts/      {index}_{row}_{col}_{name}_translated.obj
//! ```

use crate::error::HistoryError;
use crate::layer::LayerSolution;
use config::constants::{
    HISTORY_DIR_SUFFIX, HISTORY_PARTS_DIR, HISTORY_TRANSLATED_PARTS_DIR, MESH_EXTENSION,
    TRANSLATED_MARKER,
};
use ndarray::Array2;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tile_mesh::Mesh;

/// Which layer a solver record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    Base,
    Overhang,
}

impl LayerRole {
    fn file_prefix(self) -> &'static str {
        match self {
            LayerRole::Base => "",
            LayerRole::Overhang => "over_",
        }
    }
}

/// Placement stage of a recorded fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentStage {
    /// Merged cell fragment in the tile-local frame
    Part,
    /// The same fragment after world placement
    Translated,
}

/// Provenance of one placed fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FragmentTag {
    pub tile_index: usize,
    pub row: usize,
    pub col: usize,
    pub tile_name: String,
}

impl FragmentTag {
    pub fn new(tile_index: usize, row: usize, col: usize, tile_name: impl Into<String>) -> Self {
        Self {
            tile_index,
            row,
            col,
            tile_name: tile_name.into(),
        }
    }

    /// File stem for this fragment at `stage`.
    ///
    /// ```rust
    /// use terrain_gen::{FragmentStage, FragmentTag};
    ///
    /// let tag = FragmentTag::new(4, 1, 2, "wall_rot90");
    /// assert_eq!(tag.file_stem(FragmentStage::Part), "4_1_2_wall_rot90");
    /// assert_eq!(tag.file_stem(FragmentStage::Translated), "4_1_2_wall_rot90_translated");
    /// ```
    pub fn file_stem(&self, stage: FragmentStage) -> String {
        let stem = format!(
            "{}_{}_{}_{}",
            self.tile_index, self.row, self.col, self.tile_name
        );
        match stage {
            FragmentStage::Part => stem,
            FragmentStage::Translated => stem + TRANSLATED_MARKER,
        }
    }
}

/// Receiver of composition provenance.
pub trait HistorySink: Sync {
    /// Records a layer's raw solver output.
    fn record_layer(&self, role: LayerRole, layer: &LayerSolution) -> Result<(), HistoryError>;

    /// Records one cell fragment at a placement stage.
    fn record_fragment(
        &self,
        tag: &FragmentTag,
        stage: FragmentStage,
        mesh: &Mesh,
    ) -> Result<(), HistoryError>;
}

/// Writes history files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryHistory {
    root: PathBuf,
}

impl DirectoryHistory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// History root for a run: `<mesh_dir>/<mesh_name>_history`.
    pub fn for_run(mesh_dir: &Path, mesh_name: &str) -> Self {
        Self::new(mesh_dir.join(format!("{}{}", mesh_name, HISTORY_DIR_SUFFIX)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root and fragment directories.
    pub fn prepare(&self) -> Result<(), HistoryError> {
        for dir in [HISTORY_PARTS_DIR, HISTORY_TRANSLATED_PARTS_DIR] {
            let path = self.root.join(dir);
            fs::create_dir_all(&path).map_err(|source| HistoryError::Io { path, source })?;
        }
        Ok(())
    }

    /// Path a fragment is written to.
    pub fn fragment_path(&self, tag: &FragmentTag, stage: FragmentStage) -> PathBuf {
        let dir = match stage {
            FragmentStage::Part => HISTORY_PARTS_DIR,
            FragmentStage::Translated => HISTORY_TRANSLATED_PARTS_DIR,
        };
        self.root
            .join(dir)
            .join(tag.file_stem(stage))
            .with_extension(MESH_EXTENSION)
    }

    fn write_array(&self, name: &str, array: &Array2<usize>) -> Result<(), HistoryError> {
        let path = self.root.join(name);
        let file = File::create(&path).map_err(|source| HistoryError::Io { path, source })?;
        serde_json::to_writer(BufWriter::new(file), array)?;
        Ok(())
    }
}

impl HistorySink for DirectoryHistory {
    fn record_layer(&self, role: LayerRole, layer: &LayerSolution) -> Result<(), HistoryError> {
        let prefix = role.file_prefix();
        self.write_array(&format!("{}wave.json", prefix), &layer.grid)?;
        self.write_array(&format!("{}wave_order.json", prefix), &layer.order)
    }

    fn record_fragment(
        &self,
        tag: &FragmentTag,
        stage: FragmentStage,
        mesh: &Mesh,
    ) -> Result<(), HistoryError> {
        mesh.export_obj(&self.fragment_path(tag, stage))?;
        Ok(())
    }
}

/// In-memory sink that keeps tags only.
#[derive(Debug, Default)]
pub struct RecordingHistory {
    layers: Mutex<Vec<LayerRole>>,
    fragments: Mutex<Vec<(FragmentTag, FragmentStage)>>,
}

impl RecordingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers recorded so far, in call order.
    pub fn layers(&self) -> Vec<LayerRole> {
        self.layers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fragment tags recorded at `stage`, sorted by cell.
    pub fn fragments(&self, stage: FragmentStage) -> Vec<FragmentTag> {
        let mut tags: Vec<FragmentTag> = self
            .fragments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(_, s)| *s == stage)
            .map(|(tag, _)| tag.clone())
            .collect();
        tags.sort_by_key(|tag| (tag.row, tag.col));
        tags
    }
}

impl HistorySink for RecordingHistory {
    fn record_layer(&self, role: LayerRole, _layer: &LayerSolution) -> Result<(), HistoryError> {
        self.layers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(role);
        Ok(())
    }

    fn record_fragment(
        &self,
        tag: &FragmentTag,
        stage: FragmentStage,
        _mesh: &Mesh,
    ) -> Result<(), HistoryError> {
        self.fragments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((tag.clone(), stage));
        Ok(())
    }
}

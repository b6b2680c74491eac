//! Scene files: named cells with their face-to-face visibility.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sightline_visibility::{Face, FacePairBits, PackedVisibility};

use crate::error::ProbeError;

const BUILTIN_SCENE: &str = include_str!("../scenes/default.ron");

/// A list of cells to probe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub cells: Vec<CellFixture>,
}

/// One cell's visibility as geometry analysis would report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellFixture {
    pub name: String,
    /// Every face sees every face.
    #[serde(default)]
    pub full: bool,
    /// `(from, to)` pairs with a sight-line through the cell.
    #[serde(default)]
    pub visible: Vec<(Face, Face)>,
}

impl CellFixture {
    /// The cell's face-pair bitset.
    pub fn occlusion_data(&self) -> FacePairBits {
        let mut bits = FacePairBits::new();
        if self.full {
            bits.set_all();
        }
        for &(from, to) in &self.visible {
            bits.set_visible_through(from, to);
        }
        bits
    }

    pub fn packed(&self) -> PackedVisibility {
        PackedVisibility::extract(&self.occlusion_data())
    }
}

impl Scene {
    /// Reads a scene from a RON file.
    pub fn load(path: &Path) -> Result<Self, ProbeError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ProbeError::ReadScene {
            path: path.to_path_buf(),
            source,
        })?;
        let scene: Scene = ron::from_str(&contents).map_err(|source| ProbeError::ParseScene {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded {} cells from {}", scene.cells.len(), path.display());
        Ok(scene)
    }

    /// The sample scene shipped with the probe.
    pub fn builtin() -> Result<Self, ProbeError> {
        ron::from_str(BUILTIN_SCENE).map_err(|source| ProbeError::ParseScene {
            path: "<builtin>".into(),
            source,
        })
    }
}

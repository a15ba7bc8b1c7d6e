use crate::error::{CliError, Result};
use geoscore::core::materials::definition::MaterialDefinition;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSceneConfig {
    #[serde(rename = "length-unit")]
    pub length_unit: Option<String>,
    #[serde(rename = "materials-file")]
    pub materials_file: Option<PathBuf>,
    #[serde(default)]
    pub materials: Vec<MaterialDefinition>,
    pub world: Option<FileWorldConfig>,
    #[serde(default)]
    pub volumes: Vec<FileVolumeConfig>,
    #[serde(default)]
    pub placements: Vec<FilePlacementConfig>,
    #[serde(default)]
    pub scorers: Vec<FileScorerConfig>,
    pub scoring: Option<FileScoringConfig>,
}

impl FileSceneConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading scene description from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileWorldConfig {
    #[serde(rename = "half-extents")]
    pub half_extents: Option<[f64; 3]>,
    pub material: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileVolumeConfig {
    pub name: String,
    #[serde(rename = "half-extents")]
    pub half_extents: [f64; 3],
    pub material: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FilePlacementConfig {
    pub volume: String,
    pub mother: Option<String>,
    pub position: Option<[f64; 3]>,
    #[serde(rename = "rotation-deg")]
    pub rotation_deg: Option<[f64; 3]>,
    pub name: Option<String>,
    #[serde(rename = "copy-number")]
    pub copy_number: Option<i32>,
    #[serde(rename = "check-overlaps")]
    pub check_overlaps: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileScorerConfig {
    pub volume: String,
    pub quantities: Vec<String>,
    pub detector: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileScoringConfig {
    #[serde(rename = "verbose-level")]
    pub verbose_level: Option<u8>,
}

use geoscore::core::materials::definition::MaterialDefinition;
use nalgebra::Vector3;
use std::path::PathBuf;

/// A fully resolved scene description. All lengths are in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub materials_file: Option<PathBuf>,
    pub materials: Vec<MaterialDefinition>,
    pub world: WorldSpec,
    pub volumes: Vec<VolumeSpec>,
    pub placements: Vec<PlacementSpec>,
    pub scorers: Vec<ScorerSpec>,
    pub verbose_level: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldSpec {
    pub half_extents: Vector3<f64>,
    pub material: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSpec {
    pub name: String,
    pub half_extents: Vector3<f64>,
    pub material: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSpec {
    pub volume: String,
    pub mother: String,
    pub position: Vector3<f64>,
    /// Euler angles (roll, pitch, yaw) in degrees.
    pub rotation_deg: Vector3<f64>,
    pub name: Option<String>,
    pub copy_number: i32,
    pub check_overlaps: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScorerSpec {
    pub volume: String,
    pub quantities: Vec<String>,
    pub detector: Option<String>,
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("Placement of '{volume}' in '{mother}' overlaps sibling '{sibling}'")]
    Overlap {
        volume: String,
        sibling: String,
        mother: String,
    },

    #[error("Out-of-order scene construction: {0}")]
    Sequence(String),

    #[error("A volume named '{name}' already exists")]
    DuplicateVolume { name: String },

    #[error("Volume '{name}' has invalid half-extents ({x}, {y}, {z})")]
    InvalidDimensions { name: String, x: f64, y: f64, z: f64 },

    #[error("Placement of '{volume}' has a non-finite transform {transform}")]
    NonFiniteTransform { volume: String, transform: String },

    #[error("Volume '{volume}' references a material that is not in the registry")]
    UnknownMaterial { volume: String },

    #[error("Volume {0} does not belong to this scene")]
    UnknownVolume(String),
}

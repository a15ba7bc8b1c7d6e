use thiserror::Error;

use crate::core::geometry::error::GeometryError;
use crate::core::materials::error::MaterialError;
use crate::core::scoring::quantity::ParseQuantityError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Cannot bind a scorer: no volume named '{name}' in the scene")]
    UnknownVolume { name: String },

    #[error("Unsupported scoring quantity '{quantity}'")]
    UnsupportedQuantity { quantity: String },

    #[error("Volume '{name}' has daughters and cannot be a sensitive region")]
    NonLeafVolume { name: String },

    #[error("Scored region {0} is not registered with this manager")]
    UnknownRegion(String),

    #[error("Cannot score dose in '{name}': its mass could not be determined")]
    MassUnavailable { name: String },
}

impl From<ParseQuantityError> for ScoringError {
    fn from(err: ParseQuantityError) -> Self {
        ScoringError::UnsupportedQuantity { quantity: err.0 }
    }
}

/// Any failure of the two-phase construction workflow.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("Material definition failed: {source}")]
    Material {
        #[from]
        source: MaterialError,
    },

    #[error("Geometry construction failed: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },

    #[error("Sensitive detector construction failed: {source}")]
    Scoring {
        #[from]
        source: ScoringError,
    },
}

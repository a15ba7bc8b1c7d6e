use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("Element '{symbol}' is not in the standard periodic table")]
    UnknownElement { symbol: String },

    #[error("Material '{name}' has not been defined")]
    UnknownMaterial { name: String },

    #[error("Material '{name}' is already defined")]
    DuplicateName { name: String },

    #[error("Invalid composition for material '{name}': {reason}")]
    InvalidComposition { name: String, reason: String },

    #[error("Invalid density for material '{name}': {density}")]
    InvalidDensity { name: String, density: f64 },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

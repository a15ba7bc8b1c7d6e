use super::material::MaterialState;
use serde::Deserialize;

/// An element with an integer atom count inside a compound definition.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AtomCount {
    pub element: String,
    pub count: u32,
}

/// An element with a mass fraction inside a mixture definition.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MassFraction {
    pub element: String,
    pub fraction: f64,
}

/// A declarative material definition, as read from TOML material files.
///
/// Densities are given in g/cm³ and molar masses in g/mole; elements are
/// referenced by chemical symbol and resolved through the periodic table when
/// the definition is registered.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(
    tag = "type",
    rename_all = "kebab-case",
    rename_all_fields = "kebab-case",
    deny_unknown_fields
)]
pub enum MaterialDefinition {
    Simple {
        name: String,
        z: f64,
        molar_mass: f64,
        density: f64,
        state: Option<MaterialState>,
    },
    Compound {
        name: String,
        density: f64,
        components: Vec<AtomCount>,
        state: Option<MaterialState>,
    },
    Mixture {
        name: String,
        density: f64,
        components: Vec<MassFraction>,
        state: Option<MaterialState>,
    },
}

impl MaterialDefinition {
    pub fn name(&self) -> &str {
        match self {
            MaterialDefinition::Simple { name, .. }
            | MaterialDefinition::Compound { name, .. }
            | MaterialDefinition::Mixture { name, .. } => name,
        }
    }
}

/// The top-level layout of a material file: a `[[materials]]` array.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct MaterialFile {
    #[serde(default)]
    pub materials: Vec<MaterialDefinition>,
}

use super::ids::ElementId;
use crate::core::units::GAS_DENSITY_THRESHOLD;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The physical state of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialState {
    Solid,
    Liquid,
    Gas,
    #[default]
    Undefined,
}

impl MaterialState {
    /// Picks the state implied by a density when none was given explicitly.
    pub fn from_density(density: f64) -> Self {
        if density < GAS_DENSITY_THRESHOLD {
            MaterialState::Gas
        } else {
            MaterialState::Solid
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid material state string")]
pub struct ParseMaterialStateError;

impl FromStr for MaterialState {
    type Err = ParseMaterialStateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "solid" => Ok(MaterialState::Solid),
            "liquid" => Ok(MaterialState::Liquid),
            "gas" | "gaseous" => Ok(MaterialState::Gas),
            "undefined" => Ok(MaterialState::Undefined),
            _ => Err(ParseMaterialStateError),
        }
    }
}

impl fmt::Display for MaterialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MaterialState::Solid => "solid",
                MaterialState::Liquid => "liquid",
                MaterialState::Gas => "gas",
                MaterialState::Undefined => "undefined",
            }
        )
    }
}

/// How a material is composed from its constituents.
#[derive(Debug, Clone, PartialEq)]
pub enum Composition {
    /// A single effective atom, described by its atomic number and molar mass.
    Simple { z: f64, molar_mass: f64 },
    /// A molecule: elements with integer atom counts.
    Compound(Vec<(ElementId, u32)>),
    /// A mixture: elements with mass fractions summing to one.
    Mixture(Vec<(ElementId, f64)>),
}

/// A named substance with a density and an elemental composition.
///
/// Materials are only constructed by [`super::registry::MaterialRegistry`], which
/// guarantees unique names and validated compositions.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub(crate) name: String,
    pub(crate) density: f64,
    pub(crate) state: MaterialState,
    pub(crate) composition: Composition,
    pub(crate) mass_fractions: Vec<(ElementId, f64)>,
}

impl Material {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Density in internal units (g/mm³).
    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn state(&self) -> MaterialState {
        self.state
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Per-element mass fractions, normalized to one.
    ///
    /// Empty for [`Composition::Simple`] materials, which are not built from
    /// registry elements.
    pub fn mass_fractions(&self) -> &[(ElementId, f64)] {
        &self.mass_fractions
    }

    /// Number of elemental components.
    pub fn component_count(&self) -> usize {
        match &self.composition {
            Composition::Simple { .. } => 1,
            Composition::Compound(parts) => parts.len(),
            Composition::Mixture(parts) => parts.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{G_PER_CM3, MG_PER_CM3};

    #[test]
    fn state_from_density_separates_gases_from_condensed_matter() {
        assert_eq!(MaterialState::from_density(1.29 * MG_PER_CM3), MaterialState::Gas);
        assert_eq!(MaterialState::from_density(1.0 * G_PER_CM3), MaterialState::Solid);
    }

    #[test]
    fn state_parses_case_insensitively() {
        assert_eq!("Liquid".parse::<MaterialState>().unwrap(), MaterialState::Liquid);
        assert_eq!("GAS".parse::<MaterialState>().unwrap(), MaterialState::Gas);
        assert!("plasma".parse::<MaterialState>().is_err());
    }

    #[test]
    fn state_display_round_trips_through_from_str() {
        for state in [
            MaterialState::Solid,
            MaterialState::Liquid,
            MaterialState::Gas,
            MaterialState::Undefined,
        ] {
            assert_eq!(state.to_string().parse::<MaterialState>().unwrap(), state);
        }
    }

    #[test]
    fn component_count_matches_composition() {
        let simple = Material {
            name: "lArgon".to_string(),
            density: 1.39 * G_PER_CM3,
            state: MaterialState::Liquid,
            composition: Composition::Simple {
                z: 18.0,
                molar_mass: 39.95,
            },
            mass_fractions: Vec::new(),
        };
        assert_eq!(simple.component_count(), 1);
        assert!(simple.mass_fractions().is_empty());
    }
}

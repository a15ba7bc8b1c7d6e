use super::definition::{MaterialDefinition, MaterialFile};
use super::element::Element;
use super::error::MaterialError;
use super::ids::{ElementId, MaterialId};
use super::material::{Composition, Material, MaterialState};
use crate::core::units::{G_PER_CM3, G_PER_MOLE};
use slotmap::SlotMap;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Allowed deviation of a mixture's mass fractions from a sum of one.
pub const MIXTURE_FRACTION_TOLERANCE: f64 = 1e-6;

/// Process-wide store of elements and materials.
///
/// Definitions are append-only: once a name is registered it maps to the same
/// [`MaterialId`] for the lifetime of the registry, and no removal operation
/// exists. Elements are built lazily from the periodic table on first request.
///
/// An [`ElementId`] from another registry is only detected when its slot is
/// vacant here; ids are slotmap keys without an owner tag, so a matching slot
/// index and version resolves to this registry's element.
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    /// Primary storage for elements.
    elements: SlotMap<ElementId, Element>,
    /// Primary storage for materials.
    materials: SlotMap<MaterialId, Material>,
    /// Lookup map from chemical symbol to element.
    element_index: HashMap<String, ElementId>,
    /// Lookup map from material name to material.
    material_index: HashMap<String, MaterialId>,
    /// Materials in registration order.
    material_order: Vec<MaterialId>,
}

impl MaterialRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves an element by chemical symbol, building it on first use.
    ///
    /// Repeated calls with the same symbol return the same [`ElementId`].
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::UnknownElement`] if the symbol is not in the
    /// standard periodic table.
    pub fn find_or_build_element(&mut self, symbol: &str) -> Result<ElementId, MaterialError> {
        let symbol = symbol.trim();
        if let Some(&id) = self.element_index.get(symbol) {
            return Ok(id);
        }
        let element = Element::from_table(symbol).ok_or_else(|| MaterialError::UnknownElement {
            symbol: symbol.to_string(),
        })?;
        debug!("Building element '{}' (Z = {}).", element.symbol, element.z);
        let id = self.elements.insert(element);
        self.element_index.insert(symbol.to_string(), id);
        Ok(id)
    }

    /// Finds an already built element without touching the periodic table.
    pub fn find_element(&self, symbol: &str) -> Option<ElementId> {
        self.element_index.get(symbol.trim()).copied()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn elements_iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements.iter()
    }

    /// Returns a previously registered material by name.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::UnknownMaterial`] if no material with this name
    /// was ever registered.
    pub fn find_or_build_material(&self, name: &str) -> Result<MaterialId, MaterialError> {
        self.material_index
            .get(name)
            .copied()
            .ok_or_else(|| MaterialError::UnknownMaterial {
                name: name.to_string(),
            })
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn contains_material(&self, id: MaterialId) -> bool {
        self.materials.contains_key(id)
    }

    /// Iterates over all materials in registration order.
    pub fn materials_iter(&self) -> impl Iterator<Item = (MaterialId, &Material)> {
        self.material_order
            .iter()
            .filter_map(|&id| self.materials.get(id).map(|m| (id, m)))
    }

    pub fn material_count(&self) -> usize {
        self.material_order.len()
    }

    /// Registers a material made of a single effective atom.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique material name.
    /// * `z` - Effective atomic number.
    /// * `molar_mass` - Molar mass in internal units.
    /// * `density` - Density in internal units.
    pub fn define_simple_material(
        &mut self,
        name: &str,
        z: f64,
        molar_mass: f64,
        density: f64,
    ) -> Result<MaterialId, MaterialError> {
        self.insert_simple(name, z, molar_mass, density, None)
    }

    /// Registers a molecule built from integer atom counts.
    pub fn define_compound(
        &mut self,
        name: &str,
        density: f64,
        components: &[(ElementId, u32)],
    ) -> Result<MaterialId, MaterialError> {
        self.insert_compound(name, density, components, None)
    }

    /// Registers a mixture built from mass fractions.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::InvalidComposition`] if the list is empty, a
    /// fraction is negative or the fractions do not sum to one within
    /// [`MIXTURE_FRACTION_TOLERANCE`].
    pub fn define_mixture(
        &mut self,
        name: &str,
        density: f64,
        components: &[(ElementId, f64)],
    ) -> Result<MaterialId, MaterialError> {
        self.insert_mixture(name, density, components, None)
    }

    /// Registers a declarative definition, resolving element symbols on the way.
    pub fn define(&mut self, definition: &MaterialDefinition) -> Result<MaterialId, MaterialError> {
        match definition {
            MaterialDefinition::Simple {
                name,
                z,
                molar_mass,
                density,
                state,
            } => self.insert_simple(
                name,
                *z,
                molar_mass * G_PER_MOLE,
                density * G_PER_CM3,
                *state,
            ),
            MaterialDefinition::Compound {
                name,
                density,
                components,
                state,
            } => {
                self.check_name_is_free(name)?;
                let parts = components
                    .iter()
                    .map(|c| Ok((self.find_or_build_element(&c.element)?, c.count)))
                    .collect::<Result<Vec<_>, MaterialError>>()?;
                self.insert_compound(name, density * G_PER_CM3, &parts, *state)
            }
            MaterialDefinition::Mixture {
                name,
                density,
                components,
                state,
            } => {
                self.check_name_is_free(name)?;
                let parts = components
                    .iter()
                    .map(|c| Ok((self.find_or_build_element(&c.element)?, c.fraction)))
                    .collect::<Result<Vec<_>, MaterialError>>()?;
                self.insert_mixture(name, density * G_PER_CM3, &parts, *state)
            }
        }
    }

    /// Registers every definition found in a TOML material file, in file order.
    ///
    /// Registration stops at the first failing definition; materials registered
    /// before it stay in the registry.
    pub fn load_definitions(&mut self, path: &Path) -> Result<Vec<MaterialId>, MaterialError> {
        let content = std::fs::read_to_string(path).map_err(|e| MaterialError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: MaterialFile = toml::from_str(&content).map_err(|e| MaterialError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        debug!(
            "Registering {} material definition(s) from {:?}.",
            file.materials.len(),
            path
        );
        file.materials.iter().map(|def| self.define(def)).collect()
    }

    fn insert_simple(
        &mut self,
        name: &str,
        z: f64,
        molar_mass: f64,
        density: f64,
        state: Option<MaterialState>,
    ) -> Result<MaterialId, MaterialError> {
        self.check_name_is_free(name)?;
        check_density(name, density)?;
        if !(z.is_finite() && z >= 1.0) {
            return Err(invalid(name, format!("atomic number {} is below 1", z)));
        }
        if !(molar_mass.is_finite() && molar_mass > 0.0) {
            return Err(invalid(name, format!("molar mass {} is not positive", molar_mass)));
        }
        Ok(self.insert(
            name,
            density,
            state,
            Composition::Simple { z, molar_mass },
            Vec::new(),
        ))
    }

    fn insert_compound(
        &mut self,
        name: &str,
        density: f64,
        components: &[(ElementId, u32)],
        state: Option<MaterialState>,
    ) -> Result<MaterialId, MaterialError> {
        self.check_name_is_free(name)?;
        check_density(name, density)?;
        if components.is_empty() {
            return Err(invalid(name, "a compound needs at least one element".into()));
        }

        let mut weighted = Vec::with_capacity(components.len());
        for &(element_id, count) in components {
            if count == 0 {
                return Err(invalid(name, "atom counts must be positive".into()));
            }
            let element = self.require_element(name, element_id)?;
            weighted.push((element_id, count as f64 * element.molar_mass));
        }
        let mass_fractions = normalize(merge_duplicates(weighted));

        Ok(self.insert(
            name,
            density,
            state,
            Composition::Compound(components.to_vec()),
            mass_fractions,
        ))
    }

    fn insert_mixture(
        &mut self,
        name: &str,
        density: f64,
        components: &[(ElementId, f64)],
        state: Option<MaterialState>,
    ) -> Result<MaterialId, MaterialError> {
        self.check_name_is_free(name)?;
        check_density(name, density)?;
        if components.is_empty() {
            return Err(invalid(name, "a mixture needs at least one element".into()));
        }

        for &(element_id, fraction) in components {
            if !(fraction.is_finite() && fraction >= 0.0) {
                return Err(invalid(
                    name,
                    format!("mass fraction {} is not a non-negative number", fraction),
                ));
            }
            self.require_element(name, element_id)?;
        }
        let sum: f64 = components.iter().map(|&(_, f)| f).sum();
        if (sum - 1.0).abs() > MIXTURE_FRACTION_TOLERANCE {
            return Err(invalid(
                name,
                format!("mass fractions sum to {} instead of 1", sum),
            ));
        }
        let mass_fractions = normalize(merge_duplicates(components.to_vec()));

        Ok(self.insert(
            name,
            density,
            state,
            Composition::Mixture(components.to_vec()),
            mass_fractions,
        ))
    }

    fn insert(
        &mut self,
        name: &str,
        density: f64,
        state: Option<MaterialState>,
        composition: Composition,
        mass_fractions: Vec<(ElementId, f64)>,
    ) -> MaterialId {
        let state = state.unwrap_or_else(|| MaterialState::from_density(density));
        let id = self.materials.insert(Material {
            name: name.to_string(),
            density,
            state,
            composition,
            mass_fractions,
        });
        self.material_index.insert(name.to_string(), id);
        self.material_order.push(id);
        debug!(
            "Registered material '{}' ({}, {:.6} g/cm3).",
            name,
            state,
            density / G_PER_CM3
        );
        id
    }

    fn check_name_is_free(&self, name: &str) -> Result<(), MaterialError> {
        if self.material_index.contains_key(name) {
            return Err(MaterialError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn require_element(&self, material: &str, id: ElementId) -> Result<&Element, MaterialError> {
        self.elements.get(id).ok_or_else(|| {
            invalid(
                material,
                format!("element {:?} does not belong to this registry", id),
            )
        })
    }
}

fn invalid(name: &str, reason: String) -> MaterialError {
    MaterialError::InvalidComposition {
        name: name.to_string(),
        reason,
    }
}

fn check_density(name: &str, density: f64) -> Result<(), MaterialError> {
    if density.is_finite() && density > 0.0 {
        Ok(())
    } else {
        Err(MaterialError::InvalidDensity {
            name: name.to_string(),
            density,
        })
    }
}

// Sums repeated elements, keeping the position of the first occurrence.
fn merge_duplicates(parts: Vec<(ElementId, f64)>) -> Vec<(ElementId, f64)> {
    let mut merged: Vec<(ElementId, f64)> = Vec::with_capacity(parts.len());
    for (id, weight) in parts {
        match merged.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, total)) => *total += weight,
            None => merged.push((id, weight)),
        }
    }
    merged
}

fn normalize(parts: Vec<(ElementId, f64)>) -> Vec<(ElementId, f64)> {
    let total: f64 = parts.iter().map(|&(_, w)| w).sum();
    if total <= 0.0 {
        return parts;
    }
    parts.into_iter().map(|(id, w)| (id, w / total)).collect()
}

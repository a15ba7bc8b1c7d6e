use super::ids::PlacementId;
use super::solid::BoxSolid;
use crate::core::materials::ids::MaterialId;
use crate::core::materials::registry::MaterialRegistry;

/// A named pairing of a solid with a material, plus its ordered daughters.
///
/// The same logical volume may be placed several times; each placement is a
/// separate [`super::placement::Placement`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalVolume {
    pub name: String,
    pub solid: BoxSolid,
    pub material: MaterialId,
    pub(crate) daughters: Vec<PlacementId>,
}

impl LogicalVolume {
    pub(crate) fn new(name: &str, solid: BoxSolid, material: MaterialId) -> Self {
        Self {
            name: name.to_string(),
            solid,
            material,
            daughters: Vec::new(),
        }
    }

    /// Daughter placements in insertion order.
    pub fn daughters(&self) -> &[PlacementId] {
        &self.daughters
    }

    pub fn is_leaf(&self) -> bool {
        self.daughters.is_empty()
    }

    /// Mass of the solid filled with its material, in internal units (g).
    ///
    /// Daughters are not subtracted. Returns `None` if the material is not in
    /// `materials`.
    pub fn mass(&self, materials: &MaterialRegistry) -> Option<f64> {
        materials
            .material(self.material)
            .map(|m| m.density() * self.solid.cubic_volume())
    }
}

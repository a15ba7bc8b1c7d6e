use super::error::GeometryError;
use super::ids::{PlacementId, VolumeId};
use super::placement::{Placement, PlacementRequest};
use super::solid::BoxSolid;
use super::volume::LogicalVolume;
use crate::core::materials::ids::MaterialId;
use crate::core::materials::registry::MaterialRegistry;
use nalgebra::Vector3;
use slotmap::SlotMap;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Name given to the root volume and its placement.
pub const WORLD_NAME: &str = "World";

/// Penetration depth (mm) below which touching siblings are not reported as overlapping.
pub const OVERLAP_TOLERANCE: f64 = 1e-9;

/// A tree of nested volumes rooted at a single world volume.
///
/// A `Scene` obtained from [`SceneBuilder::into_scene`] is sealed and
/// immutable; it is what gets handed to the transport engine.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Primary storage for logical volumes.
    volumes: SlotMap<VolumeId, LogicalVolume>,
    /// Primary storage for placements, including the world placement.
    placements: SlotMap<PlacementId, Placement>,
    /// Lookup map from logical volume name to volume.
    name_index: HashMap<String, VolumeId>,
    /// Volumes in creation order.
    volume_order: Vec<VolumeId>,
    world: Option<VolumeId>,
    world_placement: Option<PlacementId>,
}

impl Scene {
    pub fn world(&self) -> Option<VolumeId> {
        self.world
    }

    pub fn world_placement(&self) -> Option<PlacementId> {
        self.world_placement
    }

    pub fn volume(&self, id: VolumeId) -> Option<&LogicalVolume> {
        self.volumes.get(id)
    }

    pub fn placement(&self, id: PlacementId) -> Option<&Placement> {
        self.placements.get(id)
    }

    /// Finds a logical volume by its name.
    pub fn find_volume(&self, name: &str) -> Option<VolumeId> {
        self.name_index.get(name).copied()
    }

    /// Iterates over all logical volumes in creation order.
    pub fn volumes_iter(&self) -> impl Iterator<Item = (VolumeId, &LogicalVolume)> {
        self.volume_order
            .iter()
            .filter_map(|&id| self.volumes.get(id).map(|v| (id, v)))
    }

    pub fn placements_iter(&self) -> impl Iterator<Item = (PlacementId, &Placement)> {
        self.placements.iter()
    }

    pub fn volume_count(&self) -> usize {
        self.volume_order.len()
    }

    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Daughter placements of a volume in insertion order.
    pub fn daughters(&self, id: VolumeId) -> &[PlacementId] {
        self.volumes
            .get(id)
            .map(|v| v.daughters())
            .unwrap_or(&[])
    }

    pub fn is_leaf(&self, id: VolumeId) -> bool {
        self.volumes.get(id).is_some_and(|v| v.is_leaf())
    }

    /// Returns `true` if `id` has at least one placement (the world counts as placed).
    pub fn is_placed(&self, id: VolumeId) -> bool {
        self.placements.values().any(|p| p.volume == id)
    }

    // Whether `target` can be reached by walking down the daughters of `root`.
    fn subtree_contains(&self, root: VolumeId, target: VolumeId) -> bool {
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            for &pid in self.daughters(current) {
                if let Some(p) = self.placements.get(pid) {
                    stack.push(p.volume);
                }
            }
        }
        false
    }
}

/// Assembles a [`Scene`] against an injected [`MaterialRegistry`].
///
/// Construction happens in one pass: create the world, create boxes, place
/// them, then [`seal`](SceneBuilder::seal). After sealing, every mutating call
/// fails with [`GeometryError::Sequence`].
///
/// Ids are plain slotmap keys and carry no owner tag. A [`VolumeId`] or
/// [`MaterialId`] minted by another builder or registry is only rejected when
/// its slot is empty here; one whose slot index and version happen to match a
/// live entry is indistinguishable from a local id.
pub struct SceneBuilder<'a> {
    scene: Scene,
    materials: &'a MaterialRegistry,
    sealed: bool,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(materials: &'a MaterialRegistry) -> Self {
        Self {
            scene: Scene::default(),
            materials,
            sealed: false,
        }
    }

    pub fn materials(&self) -> &'a MaterialRegistry {
        self.materials
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn find_volume(&self, name: &str) -> Option<VolumeId> {
        self.scene.find_volume(name)
    }

    /// Creates the root volume, named [`WORLD_NAME`], together with its placement.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Sequence`] if a world already exists or the
    /// builder is sealed.
    pub fn create_world(
        &mut self,
        half_extents: Vector3<f64>,
        material: MaterialId,
    ) -> Result<VolumeId, GeometryError> {
        self.ensure_open("create the world")?;
        if self.scene.world.is_some() {
            return Err(GeometryError::Sequence(
                "a world volume already exists in this scene".to_string(),
            ));
        }

        let world = self.insert_volume(WORLD_NAME, half_extents, material)?;
        let placement = self.scene.placements.insert(Placement {
            name: WORLD_NAME.to_string(),
            volume: world,
            mother: None,
            transform: Default::default(),
            copy_number: 0,
            check_overlaps: false,
        });
        self.scene.world = Some(world);
        self.scene.world_placement = Some(placement);
        debug!("Created world volume {:?} mm.", half_extents.as_slice());
        Ok(world)
    }

    /// Defines a named box volume that is not placed yet.
    pub fn create_box(
        &mut self,
        name: &str,
        half_extents: Vector3<f64>,
        material: MaterialId,
    ) -> Result<VolumeId, GeometryError> {
        self.ensure_open("create a volume")?;
        let id = self.insert_volume(name, half_extents, material)?;
        debug!("Created box volume '{}'.", name);
        Ok(id)
    }

    /// Places `child` inside `mother`, appending it to the mother's daughters.
    ///
    /// Containment of the child within the mother is not verified.
    ///
    /// # Errors
    ///
    /// * [`GeometryError::Sequence`] - the builder is sealed, `child` is the
    ///   world, or the placement would make a volume contain itself.
    /// * [`GeometryError::UnknownVolume`] - either id is not part of this scene.
    /// * [`GeometryError::NonFiniteTransform`] - the translation or rotation
    ///   holds a NaN or infinite component.
    /// * [`GeometryError::Overlap`] - overlap checking was requested and the
    ///   child's bounding box intersects a sibling's.
    pub fn place(
        &mut self,
        child: VolumeId,
        mother: VolumeId,
        request: PlacementRequest,
    ) -> Result<PlacementId, GeometryError> {
        self.ensure_open("place a volume")?;
        let child_volume = self
            .scene
            .volumes
            .get(child)
            .ok_or_else(|| GeometryError::UnknownVolume(format!("{:?}", child)))?;
        let mother_volume = self
            .scene
            .volumes
            .get(mother)
            .ok_or_else(|| GeometryError::UnknownVolume(format!("{:?}", mother)))?;

        if self.scene.world == Some(child) {
            return Err(GeometryError::Sequence(
                "the world volume cannot be placed inside another volume".to_string(),
            ));
        }
        if self.scene.subtree_contains(child, mother) {
            return Err(GeometryError::Sequence(format!(
                "placing '{}' in '{}' would make a volume contain itself",
                child_volume.name, mother_volume.name
            )));
        }

        if !request.transform.is_finite() {
            return Err(GeometryError::NonFiniteTransform {
                volume: child_volume.name.clone(),
                transform: request.transform.to_string(),
            });
        }

        if request.check_overlaps {
            self.check_overlaps(child_volume, mother_volume, &request)?;
        }

        let name = request.name.unwrap_or_else(|| child_volume.name.clone());
        trace!(
            "Placing '{}' ({}#{}) in '{}' at {}.",
            child_volume.name, name, request.copy_number, mother_volume.name, request.transform
        );
        let placement = self.scene.placements.insert(Placement {
            name,
            volume: child,
            mother: Some(mother),
            transform: request.transform,
            copy_number: request.copy_number,
            check_overlaps: request.check_overlaps,
        });
        if let Some(mother_volume) = self.scene.volumes.get_mut(mother) {
            mother_volume.daughters.push(placement);
        }
        Ok(placement)
    }

    /// Freezes the tree and returns the world placement.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Sequence`] if no world was created or the
    /// builder is already sealed.
    pub fn seal(&mut self) -> Result<PlacementId, GeometryError> {
        self.ensure_open("seal the scene")?;
        let world_placement = self.scene.world_placement.ok_or_else(|| {
            GeometryError::Sequence("cannot seal a scene without a world volume".to_string())
        })?;
        self.sealed = true;
        debug!(
            "Sealed scene with {} volume(s) and {} placement(s).",
            self.scene.volume_count(),
            self.scene.placement_count()
        );
        Ok(world_placement)
    }

    /// Hands out the sealed scene.
    pub fn into_scene(self) -> Result<Scene, GeometryError> {
        if !self.sealed {
            return Err(GeometryError::Sequence(
                "the scene must be sealed before it is handed out".to_string(),
            ));
        }
        Ok(self.scene)
    }

    fn ensure_open(&self, action: &str) -> Result<(), GeometryError> {
        if self.sealed {
            return Err(GeometryError::Sequence(format!(
                "cannot {} after the scene has been sealed",
                action
            )));
        }
        Ok(())
    }

    fn insert_volume(
        &mut self,
        name: &str,
        half_extents: Vector3<f64>,
        material: MaterialId,
    ) -> Result<VolumeId, GeometryError> {
        if self.scene.name_index.contains_key(name) {
            return Err(GeometryError::DuplicateVolume {
                name: name.to_string(),
            });
        }
        let solid = BoxSolid::new(half_extents);
        if !solid.is_valid() {
            return Err(GeometryError::InvalidDimensions {
                name: name.to_string(),
                x: half_extents.x,
                y: half_extents.y,
                z: half_extents.z,
            });
        }
        if !self.materials.contains_material(material) {
            return Err(GeometryError::UnknownMaterial {
                volume: name.to_string(),
            });
        }

        let id = self
            .scene
            .volumes
            .insert(LogicalVolume::new(name, solid, material));
        self.scene.name_index.insert(name.to_string(), id);
        self.scene.volume_order.push(id);
        Ok(id)
    }

    fn check_overlaps(
        &self,
        child: &LogicalVolume,
        mother: &LogicalVolume,
        request: &PlacementRequest,
    ) -> Result<(), GeometryError> {
        let candidate = child.solid.bounding_box(&request.transform);
        for &sibling_id in mother.daughters() {
            let Some(sibling) = self.scene.placements.get(sibling_id) else {
                continue;
            };
            let Some(sibling_volume) = self.scene.volumes.get(sibling.volume) else {
                continue;
            };
            let occupied = sibling_volume.solid.bounding_box(&sibling.transform);
            if candidate.intersects(&occupied, OVERLAP_TOLERANCE) {
                return Err(GeometryError::Overlap {
                    volume: child.name.clone(),
                    sibling: sibling.name.clone(),
                    mother: mother.name.clone(),
                });
            }
        }
        Ok(())
    }
}

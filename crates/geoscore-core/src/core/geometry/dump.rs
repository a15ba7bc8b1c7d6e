use super::ids::PlacementId;
use super::scene::Scene;
use super::volume::LogicalVolume;
use crate::core::materials::registry::MaterialRegistry;
use std::fmt;

/// Deterministic, indented text rendering of a scene.
///
/// Placements are written depth-first in insertion order, one per line, as
/// `name#copy [logical] box hx x hy x hz mm, material, at (x, y, z)` with
/// half-extents and positions in millimetres. Volumes that were created but
/// never placed are listed at the end.
pub struct SceneDump<'a> {
    scene: &'a Scene,
    materials: &'a MaterialRegistry,
}

impl Scene {
    pub fn dump<'a>(&'a self, materials: &'a MaterialRegistry) -> SceneDump<'a> {
        SceneDump {
            scene: self,
            materials,
        }
    }
}

impl SceneDump<'_> {
    fn write_placement(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: PlacementId,
        depth: usize,
    ) -> fmt::Result {
        let Some(placement) = self.scene.placement(id) else {
            return Ok(());
        };
        let Some(volume) = self.scene.volume(placement.volume) else {
            return Ok(());
        };
        writeln!(
            f,
            "{:indent$}{}#{} [{}] {}, at {}",
            "",
            placement.name,
            placement.copy_number,
            volume.name,
            self.describe(volume),
            placement.transform,
            indent = depth * 2
        )?;
        for &daughter in volume.daughters() {
            self.write_placement(f, daughter, depth + 1)?;
        }
        Ok(())
    }

    fn describe(&self, volume: &LogicalVolume) -> String {
        let h = &volume.solid.half_extents;
        let material = self
            .materials
            .material(volume.material)
            .map(|m| m.name())
            .unwrap_or("<unknown material>");
        format!("box {} x {} x {} mm, {}", h.x, h.y, h.z, material)
    }
}

impl fmt::Display for SceneDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(world) = self.scene.world_placement() {
            self.write_placement(f, world, 0)?;
        }
        for (id, volume) in self.scene.volumes_iter() {
            if !self.scene.is_placed(id) {
                writeln!(f, "unplaced [{}] {}", volume.name, self.describe(volume))?;
            }
        }
        Ok(())
    }
}

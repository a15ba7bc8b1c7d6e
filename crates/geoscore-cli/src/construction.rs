use crate::config::SceneConfig;
use geoscore::core::geometry::error::GeometryError;
use geoscore::core::geometry::ids::VolumeId;
use geoscore::core::geometry::placement::PlacementRequest;
use geoscore::core::geometry::scene::{Scene, SceneBuilder};
use geoscore::core::geometry::transform::Transform3D;
use geoscore::core::materials::registry::MaterialRegistry;
use geoscore::engine::error::ConstructionError;
use geoscore::engine::sensitive::{BindingOptions, SensitiveDetectorManager};
use geoscore::workflows::construct::DetectorConstruction;
use tracing::{debug, info};

impl DetectorConstruction for SceneConfig {
    fn define_materials(&self, registry: &mut MaterialRegistry) -> Result<(), ConstructionError> {
        if let Some(path) = &self.materials_file {
            let ids = registry.load_definitions(path)?;
            info!("Loaded {} material(s) from {:?}.", ids.len(), path);
        }
        for definition in &self.materials {
            registry.define(definition)?;
        }
        Ok(())
    }

    fn construct(&self, builder: &mut SceneBuilder<'_>) -> Result<(), ConstructionError> {
        let materials = builder.materials();

        let world_material = materials.find_or_build_material(&self.world.material)?;
        builder.create_world(self.world.half_extents, world_material)?;

        for volume in &self.volumes {
            let material = materials.find_or_build_material(&volume.material)?;
            builder.create_box(&volume.name, volume.half_extents, material)?;
        }

        for placement in &self.placements {
            let child = lookup_volume(builder, &placement.volume)?;
            let mother = lookup_volume(builder, &placement.mother)?;
            let mut request = PlacementRequest::new()
                .transform(Transform3D::from_euler_degrees(
                    placement.rotation_deg,
                    placement.position,
                ))
                .copy_number(placement.copy_number)
                .check_overlaps(placement.check_overlaps);
            if let Some(name) = &placement.name {
                request = request.named(name);
            }
            builder.place(child, mother, request)?;
            debug!("Placed '{}' in '{}'.", placement.volume, placement.mother);
        }
        Ok(())
    }

    fn construct_sensitive_detectors(
        &self,
        scene: &Scene,
        materials: &MaterialRegistry,
        manager: &mut SensitiveDetectorManager,
    ) -> Result<(), ConstructionError> {
        for scorer in &self.scorers {
            let options = BindingOptions {
                detector: scorer.detector.clone(),
                scorer: None,
            };
            for quantity in &scorer.quantities {
                manager.register_named(scene, materials, &scorer.volume, quantity, &options)?;
            }
        }
        Ok(())
    }

    fn verbose_level(&self) -> u8 {
        self.verbose_level
    }
}

fn lookup_volume(builder: &SceneBuilder<'_>, name: &str) -> Result<VolumeId, GeometryError> {
    builder
        .find_volume(name)
        .ok_or_else(|| GeometryError::UnknownVolume(format!("'{}'", name)))
}

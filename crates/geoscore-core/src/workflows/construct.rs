use crate::core::geometry::scene::{Scene, SceneBuilder};
use crate::core::materials::registry::MaterialRegistry;
use crate::engine::error::ConstructionError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::sensitive::SensitiveDetectorManager;
use tracing::{info, instrument};

/// A detector description, split into the phases of construction.
///
/// [`run`] calls the phases in order: materials, geometry, then (after the
/// scene is sealed) sensitive detectors.
pub trait DetectorConstruction {
    /// Registers every material the geometry needs.
    fn define_materials(&self, registry: &mut MaterialRegistry) -> Result<(), ConstructionError>;

    /// Builds the volume tree. The scene is sealed after this returns.
    fn construct(&self, builder: &mut SceneBuilder<'_>) -> Result<(), ConstructionError>;

    /// Attaches scorers to named volumes of the sealed scene.
    fn construct_sensitive_detectors(
        &self,
        scene: &Scene,
        materials: &MaterialRegistry,
        manager: &mut SensitiveDetectorManager,
    ) -> Result<(), ConstructionError>;

    /// Verbosity handed to the sensitive-detector manager.
    fn verbose_level(&self) -> u8 {
        1
    }
}

/// Everything a construction produces.
#[derive(Debug)]
pub struct ConstructedDetector {
    pub materials: MaterialRegistry,
    pub scene: Scene,
    pub detectors: SensitiveDetectorManager,
}

#[instrument(skip_all, name = "construction_workflow")]
pub fn run(
    construction: &impl DetectorConstruction,
    reporter: &ProgressReporter,
) -> Result<ConstructedDetector, ConstructionError> {
    let mut materials = MaterialRegistry::new();
    reporter.phase("Materials", || construction.define_materials(&mut materials))?;
    info!("Defined {} material(s).", materials.material_count());

    let scene = reporter.phase("Geometry", || -> Result<Scene, ConstructionError> {
        let mut builder = SceneBuilder::new(&materials);
        construction.construct(&mut builder)?;
        builder.seal()?;
        Ok(builder.into_scene()?)
    })?;
    info!(
        "Built scene with {} volume(s) and {} placement(s).",
        scene.volume_count(),
        scene.placement_count()
    );

    let detectors = reporter.phase(
        "Sensitive Detectors",
        || -> Result<SensitiveDetectorManager, ConstructionError> {
            let mut manager =
                SensitiveDetectorManager::with_verbose_level(construction.verbose_level());
            construction.construct_sensitive_detectors(&scene, &materials, &mut manager)?;
            Ok(manager)
        },
    )?;
    reporter.report(Progress::Message(format!(
        "{} scored region(s) attached",
        detectors.region_count()
    )));
    info!("Attached {} scored region(s).", detectors.region_count());

    Ok(ConstructedDetector {
        materials,
        scene,
        detectors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::error::GeometryError;
    use crate::core::geometry::placement::PlacementRequest;
    use crate::core::scoring::quantity::QuantityKind;
    use crate::core::units::{G_PER_CM3, G_PER_MOLE, METER};
    use crate::engine::error::ScoringError;
    use nalgebra::Vector3;
    use std::sync::Mutex;

    struct SingleBox {
        seal_early: bool,
        scored_volume: &'static str,
    }

    impl DetectorConstruction for SingleBox {
        fn define_materials(
            &self,
            registry: &mut MaterialRegistry,
        ) -> Result<(), ConstructionError> {
            registry.define_simple_material("Iron", 26.0, 55.845 * G_PER_MOLE, 7.874 * G_PER_CM3)?;
            Ok(())
        }

        fn construct(&self, builder: &mut SceneBuilder<'_>) -> Result<(), ConstructionError> {
            let iron = builder.materials().find_or_build_material("Iron")?;
            let world = builder.create_world(Vector3::repeat(METER), iron)?;
            let block = builder.create_box("block", Vector3::repeat(0.1 * METER), iron)?;
            if self.seal_early {
                builder.seal()?;
            }
            builder.place(block, world, PlacementRequest::new())?;
            Ok(())
        }

        fn construct_sensitive_detectors(
            &self,
            scene: &Scene,
            materials: &MaterialRegistry,
            manager: &mut SensitiveDetectorManager,
        ) -> Result<(), ConstructionError> {
            manager.register_sensitive_region(
                scene,
                materials,
                self.scored_volume,
                QuantityKind::EnergyDeposit,
            )?;
            Ok(())
        }
    }

    #[test]
    fn run_executes_all_phases_in_order() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|e| {
            if let Progress::PhaseStart { name } = e {
                events.lock().unwrap().push(name);
            }
        }));
        let construction = SingleBox {
            seal_early: false,
            scored_volume: "block",
        };

        let detector = run(&construction, &reporter).unwrap();
        drop(reporter);

        assert_eq!(detector.scene.volume_count(), 2);
        assert_eq!(detector.detectors.region_count(), 1);
        assert_eq!(detector.materials.material_count(), 1);
        assert_eq!(
            events.into_inner().unwrap(),
            vec!["Materials", "Geometry", "Sensitive Detectors"]
        );
    }

    #[test]
    fn geometry_errors_abort_the_run() {
        let construction = SingleBox {
            seal_early: true,
            scored_volume: "block",
        };
        let result = run(&construction, &ProgressReporter::new());
        assert!(matches!(
            result,
            Err(ConstructionError::Geometry {
                source: GeometryError::Sequence(_)
            })
        ));
    }

    #[test]
    fn scoring_errors_abort_the_run() {
        let construction = SingleBox {
            seal_early: false,
            scored_volume: "missing",
        };
        let result = run(&construction, &ProgressReporter::new());
        assert!(matches!(
            result,
            Err(ConstructionError::Scoring {
                source: ScoringError::UnknownVolume { .. }
            })
        ));
    }
}

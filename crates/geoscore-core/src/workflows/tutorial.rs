use nalgebra::Vector3;

use super::construct::DetectorConstruction;
use crate::core::geometry::placement::PlacementRequest;
use crate::core::geometry::scene::{Scene, SceneBuilder};
use crate::core::materials::registry::MaterialRegistry;
use crate::core::scoring::quantity::QuantityKind;
use crate::core::units::{G_PER_CM3, G_PER_MOLE, METER, MG_PER_CM3, PERCENT};
use crate::engine::error::ConstructionError;
use crate::engine::sensitive::{BindingOptions, SensitiveDetectorManager};

pub const ABSORBER_VOLUME: &str = "testBox";
pub const PLATE_VOLUME: &str = "plateLV";
pub const PLATE_PLACEMENT: &str = "plate";
pub const PLATE_DETECTOR: &str = "plate";

/// Water plate dosimetry behind a liquid-argon absorber, all in an air world.
///
/// ```text
///  World (Air, half-extent w)
///  ├── testBox (lArgon, half-extent w/2, at the origin)
///  └── plate   (Water, half-extents 0.1 m x w x w, at x = 0.9 w)
/// ```
///
/// The plate carries a dose scorer `plate/dose`. Lengths are internal units
/// (mm). Both placements request overlap checking, so an offset that pushes
/// the plate into the absorber fails construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateDosimetry {
    pub world_half_extent: f64,
    pub plate_half_thickness: f64,
    /// Plate centre along x, as a fraction of the world half-extent.
    pub plate_offset_fraction: f64,
    pub verbose_level: u8,
}

impl Default for PlateDosimetry {
    fn default() -> Self {
        Self {
            world_half_extent: 1.0 * METER,
            plate_half_thickness: 0.1 * METER,
            plate_offset_fraction: 0.9,
            verbose_level: 1,
        }
    }
}

impl PlateDosimetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_world_half_extent(mut self, half_extent: f64) -> Self {
        self.world_half_extent = half_extent;
        self
    }

    pub fn with_plate_offset_fraction(mut self, fraction: f64) -> Self {
        self.plate_offset_fraction = fraction;
        self
    }

    pub fn plate_position(&self) -> Vector3<f64> {
        Vector3::new(self.plate_offset_fraction * self.world_half_extent, 0.0, 0.0)
    }
}

impl DetectorConstruction for PlateDosimetry {
    fn define_materials(&self, registry: &mut MaterialRegistry) -> Result<(), ConstructionError> {
        registry.define_simple_material("lArgon", 18.0, 39.95 * G_PER_MOLE, 1.390 * G_PER_CM3)?;

        let h = registry.find_or_build_element("H")?;
        let o = registry.find_or_build_element("O")?;
        registry.define_compound("Water", 1.0 * G_PER_CM3, &[(h, 2), (o, 1)])?;

        let n = registry.find_or_build_element("N")?;
        registry.define_mixture(
            "Air",
            1.290 * MG_PER_CM3,
            &[(n, 70.0 * PERCENT), (o, 30.0 * PERCENT)],
        )?;
        Ok(())
    }

    fn construct(&self, builder: &mut SceneBuilder<'_>) -> Result<(), ConstructionError> {
        let materials = builder.materials();
        let air = materials.find_or_build_material("Air")?;
        let argon = materials.find_or_build_material("lArgon")?;
        let water = materials.find_or_build_material("Water")?;

        let w = self.world_half_extent;
        let world = builder.create_world(Vector3::repeat(w), air)?;

        let absorber = builder.create_box(ABSORBER_VOLUME, Vector3::repeat(0.5 * w), argon)?;
        builder.place(absorber, world, PlacementRequest::new().check_overlaps(true))?;

        let plate = builder.create_box(
            PLATE_VOLUME,
            Vector3::new(self.plate_half_thickness, w, w),
            water,
        )?;
        builder.place(
            plate,
            world,
            PlacementRequest::at(self.plate_position())
                .named(PLATE_PLACEMENT)
                .check_overlaps(true),
        )?;
        Ok(())
    }

    fn construct_sensitive_detectors(
        &self,
        scene: &Scene,
        materials: &MaterialRegistry,
        manager: &mut SensitiveDetectorManager,
    ) -> Result<(), ConstructionError> {
        manager.register_with_options(
            scene,
            materials,
            PLATE_VOLUME,
            QuantityKind::DoseDeposit,
            &BindingOptions::default().detector(PLATE_DETECTOR),
        )?;
        Ok(())
    }

    fn verbose_level(&self) -> u8 {
        self.verbose_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::error::GeometryError;
    use crate::core::materials::material::{Composition, MaterialState};
    use crate::engine::progress::ProgressReporter;
    use crate::workflows::construct::run;

    #[test]
    fn default_layout_matches_the_one_metre_world() {
        let detector = run(&PlateDosimetry::new(), &ProgressReporter::new()).unwrap();
        let scene = &detector.scene;

        assert_eq!(scene.volume_count(), 3);
        let world = scene.world().unwrap();
        let names: Vec<_> = scene
            .daughters(world)
            .iter()
            .map(|&p| scene.placement(p).unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec![ABSORBER_VOLUME, PLATE_PLACEMENT]);

        let plate_placement = scene.placement(scene.daughters(world)[1]).unwrap();
        assert_eq!(
            plate_placement.transform.translation_vector(),
            Vector3::new(900.0, 0.0, 0.0)
        );
    }

    #[test]
    fn materials_follow_their_definitions() {
        let detector = run(&PlateDosimetry::new(), &ProgressReporter::new()).unwrap();
        let materials = &detector.materials;

        let air = materials
            .material(materials.find_or_build_material("Air").unwrap())
            .unwrap();
        assert_eq!(air.state(), MaterialState::Gas);
        assert!(matches!(air.composition(), Composition::Mixture(parts) if parts.len() == 2));

        let water = materials
            .material(materials.find_or_build_material("Water").unwrap())
            .unwrap();
        assert_eq!(water.density(), 1.0 * G_PER_CM3);
        assert_eq!(water.component_count(), 2);
    }

    #[test]
    fn plate_carries_a_single_dose_scorer() {
        let detector = run(&PlateDosimetry::new(), &ProgressReporter::new()).unwrap();
        let plate = detector.scene.find_volume(PLATE_VOLUME).unwrap();

        let regions = detector.detectors.regions_for(plate);
        assert_eq!(regions.len(), 1);
        let region = detector.detectors.region(regions[0]).unwrap();
        assert_eq!(region.qualified_name(), "plate/dose");
        assert_eq!(region.quantity(), QuantityKind::DoseDeposit);

        let absorber = detector.scene.find_volume(ABSORBER_VOLUME).unwrap();
        assert!(detector.detectors.regions_for(absorber).is_empty());
    }

    #[test]
    fn larger_world_scales_every_volume() {
        let construction = PlateDosimetry::new().with_world_half_extent(2.0 * METER);
        let detector = run(&construction, &ProgressReporter::new()).unwrap();
        let scene = &detector.scene;

        let absorber = scene.volume(scene.find_volume(ABSORBER_VOLUME).unwrap()).unwrap();
        assert_eq!(absorber.solid.half_extents, Vector3::repeat(1000.0));
        assert_eq!(construction.plate_position(), Vector3::new(1800.0, 0.0, 0.0));
    }

    #[test]
    fn plate_pushed_into_the_absorber_is_reported_as_overlap() {
        let construction = PlateDosimetry::new().with_plate_offset_fraction(0.5);
        let result = run(&construction, &ProgressReporter::new());
        assert!(matches!(
            result,
            Err(ConstructionError::Geometry {
                source: GeometryError::Overlap { .. }
            })
        ));
    }
}

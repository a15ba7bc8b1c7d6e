use slotmap::{SlotMap, new_key_type};
use std::collections::HashMap;
use tracing::{debug, info, trace};

use super::error::ScoringError;
use crate::core::geometry::ids::VolumeId;
use crate::core::geometry::scene::Scene;
use crate::core::materials::registry::MaterialRegistry;
use crate::core::scoring::accumulator::ScoreAccumulator;
use crate::core::scoring::quantity::QuantityKind;
use crate::core::units::GRAY;

new_key_type! {
    /// Handle to a scored region owned by a [`SensitiveDetectorManager`].
    pub struct RegionHandle;
}

/// A leaf volume bound to one scoring quantity.
#[derive(Debug, Clone)]
pub struct ScoredRegion {
    volume: VolumeId,
    volume_name: String,
    detector: String,
    scorer: String,
    quantity: QuantityKind,
    mass: Option<f64>,
    accumulator: ScoreAccumulator,
}

impl ScoredRegion {
    pub fn volume(&self) -> VolumeId {
        self.volume
    }

    pub fn volume_name(&self) -> &str {
        &self.volume_name
    }

    /// Name of the multi-functional detector this region belongs to.
    pub fn detector(&self) -> &str {
        &self.detector
    }

    /// Name of the primitive scorer, e.g. `dose`.
    pub fn scorer(&self) -> &str {
        &self.scorer
    }

    pub fn quantity(&self) -> QuantityKind {
        self.quantity
    }

    /// Mass of the region in internal units (g). Only computed for dose scoring.
    pub fn mass(&self) -> Option<f64> {
        self.mass
    }

    pub fn accumulator(&self) -> &ScoreAccumulator {
        &self.accumulator
    }

    /// Fully qualified scorer path, `detector/scorer`.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.detector, self.scorer)
    }
}

/// Optional naming overrides for a binding.
///
/// The detector defaults to the volume's name and the scorer to the quantity's
/// default primitive name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingOptions {
    pub detector: Option<String>,
    pub scorer: Option<String>,
}

impl BindingOptions {
    pub fn detector(mut self, name: &str) -> Self {
        self.detector = Some(name.to_string());
        self
    }

    pub fn scorer(mut self, name: &str) -> Self {
        self.scorer = Some(name.to_string());
        self
    }
}

/// Owns every sensitive region of a sealed scene.
///
/// Regions are looked up by volume name at bind time. Binding the same
/// `(volume, quantity)` pair twice returns the handle of the first binding.
#[derive(Debug, Default)]
pub struct SensitiveDetectorManager {
    regions: SlotMap<RegionHandle, ScoredRegion>,
    bindings: HashMap<(VolumeId, QuantityKind), RegionHandle>,
    order: Vec<RegionHandle>,
    verbose_level: u8,
}

impl SensitiveDetectorManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose_level(verbose_level: u8) -> Self {
        Self {
            verbose_level,
            ..Self::default()
        }
    }

    pub fn verbose_level(&self) -> u8 {
        self.verbose_level
    }

    /// Sets how loudly bindings are logged: `0` logs at `debug`, anything
    /// higher at `info`.
    pub fn set_verbose_level(&mut self, level: u8) {
        self.verbose_level = level;
    }

    /// Binds `quantity` to the leaf volume named `volume_name`.
    ///
    /// # Errors
    ///
    /// * [`ScoringError::UnknownVolume`] - no volume of that name exists.
    /// * [`ScoringError::NonLeafVolume`] - the volume has daughters.
    /// * [`ScoringError::MassUnavailable`] - dose scoring on a volume whose
    ///   material is missing from `materials`.
    pub fn register_sensitive_region(
        &mut self,
        scene: &Scene,
        materials: &MaterialRegistry,
        volume_name: &str,
        quantity: QuantityKind,
    ) -> Result<RegionHandle, ScoringError> {
        self.register_with_options(
            scene,
            materials,
            volume_name,
            quantity,
            &BindingOptions::default(),
        )
    }

    /// Like [`register_sensitive_region`](Self::register_sensitive_region) but
    /// parses the quantity from its name first.
    pub fn register_named(
        &mut self,
        scene: &Scene,
        materials: &MaterialRegistry,
        volume_name: &str,
        quantity: &str,
        options: &BindingOptions,
    ) -> Result<RegionHandle, ScoringError> {
        let quantity: QuantityKind = quantity.parse()?;
        self.register_with_options(scene, materials, volume_name, quantity, options)
    }

    pub fn register_with_options(
        &mut self,
        scene: &Scene,
        materials: &MaterialRegistry,
        volume_name: &str,
        quantity: QuantityKind,
        options: &BindingOptions,
    ) -> Result<RegionHandle, ScoringError> {
        let volume_id = scene
            .find_volume(volume_name)
            .ok_or_else(|| ScoringError::UnknownVolume {
                name: volume_name.to_string(),
            })?;
        let volume = scene
            .volume(volume_id)
            .ok_or_else(|| ScoringError::UnknownVolume {
                name: volume_name.to_string(),
            })?;

        if let Some(&existing) = self.bindings.get(&(volume_id, quantity)) {
            trace!(
                "Volume '{}' already scores {}; reusing the existing region.",
                volume_name, quantity
            );
            return Ok(existing);
        }

        if !volume.is_leaf() {
            return Err(ScoringError::NonLeafVolume {
                name: volume_name.to_string(),
            });
        }

        let mass = match quantity {
            QuantityKind::DoseDeposit => Some(
                volume
                    .mass(materials)
                    .filter(|m| *m > 0.0)
                    .ok_or_else(|| ScoringError::MassUnavailable {
                        name: volume_name.to_string(),
                    })?,
            ),
            QuantityKind::EnergyDeposit => None,
        };

        let region = ScoredRegion {
            volume: volume_id,
            volume_name: volume.name.clone(),
            detector: options
                .detector
                .clone()
                .unwrap_or_else(|| volume.name.clone()),
            scorer: options
                .scorer
                .clone()
                .unwrap_or_else(|| quantity.default_scorer_name().to_string()),
            quantity,
            mass,
            accumulator: ScoreAccumulator::new(),
        };

        if self.verbose_level > 0 {
            info!(
                "Attached scorer '{}' ({}) to volume '{}'.",
                region.qualified_name(),
                quantity,
                volume_name
            );
        } else {
            debug!(
                "Attached scorer '{}' ({}) to volume '{}'.",
                region.qualified_name(),
                quantity,
                volume_name
            );
        }

        let handle = self.regions.insert(region);
        self.bindings.insert((volume_id, quantity), handle);
        self.order.push(handle);
        Ok(handle)
    }

    pub fn region(&self, handle: RegionHandle) -> Option<&ScoredRegion> {
        self.regions.get(handle)
    }

    /// Regions in binding order.
    pub fn regions_iter(&self) -> impl Iterator<Item = (RegionHandle, &ScoredRegion)> {
        self.order
            .iter()
            .filter_map(|&h| self.regions.get(h).map(|r| (h, r)))
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Regions bound to `volume`, in binding order.
    pub fn regions_for(&self, volume: VolumeId) -> Vec<RegionHandle> {
        self.regions_iter()
            .filter(|(_, r)| r.volume == volume)
            .map(|(h, _)| h)
            .collect()
    }

    /// Looks up a region by its `detector/scorer` path.
    pub fn find_region(&self, qualified_name: &str) -> Option<RegionHandle> {
        self.regions_iter()
            .find(|(_, r)| r.qualified_name() == qualified_name)
            .map(|(h, _)| h)
    }

    /// Distinct detector names, in order of first appearance.
    pub fn detector_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (_, region) in self.regions_iter() {
            if !names.contains(&region.detector.as_str()) {
                names.push(&region.detector);
            }
        }
        names
    }

    /// Records one energy deposit (internal units, MeV) in the region.
    ///
    /// Dose regions convert the deposit to gray using the mass computed at
    /// bind time.
    pub fn record_deposit(
        &mut self,
        handle: RegionHandle,
        energy: f64,
    ) -> Result<(), ScoringError> {
        let region = self
            .regions
            .get_mut(handle)
            .ok_or_else(|| ScoringError::UnknownRegion(format!("{:?}", handle)))?;
        let value = match (region.quantity, region.mass) {
            (QuantityKind::EnergyDeposit, _) => energy,
            (QuantityKind::DoseDeposit, Some(mass)) => energy / mass / GRAY,
            (QuantityKind::DoseDeposit, None) => {
                return Err(ScoringError::MassUnavailable {
                    name: region.volume_name.clone(),
                });
            }
        };
        region.accumulator.add(value);
        Ok(())
    }

    /// Clears every accumulator; bindings are kept.
    pub fn reset_accumulators(&mut self) {
        for region in self.regions.values_mut() {
            region.accumulator.reset();
        }
        debug!("Reset {} scorer accumulator(s).", self.regions.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::placement::PlacementRequest;
    use crate::core::geometry::scene::SceneBuilder;
    use crate::core::units::{G_PER_CM3, JOULE, KILOGRAM, MEV, METER};
    use nalgebra::Vector3;

    fn water_registry() -> MaterialRegistry {
        let mut registry = MaterialRegistry::new();
        let h = registry.find_or_build_element("H").unwrap();
        let o = registry.find_or_build_element("O").unwrap();
        registry
            .define_compound("Water", 1.0 * G_PER_CM3, &[(h, 2), (o, 1)])
            .unwrap();
        registry
    }

    // World (water, half 1 m) containing plateLV (half 0.1 x 1 x 1 m).
    fn plate_scene(registry: &MaterialRegistry) -> Scene {
        let water = registry.find_or_build_material("Water").unwrap();
        let mut builder = SceneBuilder::new(registry);
        let world = builder
            .create_world(Vector3::repeat(METER), water)
            .unwrap();
        let plate = builder
            .create_box("plateLV", Vector3::new(0.1 * METER, METER, METER), water)
            .unwrap();
        builder
            .place(
                plate,
                world,
                PlacementRequest::at(Vector3::new(0.9 * METER, 0.0, 0.0)).named("plate"),
            )
            .unwrap();
        builder.seal().unwrap();
        builder.into_scene().unwrap()
    }

    #[test]
    fn binding_resolves_volume_by_name() {
        let registry = water_registry();
        let scene = plate_scene(&registry);
        let mut manager = SensitiveDetectorManager::new();

        let handle = manager
            .register_sensitive_region(&scene, &registry, "plateLV", QuantityKind::DoseDeposit)
            .unwrap();

        let region = manager.region(handle).unwrap();
        let plate = scene.find_volume("plateLV").unwrap();
        assert_eq!(region.volume(), plate);
        assert_eq!(region.detector(), "plateLV");
        assert_eq!(region.scorer(), "dose");
        assert_eq!(region.qualified_name(), "plateLV/dose");
        assert_eq!(manager.regions_for(plate), vec![handle]);
    }

    #[test]
    fn unknown_volume_is_rejected() {
        let registry = water_registry();
        let scene = plate_scene(&registry);
        let mut manager = SensitiveDetectorManager::new();

        let result = manager.register_sensitive_region(
            &scene,
            &registry,
            "ghostLV",
            QuantityKind::DoseDeposit,
        );
        assert!(matches!(
            result,
            Err(ScoringError::UnknownVolume { ref name }) if name == "ghostLV"
        ));
        assert_eq!(manager.region_count(), 0);
    }

    #[test]
    fn non_leaf_volume_is_rejected() {
        let registry = water_registry();
        let scene = plate_scene(&registry);
        let mut manager = SensitiveDetectorManager::new();

        let result = manager.register_sensitive_region(
            &scene,
            &registry,
            "World",
            QuantityKind::EnergyDeposit,
        );
        assert!(matches!(result, Err(ScoringError::NonLeafVolume { .. })));
    }

    #[test]
    fn unsupported_quantity_name_is_rejected() {
        let registry = water_registry();
        let scene = plate_scene(&registry);
        let mut manager = SensitiveDetectorManager::new();

        let result = manager.register_named(
            &scene,
            &registry,
            "plateLV",
            "cellFlux",
            &BindingOptions::default(),
        );
        assert!(matches!(
            result,
            Err(ScoringError::UnsupportedQuantity { ref quantity }) if quantity == "cellFlux"
        ));
    }

    #[test]
    fn rebinding_the_same_quantity_returns_the_same_handle() {
        let registry = water_registry();
        let scene = plate_scene(&registry);
        let mut manager = SensitiveDetectorManager::new();

        let first = manager
            .register_sensitive_region(&scene, &registry, "plateLV", QuantityKind::DoseDeposit)
            .unwrap();
        let second = manager
            .register_named(&scene, &registry, "plateLV", "dose", &BindingOptions::default())
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(manager.region_count(), 1);
    }

    #[test]
    fn several_quantities_can_share_a_volume() {
        let registry = water_registry();
        let scene = plate_scene(&registry);
        let mut manager = SensitiveDetectorManager::new();
        let options = BindingOptions::default().detector("plate");

        let dose = manager
            .register_with_options(
                &scene,
                &registry,
                "plateLV",
                QuantityKind::DoseDeposit,
                &options,
            )
            .unwrap();
        let edep = manager
            .register_with_options(
                &scene,
                &registry,
                "plateLV",
                QuantityKind::EnergyDeposit,
                &options,
            )
            .unwrap();

        assert_ne!(dose, edep);
        let plate = scene.find_volume("plateLV").unwrap();
        assert_eq!(manager.regions_for(plate), vec![dose, edep]);
        assert_eq!(manager.detector_names(), vec!["plate"]);
        assert_eq!(manager.find_region("plate/eDep"), Some(edep));
    }

    #[test]
    fn dose_deposits_are_converted_to_gray() {
        let registry = water_registry();
        let scene = plate_scene(&registry);
        let mut manager = SensitiveDetectorManager::new();
        let handle = manager
            .register_sensitive_region(&scene, &registry, "plateLV", QuantityKind::DoseDeposit)
            .unwrap();

        // plateLV holds 0.2 x 2 x 2 m3 of water, i.e. 800 kg.
        let mass = manager.region(handle).unwrap().mass().unwrap();
        assert!((mass / KILOGRAM - 800.0).abs() < 1e-6);

        manager.record_deposit(handle, 800.0 * JOULE).unwrap();
        let total = manager.region(handle).unwrap().accumulator().total();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn energy_deposits_accumulate_and_reset() {
        let registry = water_registry();
        let scene = plate_scene(&registry);
        let mut manager = SensitiveDetectorManager::with_verbose_level(1);
        let handle = manager
            .register_sensitive_region(&scene, &registry, "plateLV", QuantityKind::EnergyDeposit)
            .unwrap();
        assert!(manager.region(handle).unwrap().mass().is_none());

        manager.record_deposit(handle, 2.0 * MEV).unwrap();
        manager.record_deposit(handle, 4.0 * MEV).unwrap();
        let acc = *manager.region(handle).unwrap().accumulator();
        assert_eq!(acc.entries(), 2);
        assert_eq!(acc.total(), 6.0);
        assert_eq!(acc.mean(), Some(3.0));

        manager.reset_accumulators();
        assert_eq!(manager.region(handle).unwrap().accumulator().entries(), 0);
        assert_eq!(manager.region_count(), 1);
    }

    #[test]
    fn recording_into_a_foreign_handle_fails() {
        let registry = water_registry();
        let scene = plate_scene(&registry);
        let mut other = SensitiveDetectorManager::new();
        other
            .register_sensitive_region(&scene, &registry, "plateLV", QuantityKind::DoseDeposit)
            .unwrap();
        let foreign = other
            .register_sensitive_region(&scene, &registry, "plateLV", QuantityKind::EnergyDeposit)
            .unwrap();

        let mut manager = SensitiveDetectorManager::new();
        let result = manager.record_deposit(foreign, 1.0);
        assert!(matches!(result, Err(ScoringError::UnknownRegion(_))));
    }
}

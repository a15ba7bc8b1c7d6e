use geoscore::core::geometry::error::GeometryError;
use geoscore::core::geometry::placement::PlacementRequest;
use geoscore::core::geometry::scene::{Scene, SceneBuilder};
use geoscore::core::materials::error::MaterialError;
use geoscore::core::materials::registry::MaterialRegistry;
use geoscore::core::scoring::quantity::QuantityKind;
use geoscore::core::units::{G_PER_CM3, G_PER_MOLE, METER, MG_PER_CM3};
use geoscore::engine::error::ScoringError;
use geoscore::engine::progress::ProgressReporter;
use geoscore::engine::sensitive::SensitiveDetectorManager;
use geoscore::workflows::construct::run;
use geoscore::workflows::tutorial::PlateDosimetry;
use nalgebra::Vector3;
use std::io::Write;
use tempfile::NamedTempFile;

fn tutorial_materials() -> MaterialRegistry {
    let mut registry = MaterialRegistry::new();
    registry
        .define_simple_material("lArgon", 18.0, 39.95 * G_PER_MOLE, 1.39 * G_PER_CM3)
        .unwrap();
    let h = registry.find_or_build_element("H").unwrap();
    let n = registry.find_or_build_element("N").unwrap();
    let o = registry.find_or_build_element("O").unwrap();
    registry
        .define_compound("Water", 1.0 * G_PER_CM3, &[(h, 2), (o, 1)])
        .unwrap();
    registry
        .define_mixture("Air", 1.29 * MG_PER_CM3, &[(n, 0.7), (o, 0.3)])
        .unwrap();
    registry
}

fn build_world_only(registry: &MaterialRegistry) -> Scene {
    let air = registry.find_or_build_material("Air").unwrap();
    let mut builder = SceneBuilder::new(registry);
    builder.create_world(Vector3::repeat(METER), air).unwrap();
    builder.seal().unwrap();
    builder.into_scene().unwrap()
}

#[test]
fn end_to_end_plate_scene_has_three_volumes_and_one_dose_binding() {
    let registry = tutorial_materials();
    let air = registry.find_or_build_material("Air").unwrap();
    let argon = registry.find_or_build_material("lArgon").unwrap();
    let water = registry.find_or_build_material("Water").unwrap();

    let mut builder = SceneBuilder::new(&registry);
    let world = builder.create_world(Vector3::repeat(METER), air).unwrap();
    let absorber = builder
        .create_box("testBox", Vector3::repeat(0.5 * METER), argon)
        .unwrap();
    builder
        .place(absorber, world, PlacementRequest::new())
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
    let scene = builder.into_scene().unwrap();

    let mut manager = SensitiveDetectorManager::new();
    manager
        .register_sensitive_region(&scene, &registry, "plateLV", QuantityKind::DoseDeposit)
        .unwrap();

    assert_eq!(scene.volume_count(), 3);
    assert_eq!(manager.regions_for(plate).len(), 1);

    let looked_up = registry.find_or_build_material("Water").unwrap();
    let plate_volume = scene.volume(plate).unwrap();
    assert_eq!(looked_up, plate_volume.material);
    assert_eq!(
        registry.material(looked_up).unwrap().density(),
        1.0 * G_PER_CM3
    );
}

#[test]
fn binding_before_the_volume_exists_fails() {
    let registry = tutorial_materials();
    let scene = build_world_only(&registry);
    let mut manager = SensitiveDetectorManager::new();

    let result =
        manager.register_sensitive_region(&scene, &registry, "plateLV", QuantityKind::DoseDeposit);
    assert!(matches!(
        result,
        Err(ScoringError::UnknownVolume { ref name }) if name == "plateLV"
    ));
}

#[test]
fn mixtures_must_sum_to_one() {
    let mut registry = MaterialRegistry::new();
    let n = registry.find_or_build_element("N").unwrap();
    let o = registry.find_or_build_element("O").unwrap();

    for (a, b) in [(0.6, 0.3), (0.7, 0.4)] {
        let result = registry.define_mixture("BadAir", 1.29 * MG_PER_CM3, &[(n, a), (o, b)]);
        assert!(matches!(result, Err(MaterialError::InvalidComposition { .. })));
    }

    let id = registry
        .define_mixture("Air", 1.29 * MG_PER_CM3, &[(n, 0.7), (o, 0.3 + 5e-7)])
        .unwrap();
    assert_eq!(registry.find_or_build_material("Air").unwrap(), id);
    assert_eq!(registry.material(id).unwrap().density(), 1.29 * MG_PER_CM3);
}

#[test]
fn duplicate_material_keeps_the_first_definition() {
    let mut registry = tutorial_materials();
    let first = registry.find_or_build_material("Water").unwrap();

    let result = registry.define_simple_material("Water", 1.0, G_PER_MOLE, 2.0 * G_PER_CM3);
    assert!(matches!(result, Err(MaterialError::DuplicateName { ref name }) if name == "Water"));
    assert_eq!(registry.find_or_build_material("Water").unwrap(), first);
    assert_eq!(
        registry.material(first).unwrap().density(),
        1.0 * G_PER_CM3
    );
}

#[test]
fn placing_after_sealing_is_a_sequence_error() {
    let registry = tutorial_materials();
    let water = registry.find_or_build_material("Water").unwrap();
    let mut builder = SceneBuilder::new(&registry);
    let world = builder.create_world(Vector3::repeat(METER), water).unwrap();
    let plate = builder
        .create_box("plateLV", Vector3::repeat(0.1 * METER), water)
        .unwrap();
    builder.seal().unwrap();

    let result = builder.place(plate, world, PlacementRequest::new());
    assert!(matches!(result, Err(GeometryError::Sequence(_))));
}

#[test]
fn materials_file_feeds_the_registry() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[materials]]
type = "compound"
name = "Water"
density = 1.0
components = [{{ element = "H", count = 2 }}, {{ element = "O", count = 1 }}]

[[materials]]
type = "mixture"
name = "Air"
density = 0.00129
state = "gas"
components = [{{ element = "N", fraction = 0.7 }}, {{ element = "O", fraction = 0.3 }}]
"#
    )
    .unwrap();

    let mut registry = MaterialRegistry::new();
    let ids = registry.load_definitions(file.path()).unwrap();

    assert_eq!(ids.len(), 2);
    let names: Vec<_> = registry.materials_iter().map(|(_, m)| m.name()).collect();
    assert_eq!(names, vec!["Water", "Air"]);
    assert_eq!(registry.find_or_build_material("Air").unwrap(), ids[1]);
}

#[test]
fn tutorial_dump_lists_every_placement() {
    let detector = run(&PlateDosimetry::new(), &ProgressReporter::new()).unwrap();
    let dump = detector.scene.dump(&detector.materials).to_string();

    let lines: Vec<_> = dump.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("World#0 [World]"));
    assert!(lines[1].trim_start().starts_with("testBox#0 [testBox]"));
    assert!(lines[2].trim_start().starts_with("plate#0 [plateLV]"));
    assert!(lines[2].contains("Water"));
}

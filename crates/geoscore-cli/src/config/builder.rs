use super::defaults::DefaultsConfig;
use super::file::{FileSceneConfig, FileWorldConfig};
use super::models::{PlacementSpec, SceneConfig, ScorerSpec, VolumeSpec, WorldSpec};
use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use geoscore::core::units;
use nalgebra::Vector3;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves the scene for `build`: defaults, then the file, then `-S`
/// overrides, then dedicated CLI flags.
pub fn build_config(args: &BuildArgs) -> Result<SceneConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = FileSceneConfig::from_file(&args.config)?;
    let file_config = apply_set_values(file_config, &args.set_values)?;

    let unit_name = args
        .length_unit
        .clone()
        .or(file_config.length_unit.clone())
        .unwrap_or(defaults.length_unit.clone());
    let unit = units::length_unit(&unit_name).ok_or_else(|| {
        CliError::Config(format!(
            "Unknown length unit '{}'. Expected 'mm', 'cm' or 'm'.",
            unit_name
        ))
    })?;
    debug!("Scene lengths are given in '{}' (x{} mm).", unit_name, unit);

    let base_dir = args.config.parent().unwrap_or_else(|| Path::new(""));
    let materials_file = file_config
        .materials_file
        .as_ref()
        .map(|p| resolve_relative(base_dir, p));

    let world = resolve_world(file_config.world.clone(), unit)?;

    let volumes = file_config
        .volumes
        .iter()
        .map(|v| VolumeSpec {
            name: v.name.clone(),
            half_extents: scaled(v.half_extents, unit),
            material: v.material.clone(),
        })
        .collect();

    let placements = file_config
        .placements
        .iter()
        .map(|p| PlacementSpec {
            volume: p.volume.clone(),
            mother: p.mother.clone().unwrap_or_else(|| defaults.mother.clone()),
            position: p.position.map(|v| scaled(v, unit)).unwrap_or_else(Vector3::zeros),
            rotation_deg: p.rotation_deg.map(Vector3::from).unwrap_or_else(Vector3::zeros),
            name: p.name.clone(),
            copy_number: p.copy_number.unwrap_or(defaults.copy_number),
            check_overlaps: p.check_overlaps.unwrap_or(defaults.check_overlaps),
        })
        .collect();

    let scorers = file_config
        .scorers
        .iter()
        .map(|s| {
            if s.quantities.is_empty() {
                return Err(CliError::Config(format!(
                    "Scorer on volume '{}' lists no quantities.",
                    s.volume
                )));
            }
            Ok(ScorerSpec {
                volume: s.volume.clone(),
                quantities: s.quantities.clone(),
                detector: s.detector.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let verbose_level = file_config
        .scoring
        .as_ref()
        .and_then(|s| s.verbose_level)
        .unwrap_or(defaults.verbose_level);

    Ok(SceneConfig {
        materials_file,
        materials: file_config.materials,
        world,
        volumes,
        placements,
        scorers,
        verbose_level,
    })
}

fn resolve_world(world: Option<FileWorldConfig>, unit: f64) -> Result<WorldSpec> {
    let world = world
        .ok_or_else(|| CliError::Config("The `[world]` section is required.".to_string()))?;
    let half_extents = world.half_extents.ok_or_else(|| {
        CliError::Config("`world.half-extents` is required.".to_string())
    })?;
    let material = world.material.ok_or_else(|| {
        CliError::Config(
            "`world.material` is required either in the scene file or via -S.".to_string(),
        )
    })?;
    Ok(WorldSpec {
        half_extents: scaled(half_extents, unit),
        material,
    })
}

fn scaled(values: [f64; 3], unit: f64) -> Vector3<f64> {
    Vector3::from(values) * unit
}

fn resolve_relative(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn apply_set_values(mut config: FileSceneConfig, set_values: &[String]) -> Result<FileSceneConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key.trim() {
            "length-unit" => {
                config.length_unit = Some(value_str.trim().to_string());
            }
            "world.material" => {
                config.world.get_or_insert_with(Default::default).material =
                    Some(value_str.trim().to_string());
            }
            "scoring.verbose-level" => {
                config
                    .scoring
                    .get_or_insert_with(Default::default)
                    .verbose_level = Some(value_str.trim().parse().map_err(|_| {
                    CliError::Config(format!(
                        "Invalid integer value for {}: {}",
                        key, value_str
                    ))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

pub mod build;
pub mod element;
pub mod tutorial;

use crate::error::{CliError, Result};
use geoscore::workflows::construct::ConstructedDetector;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes the volume tree and a scorer summary to `output`, or stdout.
pub(crate) fn emit_report(detector: &ConstructedDetector, output: Option<&PathBuf>) -> Result<()> {
    let report = render_report(detector);
    match output {
        Some(path) => {
            write_file(path, &report)?;
            info!("Wrote volume tree to {:?}", path);
            println!("✓ Volume tree written to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
        }
    }
    Ok(())
}

pub(crate) fn render_report(detector: &ConstructedDetector) -> String {
    let mut report = detector.scene.dump(&detector.materials).to_string();
    if detector.detectors.region_count() > 0 {
        report.push_str("scorers:\n");
        for (_, region) in detector.detectors.regions_iter() {
            report.push_str(&format!(
                "  {} on {} ({}, {})\n",
                region.qualified_name(),
                region.volume_name(),
                region.quantity(),
                region.quantity().unit_label()
            ));
        }
    }
    report
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

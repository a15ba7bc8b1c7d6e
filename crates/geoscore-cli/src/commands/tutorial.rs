use crate::cli::TutorialArgs;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use geoscore::core::units::METER;
use geoscore::engine::progress::ProgressReporter;
use geoscore::workflows::{self, tutorial::PlateDosimetry};
use tracing::info;

pub fn run(args: TutorialArgs) -> Result<()> {
    let construction = tutorial_detector(&args)?;
    info!(
        "Building the plate dosimetry detector with a {} m world.",
        args.world_size_m
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let detector = workflows::construct::run(&construction, &reporter)?;

    super::emit_report(&detector, args.output.as_ref())
}

fn tutorial_detector(args: &TutorialArgs) -> Result<PlateDosimetry> {
    if !(args.world_size_m.is_finite() && args.world_size_m > 0.0) {
        return Err(CliError::Argument(format!(
            "--world-size-m must be a positive number, got {}",
            args.world_size_m
        )));
    }
    if !args.plate_offset.is_finite() {
        return Err(CliError::Argument(format!(
            "--plate-offset must be a finite number, got {}",
            args.plate_offset
        )));
    }
    Ok(PlateDosimetry::new()
        .with_world_half_extent(args.world_size_m * METER)
        .with_plate_offset_fraction(args.plate_offset))
}

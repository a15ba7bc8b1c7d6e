use crate::cli::BuildArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use geoscore::engine::progress::ProgressReporter;
use geoscore::workflows;
use tracing::info;

pub fn run(args: BuildArgs) -> Result<()> {
    info!("Resolving scene description from {:?}", &args.config);
    let scene_config = config::build_config(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Constructing detector...");
    let detector = workflows::construct::run(&scene_config, &reporter)?;
    info!(
        "Construction finished: {} volume(s), {} scored region(s).",
        detector.scene.volume_count(),
        detector.detectors.region_count()
    );

    super::emit_report(&detector, args.output.as_ref())
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "geoscore CLI - Build detector geometries with materials and dose-scoring regions, and inspect the resulting volume tree.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a detector from a scene description file and print its volume tree.
    Build(BuildArgs),
    /// Build the built-in plate dosimetry detector (argon absorber, water plate, air world).
    Tutorial(TutorialArgs),
    /// Show the periodic-table entry for a chemical symbol.
    Element(ElementArgs),
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the scene description file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Write the volume tree to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Override the length unit of the scene file (mm, cm or m).
    #[arg(long, value_name = "UNIT")]
    pub length_unit: Option<String>,

    /// Set a specific configuration value, overriding the scene file.
    /// Can be used multiple times. Example: -S world.material=Air
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `tutorial` subcommand.
#[derive(Args, Debug)]
pub struct TutorialArgs {
    /// Half-extent of the cubic world, in metres.
    #[arg(long, value_name = "FLOAT", default_value_t = 1.0)]
    pub world_size_m: f64,

    /// Position of the plate centre along x, as a fraction of the world half-extent.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.9)]
    pub plate_offset: f64,

    /// Write the volume tree to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `element` subcommand.
#[derive(Args, Debug)]
pub struct ElementArgs {
    /// Chemical symbol, e.g. Ar.
    #[arg(required = true)]
    pub symbol: String,
}

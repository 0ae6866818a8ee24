use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Command line interface of the row-based placement binary.
#[derive(Parser, Debug)]
#[command(version, about = "Covers a room outline with planks, row by row")]
pub struct Cli {
    /// Instance file describing the room, plank dimensions and seed placement
    #[arg(short, long, value_name = "INSTANCE_JSON")]
    pub input_file: PathBuf,
    /// Folder the solution JSON and SVG are written to, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Optional RBPConfig file, defaults are used when omitted
    #[arg(short, long, value_name = "CONFIG_JSON")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

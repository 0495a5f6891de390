use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Checks whether a set of circles fits inside a rectangular tray and draws where each circle goes.
#[derive(Parser, Debug)]
#[command(name = "tray-check", version, about, long_about = None)]
pub struct Cli {
    /// JSON instance: tray dimensions, optional spacing and the circles (before scaling)
    #[arg(short, long, value_name = "INSTANCE")]
    pub input_file: PathBuf,
    /// Folder the verdict (`sol_<instance>.json`) and the drawing (`sol_<instance>.svg`) are written to,
    /// created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON checker config (scale factor, default spacing, layout and drawing options), defaults if omitted
    #[arg(short, long, value_name = "CONFIG")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value_t = LevelFilter::Info
    )]
    pub log_level: LevelFilter,
}

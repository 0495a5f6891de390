use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use circle_tray::io::svg::layout_to_svg;
use clap::Parser as ClapParser;
use log::{info, warn};
use tray_check::checker::TrayChecker;
use tray_check::config::TrayCheckConfig;
use tray_check::io;
use tray_check::io::cli::Cli;
use tray_check::io::output::CheckOutput;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            TrayCheckConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed TrayCheckConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = io::import_instance(&ext_instance, &config)?;
    let n_circles = instance.n_discs();

    let solution = TrayChecker::new(instance, config).check();

    match solution.is_feasible() {
        true => info!("[MAIN] All circles can fit inside the rectangle."),
        false => info!("[MAIN] Circles cannot fit inside the rectangle."),
    }

    {
        let output = CheckOutput {
            solution: solution.export(n_circles),
            instance: ext_instance,
            config,
        };
        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let title = match solution.is_feasible() {
            true => "fits",
            false => "does not fit",
        };
        let svg = layout_to_svg(&solution.layout, config.svg_draw_options, title);
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}

use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use plankfit::io::export::export_solution;
use plankfit::io::import::import_instance;
use plankfit::io::svg::solution_to_svg;
use plankfit::placement::RowPlacer;
use rbp::config::RBPConfig;
use rbp::io::cli::Cli;
use rbp::io::{self, read_json_instance};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: RBPConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RBPConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed RBPConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file stem")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let mut ext_instance = read_json_instance(args.input_file.as_path())?;
    if let Some(scale) = config.coord_scale {
        ext_instance.coord_scale = Some(scale);
    }
    let instance = import_instance(&ext_instance)?;

    let solution = RowPlacer::new(instance.clone(), config.candidate_budget).solve();
    if solution.coverage < 1.0 {
        warn!(
            "[MAIN] incomplete coverage: {:.3}%",
            solution.coverage * 100.0
        );
    }

    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&export_solution(&solution), Path::new(&solution_path))?;

    let svg_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.svg"));
    let svg = solution_to_svg(&solution, &instance, config.svg_draw_options);
    io::write_svg(&svg, Path::new(&svg_path))?;

    Ok(())
}

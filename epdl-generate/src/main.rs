mod config;
mod element;
mod parsers;
mod processing;
mod tables;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::GeneratorConfig;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Processes raw EPDL/EADL tables and Compton profiles into per-element photon data files"
)]
struct Cli {
    /// Path to the generator configuration file in TOML format
    #[arg(short, long, value_name = "PATH")]
    config: PathBuf,

    /// Increase verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = GeneratorConfig::load(&cli.config)?;
    info!(
        raw = %config.raw_directory.display(),
        output = %config.output_directory.display(),
        energy_min = config.energy_min,
        energy_max = config.energy_max,
        "processing elements {}..={}",
        config.atomic_number_start,
        config.atomic_number_end
    );

    std::fs::create_dir_all(&config.output_directory).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_directory.display()
        )
    })?;

    for atomic_number in config.atomic_numbers() {
        let file = element::process_element(atomic_number, &config)
            .with_context(|| format!("failed to process Z = {atomic_number}"))?;
        let path = config.output_file(atomic_number);
        element::write_element_file(&path, &file)?;
        info!(atomic_number, path = %path.display(), "round trip OK");
    }

    info!("done");
    Ok(())
}

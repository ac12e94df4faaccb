// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! pocketscan CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use pocketscan::cli::{Reporter, Runner};
use pocketscan::DetectionConfig;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pocketscan")]
#[command(about = "Pocket detection for segmented triangle models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print detection statistics (does not enable log output)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect pockets in a model
    Detect {
        /// Model JSON file
        model: PathBuf,

        /// Adjacency graph JSON file
        #[arg(short, long)]
        adjacency: PathBuf,

        /// Write the detection report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the per-vertex pocket highlight attribute as JSON
        #[arg(long)]
        highlight: Option<PathBuf>,

        /// Configuration file (defaults to pocketscan.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Cast rays on the current thread only
        #[arg(long)]
        sequential: bool,
    },

    /// Print model statistics and bounds
    Inspect {
        /// Model JSON file
        model: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Detect {
            model,
            adjacency,
            output,
            highlight,
            config,
            sequential,
        } => {
            let mut config = match config {
                Some(path) => {
                    let mut config = DetectionConfig::from_file(path)?;
                    config.apply_env_overrides();
                    config
                }
                None => DetectionConfig::load()?,
            };
            if *sequential {
                config.parallel = false;
            }
            detect_command(model, adjacency, output.as_deref(), highlight.as_deref(), config, cli.verbose)?;
        }
        Commands::Inspect { model } => {
            inspect_command(model)?;
        }
        Commands::Version => {
            println!("pocketscan v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn detect_command(
    model: &Path,
    adjacency: &Path,
    output: Option<&Path>,
    highlight: Option<&Path>,
    config: DetectionConfig,
    verbose: bool,
) -> Result<()> {
    if !model.exists() {
        Reporter::report_error(&format!("Model file not found: {}", model.display()));
        std::process::exit(1);
    }

    if verbose {
        Reporter::report_info(&format!("Axes: {:?}, closure: {:?}", config.axes, config.closure));
    }

    let runner = Runner::new(config);
    let run = runner.detect(model, adjacency)?;
    Reporter::report_detection(&model.display().to_string(), &run, verbose);

    if let Some(path) = output {
        runner.write_report(&run, path)?;
        Reporter::success(&format!("Report written to {}", path.display()));
    }
    if let Some(path) = highlight {
        runner.write_highlight(&run, path)?;
        Reporter::success(&format!("Highlight attribute written to {}", path.display()));
    }

    Ok(())
}

fn inspect_command(model: &Path) -> Result<()> {
    let runner = Runner::new(DetectionConfig::default());
    let loaded = runner.load_model(model)?;
    Reporter::report_inspection(&model.display().to_string(), &loaded);
    Ok(())
}

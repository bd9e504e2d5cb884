//! Poselab - experiment configuration for 3D human pose and mesh estimation.
//!
//! This crate manages the hyperparameter schema of a pose/mesh training
//! pipeline: defaults, YAML override merging, grid-search expansion over
//! multi-valued keys, and run-directory preparation with reproducibility
//! snapshots. It also carries the dataset and joint-mapping tables the
//! dataset loaders and visualizers consume.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;

use clap::Parser;
use cli::{Cli, Command};
use config::{Hparams, load_hparams_file, read_config_value};
use grid::{expand, prepare_run};
use serde_json::json;
use std::path::Path;

pub use error::{Error, Result};

/// Main entry point for the poselab CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Expand {
            cfg,
            excluded,
            json,
        } => cmd_expand(&cfg, &excluded, json),
        Command::Prepare {
            cfg,
            cfg_id,
            excluded,
        } => cmd_prepare(&cfg, cfg_id, &excluded),
        Command::Show { cfg } => cmd_show(cfg.as_deref()),
    }
}

/// List the variants a configuration expands into.
#[allow(clippy::print_stdout)]
fn cmd_expand(cfg: &Path, excluded: &[String], as_json: bool) -> Result<()> {
    let raw = read_config_value(cfg)?;
    let (variants, hyper_params) = expand(&raw, excluded)?;

    if as_json {
        let labels: Vec<&str> = variants.iter().map(|v| v.label.as_str()).collect();
        let summary = json!({
            "num_variants": variants.len(),
            "hyper_params": hyper_params,
            "labels": labels,
        });
        let text = serde_json::to_string_pretty(&summary)
            .map_err(|e| Error::SummarySerialize { source: e })?;
        println!("{text}");
        return Ok(());
    }

    println!("{} experiment variant(s)", variants.len());
    if !hyper_params.is_empty() {
        println!("grid axes: {}", hyper_params.join(", "));
    }
    for (idx, variant) in variants.iter().enumerate() {
        if variant.label.is_empty() {
            println!("  [{idx}] {}", variant.hparams.exp_name);
        } else {
            println!("  [{idx}] {}", variant.label);
        }
    }
    Ok(())
}

/// Prepare the run directory for one variant and print its path.
#[allow(clippy::print_stdout)]
fn cmd_prepare(cfg: &Path, cfg_id: usize, excluded: &[String]) -> Result<()> {
    let run = prepare_run(cfg, cfg_id, excluded)?;
    println!("{}", run.log_dir.display());
    Ok(())
}

/// Print the merged (or default) configuration as YAML.
#[allow(clippy::print_stdout)]
fn cmd_show(cfg: Option<&Path>) -> Result<()> {
    let hparams = match cfg {
        Some(path) => load_hparams_file(path)?,
        None => Hparams::default(),
    };
    let text =
        serde_yaml::to_string(&hparams).map_err(|e| Error::ConfigSerialize { source: e })?;
    println!("{text}");
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

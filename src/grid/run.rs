//! Run directory preparation and reproducibility snapshots.
//!
//! Layout: `<LOG_DIR>/<METHOD>/<EXP_NAME>/<timestamp>_<EXP_NAME>[_<label>]/`
//! holding a verbatim copy of the source file (`config.yaml`) and the full
//! merged snapshot (`config_to_run.yaml`).

use crate::config::{Hparams, read_config_value, save_hparams};
use crate::error::{Error, Result};
use crate::grid::expand;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::info;

/// Timestamp format of run directory names.
const RUN_TIMESTAMP_FORMAT: &str = "%d-%m-%Y_%H-%M-%S";

/// Name of the verbatim copy of the source configuration file.
const SOURCE_COPY_NAME: &str = "config.yaml";

/// Name of the merged configuration snapshot.
const SNAPSHOT_NAME: &str = "config_to_run.yaml";

/// A prepared experiment run: the resolved configuration plus grid context.
#[derive(Debug, Clone)]
pub struct PreparedRun {
    /// Configuration of the selected variant, with `EXP_ID` and `LOG_DIR`
    /// pointing at the run directory.
    pub hparams: Hparams,

    /// The created run directory.
    pub log_dir: PathBuf,

    /// Dotted paths of the grid axes, in axis order.
    pub hyper_params: Vec<String>,

    /// Total number of variants the source file expands into.
    pub num_variants: usize,
}

/// Expand a configuration file, select one variant, and set up its run
/// directory with both reproducibility files.
pub fn prepare_run(
    cfg_file: &Path,
    cfg_id: usize,
    excluded_keys: &[String],
) -> Result<PreparedRun> {
    let raw = read_config_value(cfg_file)?;
    let (variants, hyper_params) = expand(&raw, excluded_keys)?;
    let num_variants = variants.len();
    if !hyper_params.is_empty() {
        info!("grid axes: {}", hyper_params.join(", "));
    }
    info!("{num_variants} experiment configuration(s)");

    let variant = variants
        .into_iter()
        .nth(cfg_id)
        .ok_or(Error::VariantOutOfRange {
            index: cfg_id,
            count: num_variants,
        })?;
    let mut hparams = variant.hparams;

    let timestamp = Local::now().format(RUN_TIMESTAMP_FORMAT);
    let mut run_name = format!("{timestamp}_{}", hparams.exp_name);
    let mut exp_id = hparams.exp_name.clone();
    if !variant.label.is_empty() {
        run_name.push('_');
        run_name.push_str(&variant.label);
        exp_id.push('/');
        exp_id.push_str(&variant.label);
    }

    let log_dir = hparams
        .log_dir
        .join(&hparams.method)
        .join(&hparams.exp_name)
        .join(run_name);
    std::fs::create_dir_all(&log_dir).map_err(|e| Error::RunDirCreate {
        path: log_dir.clone(),
        source: e,
    })?;

    let source_copy = log_dir.join(SOURCE_COPY_NAME);
    std::fs::copy(cfg_file, &source_copy).map_err(|e| Error::SourceCopy {
        path: source_copy,
        source: e,
    })?;

    hparams.exp_id = Some(exp_id);
    hparams.log_dir.clone_from(&log_dir);
    save_hparams(&hparams, &log_dir.join(SNAPSHOT_NAME))?;

    info!("run directory: {}", log_dir.display());
    Ok(PreparedRun {
        hparams,
        log_dir,
        hyper_params,
        num_variants,
    })
}

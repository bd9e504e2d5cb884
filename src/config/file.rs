//! Configuration file loading and snapshot writing.

use crate::config::merge::merge_overrides;
use crate::config::types::Hparams;
use crate::error::{Error, Result};
use serde_yaml::Value;
use std::path::Path;

/// Read a YAML override file into an untyped tree.
///
/// Used by the grid expander, which needs to see multi-valued axes before
/// they are collapsed into a typed [`Hparams`].
pub fn read_config_value(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_yaml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load hyperparameters from a YAML override file merged over the defaults.
pub fn load_hparams_file(path: &Path) -> Result<Hparams> {
    merge_overrides(&read_config_value(path)?)
}

/// Write a full hyperparameter snapshot as YAML.
pub fn save_hparams(hparams: &Hparams, path: &Path) -> Result<()> {
    let contents =
        serde_yaml::to_string(hparams).map_err(|e| Error::ConfigSerialize { source: e })?;

    std::fs::write(path, contents).map_err(|e| Error::SnapshotWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = load_hparams_file(Path::new("/nonexistent/experiment.yaml"));
        assert!(matches!(result, Err(Error::ConfigRead { .. })));
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap_or_else(|_| unreachable!());
        writeln!(
            file,
            "EXP_NAME: sweep\nDATASET:\n  TRAIN_DS: coco\n  BATCH_SIZE: 16\n"
        )
        .ok();

        let hparams = load_hparams_file(file.path()).unwrap_or_default();
        assert_eq!(hparams.exp_name, "sweep");
        assert_eq!(hparams.dataset.train_ds, "coco");
        assert_eq!(hparams.dataset.batch_size, 16);
    }

    #[test]
    fn test_load_invalid_yaml_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap_or_else(|_| unreachable!());
        writeln!(file, "EXP_NAME: [unclosed").ok();

        let result = load_hparams_file(file.path());
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let file = NamedTempFile::new().unwrap_or_else(|_| unreachable!());
        let mut hparams = Hparams::default();
        hparams.exp_name = "snapshot".to_string();
        hparams.optimizer.lr = 3e-5;

        save_hparams(&hparams, file.path()).ok();
        let reloaded = load_hparams_file(file.path()).unwrap_or_default();
        assert_eq!(reloaded, hparams);
    }
}

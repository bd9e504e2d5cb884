//! Hyperparameter schema, merging, and flattened views.

mod file;
mod flatten;
mod merge;
mod types;

pub use file::{load_hparams_file, read_config_value, save_hparams};
pub use flatten::{PATH_SEPARATOR, flatten, unflatten};
pub use merge::merge_overrides;
pub use types::{
    DatasetConfig, Hparams, MpqaConfig, OptimizerConfig, SspaConfig, TestingConfig, TrainingConfig,
};

//! Grid search expansion and run preparation.

mod expand;
mod run;

pub use expand::{EXCLUDED_JOIN_SEPARATOR, ExperimentVariant, expand, expand_values};
pub use run::{PreparedRun, prepare_run};

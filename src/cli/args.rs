//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Experiment configuration tooling for pose and mesh estimation pipelines.
#[derive(Debug, Parser)]
#[command(name = "poselab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the experiment variants a configuration file expands into.
    Expand {
        /// Path to the YAML experiment configuration.
        #[arg(long)]
        cfg: PathBuf,

        /// Keys kept out of the grid; their list values are joined instead.
        #[arg(long = "exclude", value_name = "KEY")]
        excluded: Vec<String>,

        /// Emit a machine-readable JSON summary.
        #[arg(long)]
        json: bool,
    },

    /// Create the run directory for one experiment variant.
    Prepare {
        /// Path to the YAML experiment configuration.
        #[arg(long)]
        cfg: PathBuf,

        /// Index of the variant to prepare.
        #[arg(long, default_value_t = 0)]
        cfg_id: usize,

        /// Keys kept out of the grid; their list values are joined instead.
        #[arg(long = "exclude", value_name = "KEY")]
        excluded: Vec<String>,
    },

    /// Print the merged configuration as YAML.
    Show {
        /// Override file to merge; defaults alone when omitted.
        #[arg(long)]
        cfg: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_expand() {
        let cli = Cli::try_parse_from(["poselab", "expand", "--cfg", "grid.yaml", "--json"]);
        let cli = cli.ok().unwrap_or_else(|| unreachable!());
        assert!(matches!(
            cli.command,
            Command::Expand { json: true, .. }
        ));
    }

    #[test]
    fn test_cli_parses_prepare_with_excludes() {
        let cli = Cli::try_parse_from([
            "poselab",
            "prepare",
            "--cfg",
            "grid.yaml",
            "--cfg-id",
            "3",
            "--exclude",
            "DATASET.TRAIN_DS",
            "--exclude",
            "SSPA.VIT_FILTER",
        ]);
        let cli = cli.ok().unwrap_or_else(|| unreachable!());
        let Command::Prepare { cfg_id, excluded, .. } = cli.command else {
            unreachable!("expected prepare subcommand");
        };
        assert_eq!(cfg_id, 3);
        assert_eq!(excluded, ["DATASET.TRAIN_DS", "SSPA.VIT_FILTER"]);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["poselab"]).is_err());
    }
}

//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use oscuro_core::paths::DATA_DIR_ENV;

use crate::commands::Commands;

/// Command-line interface for the oscuro settings panel.
#[derive(Parser)]
#[command(name = "oscuro")]
#[command(about = "Dark mode, bluetooth, vibration and volume settings")]
#[command(version)]
pub struct Cli {
    /// Override the data directory for this invocation
    #[arg(long = "data-dir", env = DATA_DIR_ENV, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Use a throwaway in-memory store instead of the settings database
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{SwitchArg, SwitchState};
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["oscuro", "--verbose", "--data-dir", "/tmp/oscuro", "show"]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/oscuro")));
        assert!(matches!(cli.command, Some(Commands::Show)));
    }

    #[test]
    fn test_toggle_args() {
        let cli = Cli::parse_from(["oscuro", "toggle", "bluetooth", "on"]);
        match cli.command {
            Some(Commands::Toggle { switch, state }) => {
                assert_eq!(switch, SwitchArg::Bluetooth);
                assert_eq!(state, SwitchState::On);
            }
            _ => panic!("expected toggle command"),
        }
    }

    #[test]
    fn test_volume_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["oscuro", "volume", "101"]).is_err());
        assert!(Cli::try_parse_from(["oscuro", "volume", "-1"]).is_err());
        assert!(Cli::try_parse_from(["oscuro", "volume", "100"]).is_ok());
    }

    #[test]
    fn test_data_dir_reads_core_env_var() {
        let command = Cli::command();
        let data_dir = command
            .get_arguments()
            .find(|arg| arg.get_id() == "data_dir")
            .unwrap();
        assert_eq!(data_dir.get_env(), Some(std::ffi::OsStr::new(DATA_DIR_ENV)));
    }
}

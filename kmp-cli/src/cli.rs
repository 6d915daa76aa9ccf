//! Top-level argument parsing

use crate::commands::{Commands, RunStatus};
use crate::config::CliConfig;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Find the first occurrence of a pattern with Knuth-Morris-Pratt search
#[derive(Debug, Parser)]
#[command(name = "kmp", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "KMP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Load the configuration and run the selected command
    pub fn run(&self) -> Result<RunStatus> {
        let config = CliConfig::load(self.config.as_deref())?;
        self.command.execute(&config)
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // RUST_LOG still wins over the -v count
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

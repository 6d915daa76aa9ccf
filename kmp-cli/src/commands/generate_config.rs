//! Generate config command implementation

use super::RunStatus;
use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

const HEADER: &str = "# kmp configuration\n# Pass with --config FILE or KMP_CONFIG=FILE\n\n";

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<RunStatus> {
        let template = self.generate_template()?;

        match &self.output {
            Some(path) => {
                fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                log::info!("wrote default configuration to {}", path.display());
            }
            None => print!("{template}"),
        }

        Ok(RunStatus::Success)
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        Ok(format!("{HEADER}{}", CliConfig::default().to_toml()?))
    }
}

//! Table command implementation

use super::{OutputArgs, RunStatus};
use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use kmp_core::LpsTable;

/// Arguments for the table command
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Pattern whose failure table is printed
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl TableArgs {
    /// Execute the table command
    pub fn execute(&self, config: &CliConfig) -> Result<RunStatus> {
        let table = LpsTable::build(self.pattern.as_bytes())
            .map_err(|e| CliError::InvalidInput(e.to_string()))?;

        let mut formatter = self.output.formatter(config)?;
        formatter.format_table(&self.pattern, &table)?;
        formatter.finish()?;

        Ok(RunStatus::Success)
    }
}

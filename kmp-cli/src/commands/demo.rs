//! Demo command implementation

use super::{OutputArgs, RunStatus};
use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use kmp_core::find;

/// Sample text searched by `kmp demo`
pub const DEMO_TEXT: &str = "le mot de lorem ifp sim";

/// Sample pattern searched by `kmp demo`
pub const DEMO_PATTERN: &str = "ip";

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

impl DemoArgs {
    /// Execute the demo command
    pub fn execute(&self, config: &CliConfig) -> Result<RunStatus> {
        log::info!("searching {DEMO_TEXT:?} for {DEMO_PATTERN:?}");
        let outcome = find(DEMO_TEXT, DEMO_PATTERN)?;

        let mut formatter = self.output.formatter(config)?;
        formatter.format_outcome(DEMO_PATTERN, outcome)?;
        formatter.finish()?;

        Ok(RunStatus::Success)
    }
}

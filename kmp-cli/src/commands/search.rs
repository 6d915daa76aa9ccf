//! Search command implementation

use super::{OutputArgs, RunStatus};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::TextSource;
use anyhow::Result;
use clap::{ArgGroup, Args};
use kmp_core::Matcher;
use std::path::PathBuf;

/// Arguments for the search command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["text", "input"])))]
pub struct SearchArgs {
    /// Pattern to look for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Text to search
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Exit with status 1 when the pattern is not found
    #[arg(long)]
    pub exit_code: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self, config: &CliConfig) -> Result<RunStatus> {
        log::debug!("Arguments: {:?}", self);

        let matcher = Matcher::for_str(&self.pattern)
            .map_err(|e| CliError::InvalidInput(e.to_string()))?;
        let source = TextSource::from_args(self.text.as_deref(), self.input.as_ref())?;
        let text = source.read_bytes()?;
        log::info!(
            "searching {} bytes for a {} byte pattern",
            text.len(),
            self.pattern.len()
        );

        let outcome = matcher.find(&text);
        log::info!("{outcome}");

        let mut formatter = self.output.formatter(config)?;
        formatter.format_outcome(&self.pattern, outcome)?;
        formatter.finish()?;

        let exit_code = self.exit_code || config.behavior.exit_code;
        if exit_code && !outcome.is_found() {
            Ok(RunStatus::NoMatch)
        } else {
            Ok(RunStatus::Success)
        }
    }
}

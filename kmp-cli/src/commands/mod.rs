//! CLI command implementations

use crate::config::CliConfig;
use crate::output::{self, OutputFormat, OutputFormatter};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

pub mod demo;
pub mod generate_config;
pub mod search;
pub mod table;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find the first occurrence of a pattern in a text
    Search(search::SearchArgs),

    /// Print the failure table of a pattern
    Table(table::TableArgs),

    /// Run the built-in sample search
    Demo(demo::DemoArgs),

    /// Print a configuration file with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, config: &CliConfig) -> Result<RunStatus> {
        match self {
            Commands::Search(args) => args.execute(config),
            Commands::Table(args) => args.execute(config),
            Commands::Demo(args) => args.execute(config),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// How a successful run should end the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Exit with status 0
    Success,
    /// The pattern was not found and `--exit-code` asked to report it
    NoMatch,
}

impl RunStatus {
    /// Process exit code for this status
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::NoMatch => ExitCode::from(1),
        }
    }
}

/// Output options shared by the commands that report results
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format (default: from config, otherwise text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Build the formatter, letting flags override the config file
    pub fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = self.format.unwrap_or(config.output.default_format);
        let sink = output::open_sink(self.output.as_deref())?;
        Ok(output::create_formatter(
            format,
            config.output.pretty_json,
            sink,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let search_cmd = Commands::Search(search::SearchArgs {
            pattern: "ip".to_string(),
            text: Some("le mot de lorem ifp sim".to_string()),
            input: None,
            exit_code: false,
            output: OutputArgs {
                format: None,
                output: None,
            },
        });

        let debug_str = format!("{:?}", search_cmd);
        assert!(debug_str.contains("Search"));
        assert!(debug_str.contains("ifp"));
    }

    #[test]
    fn test_run_status_exit_codes() {
        assert_eq!(
            format!("{:?}", RunStatus::Success.exit_code()),
            format!("{:?}", ExitCode::SUCCESS)
        );
        assert_eq!(
            format!("{:?}", RunStatus::NoMatch.exit_code()),
            format!("{:?}", ExitCode::from(1))
        );
    }
}

//! Output formatting module

use anyhow::{Context, Result};
use kmp_core::MatchOutcome;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Report the outcome of searching for `pattern`
    fn format_outcome(&mut self, pattern: &str, outcome: MatchOutcome) -> Result<()>;

    /// Report the failure table built for `pattern`
    fn format_table(&mut self, pattern: &str, table: &[usize]) -> Result<()>;

    /// Finalize output (flush the writer)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The plain `found at index = N` / `not found` line
    Text,
    /// One JSON object per result
    Json,
}

/// Boxed writer shared by the formatters
pub type Sink = Box<dyn Write + Send + Sync>;

/// Open the output destination: `path` if given, stdout otherwise
pub fn open_sink(path: Option<&Path>) -> Result<Sink> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Create the formatter for `format` writing into `sink`
pub fn create_formatter(format: OutputFormat, pretty_json: bool, sink: Sink) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(sink)),
        OutputFormat::Json => Box::new(JsonFormatter::new(sink, pretty_json)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_serde_names() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
        let format: OutputFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_open_sink_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let sink = open_sink(Some(&path)).unwrap();
        let mut formatter = create_formatter(OutputFormat::Text, false, sink);
        formatter
            .format_outcome("ip", MatchOutcome::NotFound)
            .unwrap();
        formatter.finish().unwrap();
        drop(formatter);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not found\n");
    }

    #[test]
    fn test_open_sink_bad_directory() {
        let result = open_sink(Some(Path::new("/nonexistent/dir/out.txt")));
        assert!(result.is_err());
        assert!(result
            .err()
            .unwrap()
            .to_string()
            .contains("Failed to create output file"));
    }
}

//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use kmp_core::MatchOutcome;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - one object per result
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

/// Data structure for a search result
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OutcomeData {
    /// The pattern that was searched for
    pub pattern: String,
    /// Whether the pattern occurs in the text
    pub found: bool,
    /// Starting offset of the first match
    pub offset: Option<usize>,
}

/// Data structure for a failure table
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TableData {
    /// The pattern the table was built from
    pub pattern: String,
    /// One entry per pattern byte
    pub table: Vec<usize>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    /// Return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_outcome(&mut self, pattern: &str, outcome: MatchOutcome) -> Result<()> {
        let data = OutcomeData {
            pattern: pattern.to_string(),
            found: outcome.is_found(),
            offset: outcome.offset(),
        };
        self.write_value(&data)
    }

    fn format_table(&mut self, pattern: &str, table: &[usize]) -> Result<()> {
        let data = TableData {
            pattern: pattern.to_string(),
            table: table.to_vec(),
        };
        self.write_value(&data)
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

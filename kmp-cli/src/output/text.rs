//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use kmp_core::MatchOutcome;
use std::io::{self, Write};

/// Plain text formatter - one line per result
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_outcome(&mut self, _pattern: &str, outcome: MatchOutcome) -> Result<()> {
        writeln!(self.writer, "{outcome}")?;
        Ok(())
    }

    fn format_table(&mut self, _pattern: &str, table: &[usize]) -> Result<()> {
        let line = table
            .iter()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

//! Where the searched text comes from

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Text source for a search
#[derive(Debug, Clone, PartialEq)]
pub enum TextSource {
    /// Text given directly on the command line
    Inline(String),
    /// File whose raw bytes are searched
    File(PathBuf),
}

impl TextSource {
    /// Pick the source from the two mutually exclusive arguments
    pub fn from_args(text: Option<&str>, input: Option<&PathBuf>) -> Result<Self> {
        match (text, input) {
            (Some(text), None) => Ok(TextSource::Inline(text.to_string())),
            (None, Some(path)) => Ok(TextSource::File(path.clone())),
            _ => Err(CliError::InvalidInput(
                "give either TEXT or --input FILE, not both".to_string(),
            )
            .into()),
        }
    }

    /// Load the bytes to search.
    ///
    /// Files are read as raw bytes, so non UTF-8 content is searched as is.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        match self {
            TextSource::Inline(text) => Ok(text.as_bytes().to_vec()),
            TextSource::File(path) => {
                if !path.exists() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
            }
        }
    }
}

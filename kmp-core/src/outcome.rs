//! Result of a single search

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of looking for the first occurrence of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum MatchOutcome {
    /// The pattern starts at `offset` (zero-based) in the text
    Found {
        /// Starting offset of the first match
        offset: usize,
    },
    /// The pattern does not occur in the text
    NotFound,
}

impl MatchOutcome {
    /// Offset of the match, if any
    pub fn offset(&self) -> Option<usize> {
        match self {
            MatchOutcome::Found { offset } => Some(*offset),
            MatchOutcome::NotFound => None,
        }
    }

    /// Whether the pattern was found
    pub fn is_found(&self) -> bool {
        matches!(self, MatchOutcome::Found { .. })
    }
}

impl From<Option<usize>> for MatchOutcome {
    fn from(offset: Option<usize>) -> Self {
        match offset {
            Some(offset) => MatchOutcome::Found { offset },
            None => MatchOutcome::NotFound,
        }
    }
}

impl From<MatchOutcome> for Option<usize> {
    fn from(outcome: MatchOutcome) -> Self {
        outcome.offset()
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Found { offset } => write!(f, "found at index = {offset}"),
            MatchOutcome::NotFound => write!(f, "not found"),
        }
    }
}

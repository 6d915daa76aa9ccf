//! Core error types (deterministic only)

use thiserror::Error;

/// Errors raised by the checked matching entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KmpError {
    /// The pattern has no symbols, so there is nothing to match
    #[error("pattern must not be empty")]
    EmptyPattern,

    /// A failure table was paired with a pattern it was not built from
    #[error("failure table has {table_len} entries but the pattern has {pattern_len} symbols")]
    TableMismatch {
        /// Number of symbols in the pattern
        pattern_len: usize,
        /// Number of entries in the supplied table
        table_len: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, KmpError>;

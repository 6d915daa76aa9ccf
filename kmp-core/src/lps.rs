//! Failure function (longest proper prefix that is also a suffix)
//!
//! Entry `k` of the table is the length of the longest proper border of
//! `pattern[..=k]`. The matcher uses it to rewind the pattern cursor on a
//! mismatch without moving back in the text.

use crate::error::{KmpError, Result};
use std::ops::Deref;

/// Build the failure table for `pattern`.
///
/// The returned vector has exactly `pattern.len()` entries and `lps[0]` is
/// always 0. An empty pattern yields an empty table; use [`LpsTable::build`]
/// to reject it instead.
pub fn build_lps<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];
    if m == 0 {
        return lps;
    }
    // a single symbol has no proper border
    lps[0] = 0;

    // i: length of the current border, j: position being computed
    let mut i = 0;
    let mut j = 1;
    while j < m {
        if pattern[i] == pattern[j] {
            i += 1;
            lps[j] = i;
            j += 1;
        } else if i > 0 {
            i = lps[i - 1];
        } else {
            lps[j] = 0;
            j += 1;
        }
    }

    lps
}

/// Failure table built from a non-empty pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpsTable {
    entries: Vec<usize>,
}

impl LpsTable {
    /// Build the table, rejecting an empty pattern
    pub fn build<T: PartialEq>(pattern: &[T]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(KmpError::EmptyPattern);
        }
        let entries = build_lps(pattern);
        log::debug!("built failure table with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Table entries, one per pattern symbol
    pub fn as_slice(&self) -> &[usize] {
        &self.entries
    }

    /// Consume the table and return the raw entries
    pub fn into_vec(self) -> Vec<usize> {
        self.entries
    }
}

impl Deref for LpsTable {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl AsRef<[usize]> for LpsTable {
    fn as_ref(&self) -> &[usize] {
        &self.entries
    }
}

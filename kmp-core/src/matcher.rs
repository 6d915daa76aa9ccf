//! Left-to-right scan driven by the failure table

use crate::error::{KmpError, Result};
use crate::lps::LpsTable;
use crate::outcome::MatchOutcome;

/// Find the first occurrence of `pattern` in `text`.
///
/// `lps` must be the failure table of exactly this `pattern`; a table of the
/// wrong length is a caller bug and panics. Returns the zero-based offset of
/// the first match, or `None`. An empty pattern never matches.
///
/// Runs in O(n + m): the text cursor never moves back and the pattern cursor
/// only falls back as far as it previously advanced.
pub fn search<T: PartialEq>(text: &[T], pattern: &[T], lps: &[usize]) -> Option<usize> {
    assert_eq!(
        lps.len(),
        pattern.len(),
        "failure table was not built from this pattern"
    );

    let n = text.len();
    let m = pattern.len();
    if m == 0 {
        return None;
    }

    let mut i = 0;
    let mut j = 0;
    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
        } else if j > 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }

        if j == m {
            log::trace!("pattern matched ending at {i}");
            return Some(i - j);
        }
    }

    None
}

/// A pattern paired with its failure table.
///
/// The table is built once in [`Matcher::new`] and reused for every search.
/// Searching never mutates the matcher, so repeated searches over the same
/// text always agree.
///
/// # Example
///
/// ```rust
/// use kmp_core::{Matcher, MatchOutcome};
///
/// let matcher = Matcher::new(b"ABABCABAB").unwrap();
/// assert_eq!(
///     matcher.find(b"ABABDABACDABABCABAB"),
///     MatchOutcome::Found { offset: 10 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher<T> {
    pattern: Vec<T>,
    table: LpsTable,
}

impl<T: PartialEq + Clone> Matcher<T> {
    /// Create a matcher for a non-empty pattern
    pub fn new(pattern: &[T]) -> Result<Self> {
        let table = LpsTable::build(pattern)?;
        Ok(Self {
            pattern: pattern.to_vec(),
            table,
        })
    }
}

impl<T: PartialEq> Matcher<T> {
    /// Pair a pattern with an already built table
    pub fn from_parts(pattern: Vec<T>, table: LpsTable) -> Result<Self> {
        if pattern.is_empty() {
            return Err(KmpError::EmptyPattern);
        }
        if pattern.len() != table.len() {
            return Err(KmpError::TableMismatch {
                pattern_len: pattern.len(),
                table_len: table.len(),
            });
        }
        Ok(Self { pattern, table })
    }

    /// Find the first occurrence of the pattern in `text`
    pub fn find(&self, text: &[T]) -> MatchOutcome {
        search(text, &self.pattern, &self.table).into()
    }

    /// The pattern this matcher looks for
    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    /// The failure table of the pattern
    pub fn table(&self) -> &LpsTable {
        &self.table
    }
}

impl Matcher<u8> {
    /// Create a matcher for the bytes of a string pattern
    pub fn for_str(pattern: &str) -> Result<Self> {
        Self::new(pattern.as_bytes())
    }

    /// Search the bytes of `text`; offsets are byte offsets
    pub fn find_str(&self, text: &str) -> MatchOutcome {
        self.find(text.as_bytes())
    }
}

/// Find the first occurrence of `pattern` in `text`, comparing bytes.
///
/// Builds a fresh table for the pattern and discards it afterwards.
pub fn find(text: &str, pattern: &str) -> Result<MatchOutcome> {
    Ok(Matcher::for_str(pattern)?.find_str(text))
}

//! Knuth-Morris-Pratt exact string matching
//!
//! The search is split in two phases:
//! - **Failure table**: for every prefix of the pattern, the length of its
//!   longest proper border ([`build_lps`], [`LpsTable`]).
//! - **Scan**: a single left-to-right pass over the text that uses the table
//!   to rewind the pattern cursor on a mismatch ([`search`], [`Matcher`]).
//!
//! Only the first occurrence is reported. Symbols are compared with
//! `PartialEq`; the `&str` helpers compare bytes and report byte offsets.
//!
//! # Example
//!
//! ```rust
//! use kmp_core::{build_lps, find, search, MatchOutcome};
//!
//! let lps = build_lps(b"aabaaab");
//! assert_eq!(lps, vec![0, 1, 0, 1, 2, 2, 3]);
//!
//! let pattern = b"ABABCABAB";
//! let table = build_lps(pattern);
//! assert_eq!(search(b"ABABDABACDABABCABAB", pattern, &table), Some(10));
//!
//! let outcome = find("le mot de lorem ifp sim", "ip").unwrap();
//! assert_eq!(outcome, MatchOutcome::NotFound);
//! assert_eq!(outcome.to_string(), "not found");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod lps;
pub mod matcher;
pub mod outcome;

pub use error::{KmpError, Result};
pub use lps::{build_lps, LpsTable};
pub use matcher::{find, search, Matcher};
pub use outcome::MatchOutcome;

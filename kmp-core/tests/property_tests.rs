//! Property tests comparing the table and the scan against brute force

use kmp_core::{build_lps, search, Matcher};
use proptest::prelude::*;

/// Longest proper border of `prefix`, by trying every length
fn brute_force_border(prefix: &[u8]) -> usize {
    (0..prefix.len())
        .rev()
        .find(|&len| prefix[..len] == prefix[prefix.len() - len..])
        .unwrap_or(0)
}

fn naive_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.len() > text.len() {
        return None;
    }
    (0..=text.len() - pattern.len()).find(|&i| &text[i..i + pattern.len()] == pattern)
}

/// Small alphabets make borders and partial matches likely
fn symbols(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..max_len)
}

#[test]
fn test_documented_table() {
    let pattern = b"aabaaab";
    let lps = build_lps(pattern);
    assert_eq!(lps, vec![0, 1, 0, 1, 2, 2, 3]);
    for k in 0..pattern.len() {
        assert_eq!(lps[k], brute_force_border(&pattern[..=k]));
    }
}

proptest! {
    #[test]
    fn table_matches_brute_force(pattern in symbols(24)) {
        let lps = build_lps(&pattern);
        prop_assert_eq!(lps.len(), pattern.len());
        for k in 0..pattern.len() {
            prop_assert_eq!(lps[k], brute_force_border(&pattern[..=k]));
        }
    }

    #[test]
    fn table_entries_are_bounded(pattern in prop::collection::vec(any::<u8>(), 1..64)) {
        let lps = build_lps(&pattern);
        prop_assert_eq!(lps[0], 0);
        for (k, &border) in lps.iter().enumerate() {
            prop_assert!(border <= k);
        }
    }

    #[test]
    fn search_agrees_with_naive(text in symbols(64), pattern in symbols(8)) {
        prop_assume!(!pattern.is_empty());
        let lps = build_lps(&pattern);
        prop_assert_eq!(search(&text, &pattern, &lps), naive_find(&text, &pattern));
    }

    #[test]
    fn search_is_repeatable(text in symbols(64), pattern in symbols(6)) {
        prop_assume!(!pattern.is_empty());
        let matcher = Matcher::new(&pattern).unwrap();
        prop_assert_eq!(matcher.find(&text), matcher.find(&text));
    }

    #[test]
    fn found_offset_is_in_range(text in symbols(64), pattern in symbols(6)) {
        prop_assume!(!pattern.is_empty());
        let lps = build_lps(&pattern);
        if let Some(offset) = search(&text, &pattern, &lps) {
            prop_assert!(offset + pattern.len() <= text.len());
            prop_assert_eq!(&text[offset..offset + pattern.len()], &pattern[..]);
        }
    }
}

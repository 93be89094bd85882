//! Assertion helpers for fixture-driven splitting tests.

use std::num::NonZeroUsize;

use sift_core::{PatternSet, Tokenizer};

use super::SplitCase;

/// Tokenize the case's line and compare groups and word count.
pub fn run_split_case(case: &SplitCase) {
    let tokenizer = Tokenizer::new(PatternSet::new(case.delimiters.iter().map(String::as_bytes)));
    let cap = case.max_groups.and_then(NonZeroUsize::new);
    let line = case.line.as_bytes();
    let map = tokenizer.tokenize(line, cap);

    let groups: Vec<String> = map
        .groups(line)
        .map(|g| String::from_utf8_lossy(g).into_owned())
        .collect();

    assert_eq!(
        groups, case.groups,
        "case '{}' ({}): wrong groups",
        case.id, case.desc
    );
    assert_eq!(
        map.word_count(),
        case.groups.len(),
        "case '{}' ({}): wrong word count",
        case.id, case.desc
    );
}

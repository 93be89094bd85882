//! Multi-pattern line tokenizer.
//!
//! Splits one line into "groups" (maximal runs of bytes not consumed by any
//! delimiter match) by running an independent prefix-function search per
//! delimiter and reducing the combined match extents in a single left-to-right
//! pass.
//!
//! # Match-extent encoding
//!
//! Matches are accumulated into one integer array of length `len(line) + 1`:
//! a match ending at position `i` with length `L` does `ext[i-L] -= L` and
//! `ext[i] += L`. A running sum of the array then tells, at every position,
//! whether that position lies inside a net-negative (matched) region. This
//! represents arbitrarily overlapping matches from multiple patterns without
//! ever materializing an interval list.
//!
//! The search phase is O(total pattern length x line length) - one scan per
//! pattern, deliberately not a combined multi-pattern automaton - and the
//! reduction phase is O(line length).

use std::num::NonZeroUsize;

use memchr::memchr;

use crate::pattern::{Pattern, PatternSet};
use crate::span::Span;

/// How the pattern cursor resumes after a full match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Continue via the failure table: overlapping self-matches are detected,
    /// not skipped. `"testest"` against `"test"` matches at offsets 0 and 3.
    #[default]
    Blend,
    /// Restart the pattern cursor at zero after a full match, so occurrences
    /// never share bytes. `"testest"` against `"test"` matches only at 0.
    Complete,
}

/// Splits lines into groups separated by a set of literal delimiters.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    patterns: PatternSet,
    mode: MatchMode,
}

impl Tokenizer {
    /// Create a tokenizer with the default [`MatchMode::Blend`] behavior.
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns, mode: MatchMode::default() }
    }

    /// Create a tokenizer with an explicit match mode.
    pub fn with_mode(patterns: PatternSet, mode: MatchMode) -> Self {
        Self { patterns, mode }
    }

    /// The active delimiter set.
    #[inline]
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// The active match mode.
    #[inline]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Replace the delimiter set. The new set carries freshly computed
    /// failure tables; nothing from the old set survives.
    pub fn set_patterns(&mut self, patterns: PatternSet) {
        self.patterns = patterns;
    }

    /// Replace the delimiters from raw strings, rebuilding every failure
    /// table.
    pub fn set_delimiters<I, S>(&mut self, delimiters: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        self.patterns = PatternSet::new(delimiters);
    }

    /// Tokenize one line into a [`TokenMap`].
    ///
    /// `max_groups` caps how many groups may be created; `None` is unlimited.
    /// Once the cap is reached, further non-delimiter bytes fold into the
    /// final group instead of starting new ones - the cap truncates group
    /// creation, never byte consumption.
    pub fn tokenize(&self, line: &[u8], max_groups: Option<NonZeroUsize>) -> TokenMap {
        let n = line.len();
        let mut extents = vec![0i64; n + 1];

        for pattern in self.patterns.iter() {
            if !pattern.is_empty() && pattern.len() <= n {
                self.search(pattern, line, &mut extents);
            }
        }

        // Trailing-match trim: a delimiter occurrence ending exactly at line
        // end produces no trailing empty group. Walk backward through the
        // extent array until the accumulated match length drains to zero;
        // everything at or after that point is outside the reducible range.
        let mut reduce_end = n;
        if extents[n] > 0 {
            let mut acc = extents[n];
            while acc != 0 && reduce_end > 0 {
                reduce_end -= 1;
                acc += extents[reduce_end];
            }
        }

        if self.patterns.has_empty_pattern() {
            assign_single_byte(line, &extents, reduce_end, max_groups)
        } else {
            assign_runs(line, &extents, reduce_end, max_groups)
        }
    }

    /// Prefix-function scan for a single non-empty pattern, recording every
    /// match extent. When the pattern cursor is at zero, `memchr` skips the
    /// line cursor straight to the next candidate first byte.
    fn search(&self, pattern: &Pattern, line: &[u8], extents: &mut [i64]) {
        let p = pattern.text();
        let lps = pattern.lps();
        let m = p.len();
        let n = line.len();
        let resume = match self.mode {
            MatchMode::Blend => lps[m - 1] as usize,
            MatchMode::Complete => 0,
        };

        let mut i = 0;
        let mut j = 0;
        while i < n {
            if j == 0 {
                match memchr(p[0], &line[i..]) {
                    Some(off) => i += off,
                    None => return,
                }
            }
            if line[i] == p[j] {
                i += 1;
                j += 1;
                if j == m {
                    extents[i - m] -= m as i64;
                    extents[i] += m as i64;
                    j = resume;
                }
            } else {
                // j > 0 here: the memchr hop guarantees a first-byte match.
                j = lps[j - 1] as usize;
            }
        }
    }
}

/// Index assignment, non-empty-delimiter policy: a group is a maximal run of
/// bytes outside every matched region; delimiter bytes are `-1` gaps.
fn assign_runs(
    line: &[u8],
    extents: &[i64],
    reduce_end: usize,
    max_groups: Option<NonZeroUsize>,
) -> TokenMap {
    let mut index = vec![-1i32; line.len()];
    let mut words = 0usize;
    let mut neg = 0i64;
    let mut in_text = false;

    for pos in 0..reduce_end {
        neg += extents[pos];
        if neg >= 0 {
            if !in_text {
                if max_groups.map_or(true, |cap| words < cap.get()) {
                    words += 1;
                }
                in_text = true;
            }
            index[pos] = words as i32;
        } else {
            in_text = false;
        }
    }

    TokenMap::from_parts(index, words)
}

/// Index assignment, empty-delimiter policy: the empty pattern conceptually
/// matches at every position, so each byte starts its own group while below
/// the cap. Once the cap is active, bytes that other patterns matched are
/// reclaimed into the current group instead of staying gaps, so the final
/// group stays contiguous.
fn assign_single_byte(
    line: &[u8],
    extents: &[i64],
    reduce_end: usize,
    max_groups: Option<NonZeroUsize>,
) -> TokenMap {
    let mut index = vec![-1i32; line.len()];
    let mut words = 0usize;
    let mut neg = 0i64;

    for pos in 0..reduce_end {
        neg += extents[pos];
        let capped = max_groups.is_some_and(|cap| words >= cap.get());
        if neg >= 0 {
            if !capped {
                words += 1;
            }
            index[pos] = words as i32;
        } else if capped {
            index[pos] = words as i32;
        }
    }

    TokenMap::from_parts(index, words)
}

/// The tokenizer's output: a per-byte group index array plus the word count.
///
/// Each slot is either `-1` (the byte is part of a consumed delimiter) or a
/// positive 1-based group number. Values are non-decreasing left to right
/// ignoring `-1`s, and the maximum value equals [`word_count`].
///
/// A line that produced no groups at all yields an empty index array.
///
/// [`word_count`]: TokenMap::word_count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    index: Vec<i32>,
    words: usize,
}

impl TokenMap {
    fn from_parts(index: Vec<i32>, words: usize) -> Self {
        if words == 0 {
            return Self::default();
        }
        Self { index, words }
    }

    /// Number of groups in the line.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// The raw group index array (empty when [`word_count`] is zero).
    ///
    /// [`word_count`]: TokenMap::word_count
    #[inline]
    pub fn index(&self) -> &[i32] {
        &self.index
    }

    /// Check if the line produced no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// The byte extent of the 1-based `group`, or `None` if out of range.
    ///
    /// Groups below a group cap are contiguous. For the final group of a
    /// capped tokenization the span runs from its first to its last labeled
    /// byte, so delimiter bytes folded between its runs are included in the
    /// extracted substring - nothing after the final group's start is lost.
    pub fn group_span(&self, group: usize) -> Option<Span> {
        if group == 0 || group > self.words {
            return None;
        }
        let g = group as i32;
        let start = self.index.iter().position(|&v| v == g)?;
        let end = self.index.iter().rposition(|&v| v == g)? + 1;
        Some(Span::new(start as u32, end as u32))
    }

    /// Borrow the 1-based `group` out of the line it was computed from.
    pub fn group<'a>(&self, line: &'a [u8], group: usize) -> Option<&'a [u8]> {
        self.group_span(group).map(|span| &line[span.range()])
    }

    /// Iterate over all groups as slices of `line`, in order.
    pub fn groups<'m, 'a>(&'m self, line: &'a [u8]) -> Groups<'m, 'a> {
        Groups { map: self, line, next: 1 }
    }
}

/// Iterator over the groups of a [`TokenMap`], zero-copy into the source line.
#[derive(Debug)]
pub struct Groups<'m, 'a> {
    map: &'m TokenMap,
    line: &'a [u8],
    next: usize,
}

impl<'m, 'a> Iterator for Groups<'m, 'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let group = self.map.group(self.line, self.next)?;
        self.next += 1;
        Some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.map.words + 1 - self.next.min(self.map.words + 1);
        (remaining, Some(remaining))
    }
}

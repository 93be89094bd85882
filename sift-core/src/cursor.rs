//! Line-oriented cursor over a buffered reader.
//!
//! [`LineCursor`] is the thin collaborator that composes the tokenizer with a
//! stream: pull one line, tokenize it once, then walk the resulting
//! [`TokenMap`] handing back groups on demand. It owns its [`Tokenizer`] and
//! [`ValueParser`]; the reader's lifecycle (open, close, buffering policy)
//! stays with the caller.
//!
//! There is no seeking and no jump-to-line addressing; the cursor only moves
//! forward, one line at a time.

use std::io::{self, BufRead};
use std::num::NonZeroUsize;

use crate::tokenizer::{TokenMap, Tokenizer};
use crate::value::{ValueError, ValueParser};

/// Walks a stream line by line, handing out one group at a time.
#[derive(Debug)]
pub struct LineCursor<R> {
    reader: R,
    tokenizer: Tokenizer,
    parser: ValueParser,
    max_groups: Option<NonZeroUsize>,
    line: Vec<u8>,
    map: TokenMap,
    next_group: usize,
    line_number: u64,
}

impl<R: BufRead> LineCursor<R> {
    /// Cursor with an unlimited group cap and a default [`ValueParser`].
    pub fn new(reader: R, tokenizer: Tokenizer) -> Self {
        Self::with_cap(reader, tokenizer, None)
    }

    /// Cursor that tokenizes every line under the given group cap.
    pub fn with_cap(reader: R, tokenizer: Tokenizer, max_groups: Option<NonZeroUsize>) -> Self {
        Self {
            reader,
            tokenizer,
            parser: ValueParser::new(),
            max_groups,
            line: Vec::new(),
            map: TokenMap::default(),
            next_group: 1,
            line_number: 0,
        }
    }

    /// Pull and tokenize the next line. Returns `Ok(false)` at end of stream.
    ///
    /// The trailing `\n` (and a `\r` before it) is stripped before
    /// tokenizing. Groups not consumed from the previous line are discarded.
    pub fn advance(&mut self) -> io::Result<bool> {
        self.line.clear();
        let read = self.reader.read_until(b'\n', &mut self.line)?;
        if read == 0 {
            self.map = TokenMap::default();
            self.next_group = 1;
            return Ok(false);
        }
        if self.line.last() == Some(&b'\n') {
            self.line.pop();
            if self.line.last() == Some(&b'\r') {
                self.line.pop();
            }
        }
        self.map = self.tokenizer.tokenize(&self.line, self.max_groups);
        self.next_group = 1;
        self.line_number += 1;
        Ok(true)
    }

    /// The current line, newline stripped.
    #[inline]
    pub fn line(&self) -> &[u8] {
        &self.line
    }

    /// 1-based number of the current line (0 before the first [`advance`]).
    ///
    /// [`advance`]: LineCursor::advance
    #[inline]
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// The token map of the current line.
    #[inline]
    pub fn map(&self) -> &TokenMap {
        &self.map
    }

    /// Groups on the current line.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.map.word_count()
    }

    /// Groups not yet handed out on the current line.
    pub fn remaining(&self) -> usize {
        self.map.word_count().saturating_sub(self.next_group - 1)
    }

    /// The value parser used by the typed reads.
    pub fn parser_mut(&mut self) -> &mut ValueParser {
        &mut self.parser
    }

    /// The tokenizer. Delimiter changes apply from the next [`advance`].
    ///
    /// [`advance`]: LineCursor::advance
    pub fn tokenizer_mut(&mut self) -> &mut Tokenizer {
        &mut self.tokenizer
    }

    /// Hand back the next group on the current line, or `None` when the line
    /// is exhausted.
    pub fn next_token(&mut self) -> Option<&[u8]> {
        let span = self.map.group_span(self.next_group)?;
        self.next_group += 1;
        Some(&self.line[span.range()])
    }

    /// Next group parsed as a signed integer in `base`.
    pub fn next_i64(&mut self, base: u32) -> Option<Result<i64, ValueError>> {
        let span = self.map.group_span(self.next_group)?;
        self.next_group += 1;
        let token = &self.line[span.range()];
        Some(match std::str::from_utf8(token) {
            Ok(token) => self.parser.parse_i64(token, base),
            Err(_) => Err(ValueError::IllegalCharacter),
        })
    }

    /// Next group parsed as a float in `base`.
    pub fn next_f64(&mut self, base: u32) -> Option<Result<f64, ValueError>> {
        let span = self.map.group_span(self.next_group)?;
        self.next_group += 1;
        let token = &self.line[span.range()];
        Some(match std::str::from_utf8(token) {
            Ok(token) => self.parser.parse_f64(token, base),
            Err(_) => Err(ValueError::IllegalCharacter),
        })
    }

    /// Next group parsed as a boolean.
    pub fn next_bool(&mut self) -> Option<Result<bool, ValueError>> {
        let span = self.map.group_span(self.next_group)?;
        self.next_group += 1;
        let token = &self.line[span.range()];
        Some(match std::str::from_utf8(token) {
            Ok(token) => self.parser.parse_bool(token),
            Err(_) => Err(ValueError::IllegalCharacter),
        })
    }
}

//! Sift Core
//!
//! Multi-pattern line tokenizing and radix-aware value parsing.
//!
//! # Architecture
//!
//! - **pattern.rs** - delimiter patterns with precomputed failure tables
//! - **tokenizer.rs** - match-extent search and group-index reduction
//! - **value.rs** - base 1-62 integer/float/bool parsing, format styles
//! - **cursor.rs** - line-oriented cursor over a buffered reader
//! - **span.rs** - byte extents of groups within a line

pub mod cursor;
pub mod pattern;
pub mod span;
pub mod tokenizer;
pub mod value;

pub use cursor::LineCursor;
pub use pattern::{Pattern, PatternSet};
pub use span::Span;
pub use tokenizer::{Groups, MatchMode, TokenMap, Tokenizer};
pub use value::{BoolVocab, FormatStyle, ValueError, ValueParser, MAX_BASE, MIN_BASE};

//! Radix-aware value parsing with locale-style punctuation.
//!
//! [`ValueParser`] converts a single token into a signed/unsigned integer,
//! a float, or a boolean. Integers and floats parse in any base from 1
//! (unary tally) through 62 (digits + uppercase + lowercase), understand
//! `0x`/`0b` prefixes, and honor the active [`FormatStyle`]'s digit-group
//! separators and decimal marks. Booleans resolve through a caller-extensible
//! [`BoolVocab`].
//!
//! All configuration is owned by the parser instance; two parsers share
//! nothing. Every operation is a pure function of the token and the instance
//! state, surfacing failures as [`ValueError`] - never logging, never
//! retrying.

use std::collections::HashSet;
use std::fmt;

use phf::phf_set;

/// Lowest supported radix (unary tally).
pub const MIN_BASE: u32 = 1;
/// Highest supported radix (digits, then uppercase, then lowercase letters).
pub const MAX_BASE: u32 = 62;

static TRUE_DEFAULTS: phf::Set<&'static str> = phf_set! { "true", "1", "yes", "y", "t" };
static FALSE_DEFAULTS: phf::Set<&'static str> = phf_set! { "false", "0", "no", "n", "f" };

/// Regional convention for digit-group separators and decimal marks.
///
/// The separator and decimal sets of every style are disjoint. Exactly one
/// style is active per [`ValueParser`]; switching styles between parses never
/// affects values already parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatStyle {
    /// SI: space or underscore groups digits; period or comma is the decimal
    /// mark.
    #[default]
    Si,
    /// European: period, space, or underscore groups digits; comma is the
    /// decimal mark.
    Eu,
    /// English: comma, space, or underscore groups digits; period is the
    /// decimal mark.
    En,
}

impl FormatStyle {
    /// True if `b` is a digit-group separator under this style.
    #[inline]
    pub fn is_separator(self, b: u8) -> bool {
        match self {
            FormatStyle::Si => b == b' ' || b == b'_',
            FormatStyle::Eu => b == b'.' || b == b' ' || b == b'_',
            FormatStyle::En => b == b',' || b == b' ' || b == b'_',
        }
    }

    /// True if `b` is the decimal mark under this style.
    #[inline]
    pub fn is_decimal(self, b: u8) -> bool {
        match self {
            FormatStyle::Si => b == b'.' || b == b',',
            FormatStyle::Eu => b == b',',
            FormatStyle::En => b == b'.',
        }
    }
}

/// Error codes for value parsing.
///
/// Using an enum instead of String keeps errors Copy and allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ValueError {
    /// Requested base outside `1..=62`
    InvalidBase = 0,
    /// Digit is recognized but its value is too large for the base
    IllegalDigit,
    /// Byte is neither a digit, a separator, nor a decimal mark
    IllegalCharacter,
    /// Two separators in direct succession, or a repeated decimal mark
    IllegalSeparator,
    /// Token is in neither boolean vocabulary
    UnrecognizedBoolean,
}

impl ValueError {
    /// Get a human-readable message for this error code.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidBase => "base outside 1..=62",
            Self::IllegalDigit => "digit too large for base",
            Self::IllegalCharacter => "not a digit, separator, or decimal mark",
            Self::IllegalSeparator => "misplaced separator",
            Self::UnrecognizedBoolean => "unrecognized boolean token",
        }
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValueError {}

/// Case-insensitive true/false vocabularies.
///
/// Seeded with fixed defaults (`true/1/yes/y/t` and `false/0/no/n/f`) held in
/// static tables; callers may add words and remove what they added, but the
/// defaults survive any removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoolVocab {
    extra_true: HashSet<String>,
    extra_false: HashSet<String>,
}

impl BoolVocab {
    /// Vocabulary with only the fixed defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word to the true vocabulary (stored case-folded).
    pub fn add_true(&mut self, word: &str) {
        self.extra_true.insert(word.to_lowercase());
    }

    /// Add a word to the false vocabulary (stored case-folded).
    pub fn add_false(&mut self, word: &str) {
        self.extra_false.insert(word.to_lowercase());
    }

    /// Remove a caller-added true word. The fixed defaults always remain.
    pub fn remove_true(&mut self, word: &str) {
        self.extra_true.remove(&word.to_lowercase());
    }

    /// Remove a caller-added false word. The fixed defaults always remain.
    pub fn remove_false(&mut self, word: &str) {
        self.extra_false.remove(&word.to_lowercase());
    }

    /// Case-insensitive membership in the true vocabulary.
    pub fn is_true(&self, word: &str) -> bool {
        let folded = word.to_lowercase();
        TRUE_DEFAULTS.contains(folded.as_str()) || self.extra_true.contains(&folded)
    }

    /// Case-insensitive membership in the false vocabulary.
    pub fn is_false(&self, word: &str) -> bool {
        let folded = word.to_lowercase();
        FALSE_DEFAULTS.contains(folded.as_str()) || self.extra_false.contains(&folded)
    }
}

/// Converts string tokens into typed primitive values.
///
/// Owns the active [`FormatStyle`] and [`BoolVocab`]; both are mutable
/// between parses through [`set_style`](ValueParser::set_style) and
/// [`bools_mut`](ValueParser::bools_mut).
#[derive(Debug, Clone, Default)]
pub struct ValueParser {
    style: FormatStyle,
    bools: BoolVocab,
}

impl ValueParser {
    /// Parser with the default [`FormatStyle::Si`] style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with an explicit style.
    pub fn with_style(style: FormatStyle) -> Self {
        Self { style, bools: BoolVocab::new() }
    }

    /// The active format style.
    #[inline]
    pub fn style(&self) -> FormatStyle {
        self.style
    }

    /// Switch the active format style.
    pub fn set_style(&mut self, style: FormatStyle) {
        self.style = style;
    }

    /// The boolean vocabularies.
    #[inline]
    pub fn bools(&self) -> &BoolVocab {
        &self.bools
    }

    /// Mutable access to the boolean vocabularies.
    pub fn bools_mut(&mut self) -> &mut BoolVocab {
        &mut self.bools
    }

    // ========== Integers ==========

    /// Parse a signed integer in `base` (`1..=62`).
    ///
    /// Group separators are skipped, two in a row fail with
    /// [`ValueError::IllegalSeparator`]. Accumulation wraps on i64 overflow;
    /// the sign applies at the end.
    pub fn parse_i64(&self, token: &str, base: u32) -> Result<i64, ValueError> {
        check_base(base)?;
        let bytes = token.as_bytes();
        let (mut pos, negative, base) = self.preprocess(bytes, base);
        let mut value = 0i64;
        let mut after_separator = false;

        while pos < bytes.len() {
            let b = bytes[pos];
            pos += 1;
            if self.style.is_separator(b) {
                if after_separator {
                    return Err(ValueError::IllegalSeparator);
                }
                after_separator = true;
                continue;
            }
            after_separator = false;
            let digit = digit_value(b, base)?;
            value = match base {
                2 => value << 1,
                16 => value << 4,
                _ => value.wrapping_mul(base as i64),
            }
            .wrapping_add(digit as i64);
        }

        Ok(if negative { value.wrapping_neg() } else { value })
    }

    /// Parse an unsigned 64-bit integer: the signed wide result, narrowed.
    /// Negative inputs reinterpret as two's complement.
    pub fn parse_u64(&self, token: &str, base: u32) -> Result<u64, ValueError> {
        self.parse_i64(token, base).map(|v| v as u64)
    }

    /// Parse a signed 32-bit integer: the signed wide result, narrowed.
    pub fn parse_i32(&self, token: &str, base: u32) -> Result<i32, ValueError> {
        self.parse_i64(token, base).map(|v| v as i32)
    }

    /// Parse an unsigned 32-bit integer: the signed wide result, narrowed.
    pub fn parse_u32(&self, token: &str, base: u32) -> Result<u32, ValueError> {
        self.parse_i64(token, base).map(|v| v as u32)
    }

    // ========== Reals ==========

    /// Parse a float in `base` (`1..=62`).
    ///
    /// For base 10 the literals `NaN` (case-sensitive) and `inf`/`infinity`
    /// (case-insensitive, sign honored) short-circuit, and `e`/`E` switches
    /// the remainder of the token into a signed power-of-ten exponent. The
    /// first decimal mark flips into fractional mode; a second one fails with
    /// [`ValueError::IllegalSeparator`].
    pub fn parse_f64(&self, token: &str, base: u32) -> Result<f64, ValueError> {
        check_base(base)?;
        let bytes = token.as_bytes();

        if base == 10 {
            if token == "NaN" {
                return Ok(f64::NAN);
            }
            let (neg, rest) = match bytes.first() {
                Some(&b'-') => (true, &token[1..]),
                _ => (false, token),
            };
            if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
                return Ok(if neg { f64::NEG_INFINITY } else { f64::INFINITY });
            }
        }

        let (mut pos, negative, base) = self.preprocess(bytes, base);
        let mut value = 0f64;
        let mut divisor = 1f64;
        let mut fractional = false;
        let mut after_separator = false;

        while pos < bytes.len() {
            let b = bytes[pos];
            pos += 1;
            if base == 10 && (b == b'e' || b == b'E') {
                // Everything after the marker belongs to the exponent.
                let exponent = self.parse_i64(&token[pos..], 10)?;
                value *= pow_exp(10.0, exponent);
                break;
            }
            if self.style.is_separator(b) {
                if after_separator {
                    return Err(ValueError::IllegalSeparator);
                }
                after_separator = true;
                continue;
            }
            after_separator = false;
            if self.style.is_decimal(b) {
                if fractional {
                    // Separator and decimal sets are disjoint in every style,
                    // so a repeated decimal mark is never group punctuation.
                    return Err(ValueError::IllegalSeparator);
                }
                fractional = true;
                continue;
            }
            let digit = digit_value(b, base)? as f64;
            if fractional {
                divisor *= base as f64;
                value += digit / divisor;
            } else {
                value = value * base as f64 + digit;
            }
        }

        Ok(if negative { -value } else { value })
    }

    // ========== Booleans ==========

    /// Case-insensitive boolean lookup, false vocabulary first.
    pub fn parse_bool(&self, token: &str) -> Result<bool, ValueError> {
        if self.bools.is_false(token) {
            Ok(false)
        } else if self.bools.is_true(token) {
            Ok(true)
        } else {
            Err(ValueError::UnrecognizedBoolean)
        }
    }

    // ========== Non-failing forms ==========
    //
    // Same acceptance decisions as the Result forms; the default stands in
    // on any error.

    /// Non-failing [`parse_i64`](ValueParser::parse_i64).
    pub fn parse_i64_or(&self, token: &str, base: u32, default: i64) -> i64 {
        self.parse_i64(token, base).unwrap_or(default)
    }

    /// Non-failing [`parse_u64`](ValueParser::parse_u64).
    pub fn parse_u64_or(&self, token: &str, base: u32, default: u64) -> u64 {
        self.parse_u64(token, base).unwrap_or(default)
    }

    /// Non-failing [`parse_i32`](ValueParser::parse_i32).
    pub fn parse_i32_or(&self, token: &str, base: u32, default: i32) -> i32 {
        self.parse_i32(token, base).unwrap_or(default)
    }

    /// Non-failing [`parse_u32`](ValueParser::parse_u32).
    pub fn parse_u32_or(&self, token: &str, base: u32, default: u32) -> u32 {
        self.parse_u32(token, base).unwrap_or(default)
    }

    /// Non-failing [`parse_f64`](ValueParser::parse_f64).
    pub fn parse_f64_or(&self, token: &str, base: u32, default: f64) -> f64 {
        self.parse_f64(token, base).unwrap_or(default)
    }

    /// Non-failing [`parse_bool`](ValueParser::parse_bool).
    pub fn parse_bool_or(&self, token: &str, default: bool) -> bool {
        self.parse_bool(token).unwrap_or(default)
    }

    /// Shared sign/prefix preprocessing.
    ///
    /// Detects a leading `-`, then a case-insensitive `0x`/`0b` prefix
    /// (optionally followed by one separator), which overrides a requested
    /// base of 10, 16, or 2 to hexadecimal or binary respectively.
    fn preprocess(&self, bytes: &[u8], requested: u32) -> (usize, bool, u32) {
        let mut pos = 0;
        let negative = bytes.first() == Some(&b'-');
        if negative {
            pos = 1;
        }
        let mut base = requested;
        if matches!(requested, 2 | 10 | 16) && bytes.len() >= pos + 2 && bytes[pos] == b'0' {
            let tagged = match bytes[pos + 1].to_ascii_lowercase() {
                b'x' => Some(16),
                b'b' => Some(2),
                _ => None,
            };
            if let Some(tagged) = tagged {
                base = tagged;
                pos += 2;
                if pos < bytes.len() && self.style.is_separator(bytes[pos]) {
                    pos += 1;
                }
            }
        }
        (pos, negative, base)
    }
}

#[inline]
fn check_base(base: u32) -> Result<(), ValueError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(ValueError::InvalidBase)
    }
}

/// Case-sensitive-then-insensitive digit mapping.
///
/// `0-9` are 0-9, `A-Z` are 10-35, `a-z` are 36-61; a lowercase value
/// rejected by the base retries as its uppercase counterpart (10-35), which
/// is what lets hexadecimal read `a-f` as 10-15 while base 62 keeps `a-z` at
/// 36-61. Base 1 is a unary tally whose only digit is `1`.
fn digit_value(b: u8, base: u32) -> Result<u32, ValueError> {
    let raw = match b {
        b'0'..=b'9' => (b - b'0') as u32,
        b'A'..=b'Z' => (b - b'A') as u32 + 10,
        b'a'..=b'z' => (b - b'a') as u32 + 36,
        _ => return Err(ValueError::IllegalCharacter),
    };
    if base == 1 {
        return if raw == 1 { Ok(1) } else { Err(ValueError::IllegalDigit) };
    }
    if raw < base {
        return Ok(raw);
    }
    if b.is_ascii_lowercase() {
        let folded = raw - 26;
        if folded < base {
            return Ok(folded);
        }
    }
    Err(ValueError::IllegalDigit)
}

/// Exponentiation by squaring for the scientific-notation multiplier.
fn pow_exp(base: f64, exponent: i64) -> f64 {
    let mut acc = 1.0;
    let mut sq = base;
    let mut e = exponent.unsigned_abs();
    while e > 0 {
        if e & 1 == 1 {
            acc *= sq;
        }
        sq *= sq;
        e >>= 1;
    }
    if exponent < 0 {
        acc.recip()
    } else {
        acc
    }
}

//! Compiled `*` / `?` glob patterns.
//!
//! A pattern is parsed once by [`compile`] into an immutable [`Pattern`]
//! and then queried many times with [`Pattern::matches`] (whole range) or
//! [`Pattern::find`] (leftmost, shortest span). Nothing inside a `Pattern`
//! changes after construction, so one instance can be shared across threads.

mod compile;
mod find;
mod matching;
pub(crate) mod region;

use std::fmt;

pub use compile::compile;

/// One position inside a compiled segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Matches this char (case-folded when the pattern ignores case).
    Char(char),
    /// An unescaped `?`: matches any single char.
    AnyChar,
}

/// Literal material between two unescaped `*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    tokens: Vec<Token>,
    /// Plain-text form, present only when the segment has no `AnyChar`.
    literal: Option<String>,
}

impl Segment {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        let literal = tokens
            .iter()
            .map(|t| match t {
                Token::Char(c) => Some(*c),
                Token::AnyChar => None,
            })
            .collect::<Option<String>>();
        Self { tokens, literal }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The segment as plain text, or `None` if it contains a `?` wildcard.
    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Number of chars this segment consumes.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A compiled glob pattern.
///
/// Built by [`compile`] or [`Pattern::new`]. Equality compares the raw
/// pattern and both flags, which fully determine the compiled form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    raw: String,
    /// Char count of `raw`.
    len: usize,
    ignore_case: bool,
    literal: bool,
    leading_star: bool,
    trailing_star: bool,
    segments: Vec<Segment>,
    /// Sum of segment lengths: the fewest chars any match can span.
    min_len: usize,
}

impl Pattern {
    /// Compile `raw`. Same as [`compile`].
    #[must_use]
    pub fn new(raw: &str, ignore_case: bool, literal: bool) -> Self {
        compile(raw, ignore_case, literal)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Char count of the raw pattern.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// True when `*`, `?` and `\` carry no special meaning.
    pub fn is_literal(&self) -> bool {
        self.literal
    }

    pub fn has_leading_star(&self) -> bool {
        self.leading_star
    }

    pub fn has_trailing_star(&self) -> bool {
        self.trailing_star
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Lower bound on the length (in chars) of any text this pattern matches.
    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Narrow `start..end` of `text` to a valid sub-slice.
/// `end` is clamped to the text length; an inverted range or one that
/// splits a UTF-8 char yields `None`.
pub(crate) fn clamp(text: &str, start: usize, end: usize) -> Option<(usize, &str)> {
    let end = end.min(text.len());
    if start > end {
        return None;
    }
    text.get(start..end).map(|hay| (start, hay))
}

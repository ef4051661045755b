use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A matched span: byte offsets into the searched text, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

impl Position {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted position {start}..{end}");
        Self { start, end }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// What a filter run asks of each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The whole line (or range) must match the glob.
    #[default]
    Match,
    /// The glob must occur somewhere; report where.
    Find,
    /// Classify the pattern as a search query (exact, prefix, camel case, glob).
    Query,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Match => write!(f, "match"),
            Self::Find => write!(f, "find"),
            Self::Query => write!(f, "query"),
        }
    }
}

/// Parse a `START..END` byte range. Either side may be omitted:
/// `..END`, `START..`, `..`. Negative offsets clamp to 0.
pub fn parse_range(s: &str) -> Option<(usize, usize)> {
    let (start, end) = s.trim().split_once("..")?;
    let start = match start.trim() {
        "" => 0,
        n => parse_offset(n)?,
    };
    let end = match end.trim() {
        "" => usize::MAX,
        n => parse_offset(n)?,
    };
    Some((start, end))
}

fn parse_offset(n: &str) -> Option<usize> {
    match n.strip_prefix('-') {
        Some(abs) => abs.parse::<usize>().ok().map(|_| 0),
        None => n.parse().ok(),
    }
}

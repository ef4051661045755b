use super::{Pattern, Segment, Token};

/// Compile `raw` into a [`Pattern`].
///
/// Non-literal syntax: `*` matches any run of chars, `?` matches one char,
/// and `\` escapes `*`, `?` or `\`. A backslash before any other char (or
/// at the end of the pattern) is kept as a literal backslash.
///
/// With `literal` set, every char is matched as-is and the whole pattern
/// becomes a single segment.
#[must_use]
pub fn compile(raw: &str, ignore_case: bool, literal: bool) -> Pattern {
    let len = raw.chars().count();

    let pattern = if literal {
        Pattern {
            raw: raw.to_string(),
            len,
            ignore_case,
            literal: true,
            leading_star: false,
            trailing_star: false,
            segments: vec![Segment::new(raw.chars().map(Token::Char).collect())],
            min_len: len,
        }
    } else {
        let segments = split_segments(raw);
        let min_len = segments.iter().map(Segment::len).sum();
        Pattern {
            raw: raw.to_string(),
            len,
            ignore_case,
            literal: false,
            leading_star: raw.starts_with('*'),
            trailing_star: has_trailing_star(raw),
            segments,
            min_len,
        }
    };

    tracing::debug!(
        pattern = raw,
        segments = pattern.segments.len(),
        min_len = pattern.min_len,
        ignore_case,
        literal,
        "compiled pattern"
    );
    pattern
}

/// A trailing `*` counts unless the char right before it is a backslash.
/// Only one char of lookback: `\\*` is treated as an escaped star here even
/// though the scanner reads it as an escaped backslash plus a real `*`.
fn has_trailing_star(raw: &str) -> bool {
    let mut rev = raw.chars().rev();
    match (rev.next(), rev.next()) {
        (Some('*'), Some(before)) => before != '\\',
        _ => false,
    }
}

/// Split on unescaped `*`, resolving escapes and `?` along the way.
/// Empty segments (from leading, trailing or doubled stars) are dropped.
fn split_segments(raw: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut buf: Vec<Token> = Vec::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&(next @ ('*' | '?' | '\\'))) => {
                    buf.push(Token::Char(next));
                    chars.next();
                }
                // Not an escape: the backslash stays, the next char is
                // handled on its own iteration.
                _ => buf.push(Token::Char('\\')),
            },
            '*' => {
                if !buf.is_empty() {
                    segments.push(Segment::new(std::mem::take(&mut buf)));
                }
            }
            '?' => buf.push(Token::AnyChar),
            _ => buf.push(Token::Char(c)),
        }
    }
    if !buf.is_empty() {
        segments.push(Segment::new(buf));
    }
    segments
}

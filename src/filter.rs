use rayon::prelude::*;
use serde::Serialize;

use crate::pattern::Pattern;
use crate::query::SearchQuery;
use crate::types::{Mode, Position};

/// What each line is tested with. The compiled matcher is shared read-only
/// by every worker.
#[derive(Debug, Clone)]
pub enum Selector {
    Match(Pattern),
    Find(Pattern),
    Query(SearchQuery),
}

impl Selector {
    /// Build the selector for `mode`. `ignore_case` and `literal` apply to
    /// glob modes only; queries decide their own case handling.
    #[must_use]
    pub fn new(pattern: &str, mode: Mode, ignore_case: bool, literal: bool) -> Self {
        match mode {
            Mode::Match => Self::Match(Pattern::new(pattern, ignore_case, literal)),
            Mode::Find => Self::Find(Pattern::new(pattern, ignore_case, literal)),
            Mode::Query => Self::Query(SearchQuery::new(pattern)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Match(_) => Mode::Match,
            Self::Find(_) => Mode::Find,
            Self::Query(_) => Mode::Query,
        }
    }

    /// Test one line. `Some(span)` on a hit; the span is only known in find mode.
    fn select(&self, line: &str, (start, end): (usize, usize)) -> Option<Option<Position>> {
        match self {
            Self::Match(p) => p.matches(line, start, end).then_some(None),
            Self::Find(p) => p.find(line, start, end).map(Some),
            Self::Query(q) => q.matches(line).then_some(None),
        }
    }
}

/// A selected input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Position>,
}

/// Result of filtering a block of text.
#[derive(Debug, Clone, Serialize)]
pub struct FilterResult {
    pub pattern: String,
    pub mode: Mode,
    pub total_lines: usize,
    pub matches: Vec<LineMatch>,
}

/// Test every line of `input` against `selector`, in parallel.
/// `range` restricts glob modes to a byte range within each line.
/// Matches come back in input order.
#[must_use]
pub fn filter_lines(
    input: &str,
    pattern: &str,
    selector: &Selector,
    range: Option<(usize, usize)>,
) -> FilterResult {
    let lines: Vec<&str> = input.lines().collect();

    let matches: Vec<LineMatch> = lines
        .par_iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let bounds = range.unwrap_or((0, line.len()));
            selector.select(line, bounds).map(|span| LineMatch {
                line: i + 1,
                text: (*line).to_string(),
                span,
            })
        })
        .collect();

    tracing::trace!(
        pattern,
        mode = %selector.mode(),
        lines = lines.len(),
        matched = matches.len(),
        "filtered"
    );

    FilterResult {
        pattern: pattern.to_string(),
        mode: selector.mode(),
        total_lines: lines.len(),
        matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &str = "main.rs\nlib.rs\nREADME.md\nCargo.toml\nbuild.RS\n";

    fn lines(result: &FilterResult) -> Vec<usize> {
        result.matches.iter().map(|m| m.line).collect()
    }

    #[test]
    fn match_mode_keeps_order() {
        let sel = Selector::new("*.rs", Mode::Match, false, false);
        let result = filter_lines(NAMES, "*.rs", &sel, None);
        assert_eq!(result.total_lines, 5);
        assert_eq!(lines(&result), vec![1, 2]);
        assert!(result.matches.iter().all(|m| m.span.is_none()));
    }

    #[test]
    fn ignore_case_applies() {
        let sel = Selector::new("*.rs", Mode::Match, true, false);
        let result = filter_lines(NAMES, "*.rs", &sel, None);
        assert_eq!(lines(&result), vec![1, 2, 5]);
    }

    #[test]
    fn find_mode_reports_spans() {
        let sel = Selector::new("a*n", Mode::Find, false, false);
        let result = filter_lines(NAMES, "a*n", &sel, None);
        assert_eq!(lines(&result), vec![1]);
        assert_eq!(result.matches[0].span, Some(Position::new(1, 4)));
    }

    #[test]
    fn query_mode() {
        let sel = Selector::new("read", Mode::Query, false, false);
        let result = filter_lines(NAMES, "read", &sel, None);
        assert_eq!(lines(&result), vec![3]);
        assert_eq!(result.mode, Mode::Query);
    }

    #[test]
    fn range_restricts_each_line() {
        let sel = Selector::new("*", Mode::Find, false, false);
        let result = filter_lines("abcdef\nxy\n", "*", &sel, Some((2, 4)));
        // "xy" has nothing left after clamping 2..2
        assert_eq!(lines(&result), vec![1]);
        assert_eq!(result.matches[0].span, Some(Position::new(2, 4)));
    }

    #[test]
    fn empty_input() {
        let sel = Selector::new("*", Mode::Match, false, false);
        let result = filter_lines("", "*", &sel, None);
        assert_eq!(result.total_lines, 0);
        assert!(result.matches.is_empty());
    }
}

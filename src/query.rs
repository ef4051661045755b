//! Search-box queries: one typed string, classified into a match kind.
//!
//! `Foo<` and `foo ` ask for an exact name, anything with `*` or `?` is a
//! glob with an implicit trailing star, a query with an uppercase letter is
//! a camel-case abbreviation (`NPE` → `NullPointerException`), and
//! everything else is a case-insensitive prefix.

use std::ops::BitOr;

use crate::pattern::{Pattern, region::chars_eq};

/// Terminates a query: match the name exactly.
const END_SYMBOL: char = '<';
const BLANK: char = ' ';
const ANY_STRING: char = '*';

/// How a [`SearchQuery`] compares names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Prefix,
    Pattern,
    CamelCase,
}

/// Set of match kinds a caller is willing to use. Exact is always allowed:
/// a query classified into a disallowed kind falls back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowedKinds(u8);

impl AllowedKinds {
    pub const EXACT: Self = Self(0);
    pub const PREFIX: Self = Self(1);
    pub const PATTERN: Self = Self(1 << 1);
    pub const CAMEL_CASE: Self = Self(1 << 2);
    pub const ALL: Self = Self(Self::PREFIX.0 | Self::PATTERN.0 | Self::CAMEL_CASE.0);

    #[must_use]
    pub fn allows(self, kind: MatchKind) -> bool {
        let bit = match kind {
            MatchKind::Exact => return true,
            MatchKind::Prefix => Self::PREFIX,
            MatchKind::Pattern => Self::PATTERN,
            MatchKind::CamelCase => Self::CAMEL_CASE,
        };
        self.0 & bit.0 != 0
    }
}

impl BitOr for AllowedKinds {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A classified query, ready to test names against.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pattern: String,
    kind: MatchKind,
    /// Compiled only for [`MatchKind::Pattern`].
    glob: Option<Pattern>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self::with_kinds(query, AllowedKinds::ALL)
    }

    #[must_use]
    pub fn with_kinds(query: &str, allowed: AllowedKinds) -> Self {
        let (kind, pattern) = classify(query);
        let kind = if allowed.allows(kind) {
            kind
        } else {
            MatchKind::Exact
        };
        let glob = (kind == MatchKind::Pattern).then(|| Pattern::new(&pattern, true, false));

        tracing::debug!(query, ?kind, pattern = %pattern, "classified query");
        Self {
            pattern,
            kind,
            glob,
        }
    }

    /// The effective pattern after classification (terminators stripped,
    /// implicit `*` appended).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match (self.kind, &self.glob) {
            (MatchKind::Pattern, Some(glob)) => glob.is_match(name),
            (MatchKind::Exact, _) => eq_ignore_case(&self.pattern, name),
            (MatchKind::CamelCase, _) => {
                camel_case_match(&self.pattern, name) || starts_with_ignore_case(name, &self.pattern)
            }
            _ => starts_with_ignore_case(name, &self.pattern),
        }
    }
}

/// Decide the match kind and the effective pattern text.
fn classify(query: &str) -> (MatchKind, String) {
    let Some(last) = query.chars().last() else {
        return (MatchKind::Exact, String::new());
    };

    if query.contains(['*', '?']) {
        let pattern = match last {
            END_SYMBOL => query[..query.len() - 1].to_string(),
            BLANK => query.trim().to_string(),
            ANY_STRING => query.to_string(),
            _ => format!("{query}{ANY_STRING}"),
        };
        return (MatchKind::Pattern, pattern);
    }

    match last {
        END_SYMBOL => (MatchKind::Exact, query[..query.len() - 1].to_string()),
        BLANK => (MatchKind::Exact, query.trim().to_string()),
        _ if query.chars().any(char::is_uppercase) => (MatchKind::CamelCase, query.to_string()),
        _ => (MatchKind::Prefix, query.to_string()),
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_eq(x, y, true))
}

/// Case-insensitive prefix test. Chars are folded the same way the glob
/// matcher folds them: equal uppercase or equal lowercase forms.
#[must_use]
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut hay = text.chars();
    prefix
        .chars()
        .all(|p| hay.next().is_some_and(|t| chars_eq(t, p, true)))
}

/// Camel-case abbreviation match.
///
/// The first chars must be identical. After that, equal chars advance both
/// sides; an unequal pattern char must be uppercase, and the name skips
/// ahead to its next uppercase char, which must equal it.
///
/// `NPE` and `NuPoEx` match `NullPointerException`; `npe` does not.
#[must_use]
pub fn camel_case_match(pattern: &str, name: &str) -> bool {
    let mut pat = pattern.chars();
    let mut nm = name.chars();

    let Some(first) = pat.next() else {
        return name.is_empty();
    };
    if nm.next() != Some(first) {
        return false;
    }

    for p in pat {
        let Some(n) = nm.next() else {
            return false;
        };
        if p == n {
            continue;
        }
        if !p.is_uppercase() {
            return false;
        }
        // Skip lowercase name chars up to the next hump
        let mut n = n;
        while !n.is_uppercase() {
            let Some(next) = nm.next() else {
                return false;
            };
            n = next;
        }
        if n != p {
            return false;
        }
    }
    true
}

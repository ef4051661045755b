//! Region comparison: the primitive under every match and find.
//!
//! Offsets are byte offsets into a `&str`; each token consumes one char.
//! Functions return the end offset of the compared region so callers can
//! advance past chars of any UTF-8 width.

use super::{Segment, Token};

/// Char equality, optionally case-insensitive.
/// Both the uppercase and the lowercase mappings are tried: neither is the
/// inverse of the other for every script.
#[inline]
pub(crate) fn chars_eq(a: char, b: char, ignore_case: bool) -> bool {
    a == b
        || (ignore_case
            && (a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())))
}

/// Compare `lit` against `text` starting at byte `at`. No wildcard checks.
pub(crate) fn literal_region(text: &str, at: usize, lit: &str, ignore_case: bool) -> Option<usize> {
    if !ignore_case {
        return text[at..].starts_with(lit).then_some(at + lit.len());
    }
    let mut end = at;
    let mut hay = text[at..].chars();
    for p in lit.chars() {
        let t = hay.next()?;
        if !chars_eq(t, p, true) {
            return None;
        }
        end += t.len_utf8();
    }
    Some(end)
}

/// Compare `tokens` against `text` starting at byte `at`; `AnyChar` accepts
/// any char.
pub(crate) fn token_region(
    text: &str,
    at: usize,
    tokens: &[Token],
    ignore_case: bool,
) -> Option<usize> {
    let mut end = at;
    let mut hay = text[at..].chars();
    for token in tokens {
        let t = hay.next()?;
        match *token {
            Token::AnyChar => {}
            Token::Char(p) if chars_eq(t, p, ignore_case) => {}
            Token::Char(_) => return None,
        }
        end += t.len_utf8();
    }
    Some(end)
}

impl Segment {
    /// Does this segment match `text` exactly at byte `at`?
    /// Returns the end of the matched region.
    pub(crate) fn match_at(&self, text: &str, at: usize, ignore_case: bool) -> Option<usize> {
        match &self.literal {
            Some(lit) => literal_region(text, at, lit, ignore_case),
            None => token_region(text, at, &self.tokens, ignore_case),
        }
    }

    /// Leftmost occurrence of this segment in `text[from..]`, as byte
    /// offsets `(start, end)` into `text`.
    pub(crate) fn find_from(
        &self,
        text: &str,
        from: usize,
        ignore_case: bool,
    ) -> Option<(usize, usize)> {
        if let (Some(lit), false) = (&self.literal, ignore_case) {
            // Any byte match of valid UTF-8 in valid UTF-8 lands on char boundaries
            return memchr::memmem::find(&text.as_bytes()[from..], lit.as_bytes())
                .map(|i| (from + i, from + i + lit.len()));
        }

        debug_assert!(!self.is_empty(), "compiled segments are never empty");
        let need = self.len();
        for (i, _) in text[from..].char_indices() {
            let at = from + i;
            // Fewer bytes than tokens left means fewer chars than tokens
            if text.len() - at < need {
                break;
            }
            if let Some(end) = self.match_at(text, at, ignore_case) {
                return Some((at, end));
            }
        }
        None
    }

    /// Does this segment end exactly at the end of `text`, starting no
    /// earlier than byte `floor`? Returns the start of the match.
    pub(crate) fn match_suffix(&self, text: &str, floor: usize, ignore_case: bool) -> Option<usize> {
        debug_assert!(!self.is_empty(), "compiled segments are never empty");
        let start = text[floor..]
            .char_indices()
            .rev()
            .nth(self.len() - 1)
            .map(|(i, _)| floor + i)?;
        (self.match_at(text, start, ignore_case)? == text.len()).then_some(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(raw: &str) -> Segment {
        Segment::new(
            raw.chars()
                .map(|c| if c == '?' { Token::AnyChar } else { Token::Char(c) })
                .collect(),
        )
    }

    #[test]
    fn case_folding() {
        assert!(chars_eq('a', 'A', true));
        assert!(!chars_eq('a', 'A', false));
        assert!(chars_eq('é', 'É', true));
        // Final sigma lowercases differently from capital sigma's lowercase
        assert!(chars_eq('ς', 'Σ', true));
        assert!(!chars_eq('a', 'b', true));
    }

    #[test]
    fn literal_region_matches() {
        assert_eq!(literal_region("foobar", 3, "bar", false), Some(6));
        assert_eq!(literal_region("foobar", 3, "BAR", false), None);
        assert_eq!(literal_region("foobar", 3, "BAR", true), Some(6));
        assert_eq!(literal_region("foo", 2, "oo", true), None); // runs off the end
        assert_eq!(literal_region("foo", 1, "", true), Some(1));
    }

    #[test]
    fn token_region_wildcards() {
        let tokens = [Token::Char('a'), Token::AnyChar, Token::Char('c')];
        assert_eq!(token_region("abc", 0, &tokens, false), Some(3));
        assert_eq!(token_region("aéc", 0, &tokens, false), Some(4));
        assert_eq!(token_region("Abc", 0, &tokens, false), None);
        assert_eq!(token_region("Abc", 0, &tokens, true), Some(3));
        assert_eq!(token_region("ab", 0, &tokens, false), None);
    }

    #[test]
    fn find_from_literal_fast_path() {
        let s = seg("ab");
        assert_eq!(s.find_from("xxabxab", 0, false), Some((2, 4)));
        assert_eq!(s.find_from("xxabxab", 3, false), Some((5, 7)));
        assert_eq!(s.find_from("xxabxab", 6, false), None);
    }

    #[test]
    fn find_from_case_insensitive() {
        let s = seg("ab");
        assert_eq!(s.find_from("xxABx", 0, false), None);
        assert_eq!(s.find_from("xxABx", 0, true), Some((2, 4)));
    }

    #[test]
    fn find_from_wildcard() {
        let s = seg("a?");
        assert_eq!(s.find_from("xyaé", 0, false), Some((2, 5)));
        assert_eq!(s.find_from("xya", 0, false), None);
    }

    #[test]
    fn suffix_respects_floor() {
        let s = seg("ab");
        assert_eq!(s.match_suffix("xxab", 0, false), Some(2));
        assert_eq!(s.match_suffix("xxab", 2, false), Some(2));
        assert_eq!(s.match_suffix("xxab", 3, false), None);
        assert_eq!(s.match_suffix("xxba", 0, false), None);
        assert_eq!(seg("?b").match_suffix("éb", 0, false), Some(0));
    }
}

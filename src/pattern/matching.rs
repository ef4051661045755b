use super::{Pattern, clamp};

impl Pattern {
    /// Does `text[start..end]` match this pattern in its entirety?
    ///
    /// An inverted range never matches. Outside literal mode, a pattern of
    /// only stars matches any range and an empty range matches only the
    /// empty pattern, wherever the range lies. Otherwise `end` is clamped to
    /// `text.len()`, and a range that ends up inverted or splits a UTF-8
    /// char does not match.
    #[must_use]
    pub fn matches(&self, text: &str, start: usize, end: usize) -> bool {
        if start > end {
            return false;
        }
        if !self.literal {
            if self.segments.is_empty() && (self.leading_star || self.trailing_star) {
                return true;
            }
            if start == end {
                return self.len == 0;
            }
        }
        clamp(text, start, end).is_some_and(|(_, hay)| self.matches_whole(hay))
    }

    /// Does the whole of `text` match?
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.matches_whole(text)
    }

    fn matches_whole(&self, hay: &str) -> bool {
        let ic = self.ignore_case;

        if self.literal {
            return self.segments[0].match_at(hay, 0, ic) == Some(hay.len());
        }

        if self.segments.is_empty() {
            // Only stars match everything; the empty pattern only matches nothing
            return self.leading_star || self.trailing_star || hay.is_empty();
        }

        // Byte length bounds char count from above, so this never rejects a match.
        // Also covers the empty range: every segment has at least one char.
        if hay.len() < self.min_len {
            return false;
        }

        let segs = &self.segments;
        let last = segs.len() - 1;
        let mut cursor = 0;
        let mut i = 0;

        if !self.leading_star {
            let Some(end) = segs[0].match_at(hay, 0, ic) else {
                return false;
            };
            cursor = end;
            i = 1;
            if last == 0 && !self.trailing_star {
                return cursor == hay.len();
            }
        }

        // Segments located by forward search. The last one is anchored at
        // the end instead, unless a trailing star frees it.
        let searched = if self.trailing_star { segs.len() } else { last };
        while i < searched {
            let Some((_, end)) = segs[i].find_from(hay, cursor, ic) else {
                return false;
            };
            cursor = end;
            i += 1;
        }

        if self.trailing_star {
            return true;
        }
        segs[last].match_suffix(hay, cursor, ic).is_some()
    }
}

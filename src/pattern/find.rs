use super::{Pattern, clamp};
use crate::types::Position;

impl Pattern {
    /// Leftmost match inside `text[start..end]`.
    ///
    /// Segments are located greedily, each at its first occurrence after
    /// the previous one, with no backtracking. For patterns with interior
    /// stars this yields the shortest span starting at the leftmost match:
    /// `a*b` in `axbyb` finds `0..3`, not `0..5`. Leading and trailing stars
    /// do not widen the span.
    ///
    /// An empty pattern finds the empty span at `start`. Offsets in the
    /// returned [`Position`] index into `text`, not into the range.
    #[must_use]
    pub fn find(&self, text: &str, start: usize, end: usize) -> Option<Position> {
        let (offset, hay) = clamp(text, start, end)?;
        let found = self.find_within(hay)?;
        Some(Position::new(offset + found.start, offset + found.end))
    }

    /// Leftmost match anywhere in `text`.
    #[must_use]
    pub fn find_in(&self, text: &str) -> Option<Position> {
        self.find_within(text)
    }

    fn find_within(&self, hay: &str) -> Option<Position> {
        if self.len == 0 {
            return Some(Position::new(0, 0));
        }
        if hay.is_empty() {
            return None;
        }

        let ic = self.ignore_case;

        if self.literal {
            let (s, e) = self.segments[0].find_from(hay, 0, ic)?;
            return Some(Position::new(s, e));
        }

        let Some((first, rest)) = self.segments.split_first() else {
            // Only stars: the whole range
            return Some(Position::new(0, hay.len()));
        };

        let (match_start, mut cursor) = first.find_from(hay, 0, ic)?;
        for seg in rest {
            let (_, end) = seg.find_from(hay, cursor, ic)?;
            cursor = end;
        }
        Some(Position::new(match_start, cursor))
    }
}

//! Byte spans into the scanned source.

use std::fmt;

/// Half-open `start..end` byte range.
///
/// Offsets are `u32`; [`scan`](crate::scan) rejects larger sources, so
/// every span it produces fits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// `start <= offset < end`.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        (self.start..self.end).contains(&offset)
    }

    /// `other` lies entirely inside `self`.
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The spans share at least one byte. Touching spans do not overlap.
    #[inline]
    pub fn overlaps(&self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    #[inline]
    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }

    /// The slice of `source` this span covers, or `""` if it is out of
    /// bounds or splits a character.
    pub fn text(self, source: &str) -> &str {
        source.get(self.to_range()).unwrap_or_default()
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        let span = Span::new(4, 9);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let span = Span::new(2, 5);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn overlaps_excludes_touching_spans() {
        assert!(Span::new(0, 4).overlaps(Span::new(3, 6)));
        assert!(!Span::new(0, 4).overlaps(Span::new(4, 6)));
        assert!(Span::new(0, 10).contains_span(Span::new(4, 6)));
        assert!(!Span::new(0, 10).contains_span(Span::new(4, 11)));
    }

    #[test]
    fn text_slices_source() {
        let source = "let x = 1;";
        assert_eq!(Span::new(4, 5).text(source), "x");
        assert_eq!(Span::new(4, 99).text(source), "");
        assert_eq!(Span::new(1, 2).text("\u{e9}"), "");
    }

    #[test]
    fn debug_and_display_use_range_syntax() {
        assert_eq!(format!("{:?}", Span::new(1, 7)), "1..7");
        assert_eq!(Span::new(1, 7).to_string(), "1..7");
    }
}

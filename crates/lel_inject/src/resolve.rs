//! Injection span resolution.
//!
//! A labeled literal's content span, minus its interpolation slots and line
//! continuations, is the set of ranges handed to the sublanguage. Escapes
//! stay inside the ranges; the sublanguage grammar sees them verbatim.

use std::fmt;

use lel_lexer_core::{Delimiter, Literal, Span};

/// Byte ranges of one literal to parse as an embedded language.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InjectionSpan {
    /// The whole literal, delimiters included.
    pub literal: Span,
    pub delimiter: Delimiter,
    /// Canonical language identifier from the registry.
    pub language: String,
    /// Non-empty, non-overlapping, ascending ranges inside the literal.
    pub ranges: Vec<Span>,
}

impl InjectionSpan {
    /// Source text of each range.
    pub fn content<'s>(&self, source: &'s str) -> Vec<&'s str> {
        self.ranges.iter().map(|r| r.text(source)).collect()
    }
}

impl fmt::Display for InjectionSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [", self.language, self.literal)?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{range}")?;
        }
        f.write_str("]")
    }
}

/// Content span of `literal` with slots and continuations removed.
///
/// Ranges come out in ascending order. Empty gaps are skipped, so a
/// literal whose content is entirely interpolations yields nothing.
pub fn content_ranges(literal: &Literal) -> Vec<Span> {
    let content = literal.content_span();

    let mut excluded: Vec<Span> = literal
        .slots
        .iter()
        .map(|slot| slot.span)
        .chain(literal.continuations.iter().copied())
        .collect();
    excluded.sort_unstable_by_key(|span| span.start);

    let mut ranges = Vec::with_capacity(excluded.len() + 1);
    let mut start = content.start;
    for hole in excluded {
        if hole.start > start {
            ranges.push(Span::new(start, hole.start));
        }
        start = start.max(hole.end);
    }
    if content.end > start {
        ranges.push(Span::new(start, content.end));
    }
    ranges
}

/// Build the injection for `literal` if its label resolved to a language.
pub fn resolve(literal: &Literal, language: Option<&str>) -> Option<InjectionSpan> {
    let language = language?;
    Some(InjectionSpan {
        literal: literal.span,
        delimiter: literal.delimiter,
        language: language.to_owned(),
        ranges: content_ranges(literal),
    })
}

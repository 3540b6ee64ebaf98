//! Scan output: tokens and literal structure.

use crate::{Span, Tag, TokenKind};

/// A scanned token.
///
/// Literal tokens carry their [`Literal`] structure. Template literals own
/// the tokens scanned inside their interpolation slots, so a top-level token
/// sequence never overlaps itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub tag: Tag,
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: u32,
    pub literal: Option<Box<Literal>>,
}

impl Token {
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.tag.kind()
    }

    /// Exact source text of the token.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.text(source)
    }

    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_deref()
    }
}

/// Opening and closing delimiter of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    SingleQuote,
    DoubleQuote,
    Backtick,
}

impl Delimiter {
    pub const fn byte(self) -> u8 {
        match self {
            Delimiter::SingleQuote => b'\'',
            Delimiter::DoubleQuote => b'"',
            Delimiter::Backtick => b'`',
        }
    }

    pub const fn tag(self) -> Tag {
        match self {
            Delimiter::SingleQuote => Tag::SingleQuoted,
            Delimiter::DoubleQuote => Tag::DoubleQuoted,
            Delimiter::Backtick => Tag::Template,
        }
    }

    #[inline]
    pub const fn is_template(self) -> bool {
        matches!(self, Delimiter::Backtick)
    }
}

/// Structure of a string or template literal.
///
/// All offsets are absolute byte offsets into the scanned source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    pub delimiter: Delimiter,
    /// Full literal, delimiters included.
    pub span: Span,
    /// `${...}` slots in source order. Always empty for quoted strings.
    pub slots: Vec<InterpolationSlot>,
    /// Backslash + line break markers in source order.
    pub continuations: Vec<Span>,
    /// Offsets of escaping backslashes (continuations excluded).
    pub escapes: Vec<u32>,
}

impl Literal {
    /// Open a literal at `start`; `span.end` is fixed when it closes.
    pub(crate) fn open(delimiter: Delimiter, start: u32) -> Self {
        Literal {
            delimiter,
            span: Span::new(start, start),
            slots: Vec::new(),
            continuations: Vec::new(),
            escapes: Vec::new(),
        }
    }

    /// Span between the opening and closing delimiters.
    ///
    /// A closed literal is always at least two bytes long.
    pub fn content_span(&self) -> Span {
        Span::new(self.span.start + 1, self.span.end - 1)
    }

    /// Source text of the whole literal, delimiters included.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.text(source)
    }
}

/// Nested templates form a tree as deep as the source nests them, so the
/// slot tokens are released from a heap work list instead of recursively.
impl Drop for Literal {
    fn drop(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        let mut pending: Vec<Token> = Vec::new();
        for slot in self.slots.drain(..) {
            pending.extend(slot.tokens);
        }
        while let Some(mut token) = pending.pop() {
            if let Some(literal) = token.literal.as_deref_mut() {
                for slot in literal.slots.drain(..) {
                    pending.extend(slot.tokens);
                }
            }
        }
    }
}

/// One `${...}` interpolation slot of a template literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpolationSlot {
    /// From `$` through the closing `}` inclusive.
    pub span: Span,
    /// Host-language tokens between `${` and `}`.
    pub tokens: Vec<Token>,
}

impl InterpolationSlot {
    /// Span of the host expression, without `${` and `}`.
    pub fn expression_span(&self) -> Span {
        Span::new(self.span.start + 2, self.span.end - 1)
    }
}

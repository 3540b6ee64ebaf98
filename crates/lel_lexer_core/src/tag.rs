//! Token tags.
//!
//! [`Tag`] is the scanner's fine-grained, one-byte classification.
//! [`TokenKind`] is the coarse four-way view (comment, string, template,
//! other) that consumers and errors speak in.

use std::fmt;

/// Fine-grained token classification.
///
/// Discriminants are grouped in semantic ranges:
/// - Comments: 0-15
/// - Literals: 16-31
/// - Trivia: 112-127
/// - Catch-all: 128
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    // === Comments ===
    /// `// ...` up to (not including) the line break.
    LineComment = 0,
    /// `/* ... */`, may span lines.
    BlockComment = 1,

    // === Literals ===
    /// `'...'`
    SingleQuoted = 16,
    /// `"..."`
    DoubleQuoted = 17,
    /// `` `...` ``, possibly with `${...}` interpolation slots.
    Template = 18,

    // === Trivia ===
    /// Spaces and tabs.
    Whitespace = 112,
    /// `\n`, `\r\n`, or a lone `\r`.
    Newline = 113,

    // === Catch-all ===
    /// Any other host-language text.
    Other = 128,
}

impl Tag {
    /// Coarse kind of this tag.
    pub const fn kind(self) -> TokenKind {
        match self {
            Tag::LineComment | Tag::BlockComment => TokenKind::Comment,
            Tag::SingleQuoted | Tag::DoubleQuoted => TokenKind::String,
            Tag::Template => TokenKind::Template,
            Tag::Whitespace | Tag::Newline | Tag::Other => TokenKind::Other,
        }
    }

    /// `true` for whitespace and line breaks.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Tag::Whitespace | Tag::Newline)
    }

    /// `true` for line and block comments.
    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self, Tag::LineComment | Tag::BlockComment)
    }

    /// `true` for quoted strings and template literals.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self, Tag::SingleQuoted | Tag::DoubleQuoted | Tag::Template)
    }

    /// Human-readable name for diagnostics and debug output.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::LineComment => "line comment",
            Tag::BlockComment => "block comment",
            Tag::SingleQuoted => "single-quoted string",
            Tag::DoubleQuoted => "double-quoted string",
            Tag::Template => "template literal",
            Tag::Whitespace => "whitespace",
            Tag::Newline => "newline",
            Tag::Other => "other",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    String,
    Template,
    Other,
}

impl TokenKind {
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Template => "template",
            TokenKind::Other => "other",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

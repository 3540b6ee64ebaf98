//! Label comment parsing.
//!
//! Two comment shapes name the language of the following literal:
//!
//! - same-line block comment: `/*XML*/ "<a/>"`
//! - keyword comment: `// XML label` (the literal may start on a later line)
//!
//! [`parse_label`] is the only place comment text is interpreted.

use lel_lexer_core::{Span, Tag, Token};

/// Trailing keyword of the keyword form, matched case-insensitively.
pub const LABEL_KEYWORD: &str = "label";

/// Comment syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

/// Which label shape produced a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelForm<'src> {
    /// Block comment directly before the literal on the same line; the
    /// whole trimmed interior is the tag.
    SameLine { tag: &'src str },
    /// `<words...> <tag> label`; the tag is the word before the keyword.
    Keyword { tag: &'src str },
}

impl<'src> LabelForm<'src> {
    pub fn tag(self) -> &'src str {
        match self {
            LabelForm::SameLine { tag } | LabelForm::Keyword { tag } => tag,
        }
    }
}

/// A comment attached to a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommentLabel<'src> {
    pub style: CommentStyle,
    /// Full comment text, markers included.
    pub raw: &'src str,
    pub span: Span,
    /// Parsed label, or `None` if the comment is not a label.
    pub form: Option<LabelForm<'src>>,
}

impl<'src> CommentLabel<'src> {
    /// Build the label for a comment token.
    ///
    /// `same_line` is `true` when no line break separates the comment end
    /// from the literal's opening delimiter.
    ///
    /// Returns `None` if `token` is not a comment.
    pub fn from_token(token: &Token, source: &'src str, same_line: bool) -> Option<Self> {
        let style = match token.tag {
            Tag::LineComment => CommentStyle::Line,
            Tag::BlockComment => CommentStyle::Block,
            _ => return None,
        };
        let raw = token.text(source);
        Some(CommentLabel {
            style,
            raw,
            span: token.span,
            form: parse_label(style, interior(style, raw), same_line),
        })
    }

    /// Candidate language tag, if the comment is a label.
    pub fn tag(&self) -> Option<&'src str> {
        self.form.map(LabelForm::tag)
    }

    /// Offset just past the comment.
    pub fn end(&self) -> u32 {
        self.span.end
    }
}

/// Comment text without its `//` or `/* */` markers.
fn interior(style: CommentStyle, raw: &str) -> &str {
    match style {
        CommentStyle::Line => raw.strip_prefix("//").unwrap_or(raw),
        CommentStyle::Block => {
            let body = raw.strip_prefix("/*").unwrap_or(raw);
            body.strip_suffix("*/").unwrap_or(body)
        }
    }
}

/// Parse the label carried by a comment interior.
///
/// - Line comments label only through the keyword form.
/// - Block comments label only when `same_line`. A keyword-form interior
///   (`/* XML label */`) still yields the word before `label`; anything else
///   is taken verbatim.
pub fn parse_label(style: CommentStyle, interior: &str, same_line: bool) -> Option<LabelForm<'_>> {
    let trimmed = interior.trim();
    if trimmed.is_empty() {
        return None;
    }
    match (style, keyword_tag(trimmed)) {
        (CommentStyle::Line, Some(tag)) => Some(LabelForm::Keyword { tag }),
        (CommentStyle::Line, None) => None,
        (CommentStyle::Block, _) if !same_line => None,
        (CommentStyle::Block, Some(tag)) => Some(LabelForm::Keyword { tag }),
        (CommentStyle::Block, None) => Some(LabelForm::SameLine { tag: trimmed }),
    }
}

/// Word before a trailing `label` keyword, if there are at least two words.
fn keyword_tag(trimmed: &str) -> Option<&str> {
    let mut words = trimmed.split_whitespace().rev();
    let last = words.next()?;
    if !last.eq_ignore_ascii_case(LABEL_KEYWORD) {
        return None;
    }
    words.next()
}
